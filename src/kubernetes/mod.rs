// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation, namespace calls, and deployment request builders and manifest rendering.

pub mod client;
pub mod deployments;
pub mod manifests;
pub mod namespaces;

pub use client::create_client;
pub use deployments::{build_target_deployment, is_rolled_out, set_image, set_limits, set_requests};
pub use manifests::{render_manifests, target_manifests};
pub use namespaces::{create_namespace, delete_namespace};
