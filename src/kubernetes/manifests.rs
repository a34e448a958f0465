// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! YAML rendering of the resources that would be submitted

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{build_target_deployment, namespaces::build_namespace};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Namespace;

/// Render the namespace and deployment as a multi-document YAML stream
pub fn render_manifests(namespace: &Namespace, deployment: &Deployment) -> Result<String> {
    let mut string = String::new();

    string.push_str(&serde_yaml::to_string(namespace)?);
    string.push_str("---\n");
    string.push_str(&serde_yaml::to_string(deployment)?);

    Ok(string)
}

/// Manifests of the namespace and deployment the target consists of
pub fn target_manifests(config: &Config) -> Result<String> {
    render_manifests(
        &build_namespace(&config.namespace),
        &build_target_deployment(config),
    )
}
