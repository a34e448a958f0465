// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace creation and deletion

use crate::error::Result;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Namespace object carrying only its name
pub fn build_namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Create a namespace. Fails with the API error if it already exists.
#[instrument(skip(client))]
pub async fn create_namespace(client: &Client, name: &str) -> Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    info!("Creating namespace {}", name);
    let created = namespaces
        .create(&PostParams::default(), &build_namespace(name))
        .await?;
    info!("Namespace {} created", name);

    Ok(created)
}

/// Delete a namespace. Returns once the API accepted the deletion.
#[instrument(skip(client))]
pub async fn delete_namespace(client: &Client, name: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    info!("Deleting namespace {}", name);
    let response = namespaces.delete(name, &DeleteParams::default()).await?;
    match response.as_ref().left() {
        Some(ns) => debug!(
            "Namespace {} is {}",
            name,
            ns.status
                .as_ref()
                .and_then(|s| s.phase.as_deref())
                .unwrap_or("Terminating")
        ),
        None => debug!("Namespace {} deleted immediately", name),
    }
    info!("Namespace {} deletion accepted", name);

    Ok(())
}
