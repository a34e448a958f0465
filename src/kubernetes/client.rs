// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from the locally discovered kubeconfig

use crate::config::Config;
use crate::error::{DeployerError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the cluster the target is deployed to
#[instrument(skip(config), fields(context = ?config.kube_context))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = match &config.kube_context {
        Some(context) => load_context_config(context).await?,
        None => KConfig::infer()
            .await
            .map_err(|e| DeployerError::Kubeconfig(format!("Failed to infer config: {}", e)))?,
    };

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| DeployerError::Kubeconfig(format!("Failed to create client: {}", e)))
}

/// Load the local kubeconfig with an explicit context selected
async fn load_context_config(context: &str) -> Result<KConfig> {
    debug!("Loading kubeconfig context {}", context);

    let options = KubeConfigOptions {
        context: Some(context.to_string()),
        ..Default::default()
    };

    KConfig::from_kubeconfig(&options).await.map_err(|e| {
        DeployerError::Kubeconfig(format!(
            "Failed to load kubeconfig context {}: {}",
            context, e
        ))
    })
}
