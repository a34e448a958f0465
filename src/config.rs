// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use anyhow::{Context, Result};
use std::env;

/// Names and image of the load-test target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace holding the target deployment
    pub namespace: String,
    pub deployment_name: String,
    /// Image reference of the target container
    pub image: String,
    pub container_name: String,
    /// Kubeconfig context to use instead of the current one
    pub kube_context: Option<String>,
    /// Print the manifests instead of submitting them
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: defaults::NAMESPACE.to_string(),
            deployment_name: defaults::DEPLOYMENT_NAME.to_string(),
            image: defaults::IMAGE.to_string(),
            container_name: defaults::CONTAINER_NAME.to_string(),
            kube_context: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(namespace) = var("TARGET_NAMESPACE") {
            config.namespace = namespace;
        }
        if let Some(deployment_name) = var("TARGET_DEPLOYMENT") {
            config.deployment_name = deployment_name;
        }
        if let Some(image) = var("TARGET_IMAGE") {
            config.image = image;
        }
        if let Some(container_name) = var("TARGET_CONTAINER") {
            config.container_name = container_name;
        }
        config.kube_context = var("KUBE_CONTEXT");
        if let Some(dry_run) = var("DRY_RUN") {
            config.dry_run = dry_run
                .parse()
                .with_context(|| format!("DRY_RUN must be true or false, got {:?}", dry_run))?;
        }

        Ok(config)
    }
}
