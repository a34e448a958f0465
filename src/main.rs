// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use target_deployer::config::Config;
use target_deployer::kubernetes::target_manifests;
use target_deployer::TargetDeployer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, deployment={}, image={}",
        config.namespace, config.deployment_name, config.image
    );

    if config.dry_run {
        print!("{}", target_manifests(&config)?);
        return Ok(());
    }

    let deployer = TargetDeployer::try_default(config)
        .await
        .context("Failed to connect to Kubernetes cluster")?;
    info!("Connected to Kubernetes cluster");

    deployer
        .start()
        .await
        .context("Failed to stand up the load-test target")?;

    info!("Target deployed");
    Ok(())
}
