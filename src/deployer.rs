// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Façade that stands up the load-test target and adjusts it afterwards.

use crate::config::Config;
use crate::error::{DeployerError, Result};
use crate::kubernetes::{
    self, build_target_deployment, create_client, is_rolled_out, target_manifests,
};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::PostParams, runtime::wait::await_condition, Api, Client};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub struct TargetDeployer {
    client: Client,
    config: Config,
}

impl TargetDeployer {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Build a deployer with a client from the local kubeconfig
    pub async fn try_default(config: Config) -> Result<Self> {
        let client = create_client(&config).await?;
        Ok(Self::new(client, config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn deployments(&self) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), &self.config.namespace)
    }

    /// Create the configured namespace, then the target deployment in it
    pub async fn start(&self) -> Result<()> {
        self.initialize_namespace(&self.config.namespace).await?;
        self.deploy().await?;
        Ok(())
    }

    pub async fn initialize_namespace(&self, name: &str) -> Result<Namespace> {
        kubernetes::create_namespace(&self.client, name).await
    }

    pub async fn delete_namespace(&self, name: &str) -> Result<()> {
        kubernetes::delete_namespace(&self.client, name).await
    }

    /// Create the target deployment. Fails if it already exists.
    #[instrument(skip(self), fields(namespace = %self.config.namespace, deployment = %self.config.deployment_name))]
    pub async fn deploy(&self) -> Result<Deployment> {
        let deployment = build_target_deployment(&self.config);

        info!("Creating deployment with image {}", self.config.image);
        let created = self
            .deployments()
            .create(&PostParams::default(), &deployment)
            .await?;
        info!("Deployment created");

        Ok(created)
    }

    /// Set CPU (milli-units) and memory (MiB) limits. Requests are dropped.
    #[instrument(skip(self), fields(deployment = %self.config.deployment_name))]
    pub async fn update_limits(&self, cpu: i64, memory: i64) -> Result<Deployment> {
        self.read_modify_replace(|d| kubernetes::set_limits(d, cpu, memory))
            .await
    }

    /// Set CPU (milli-units) and memory (MiB) requests, keeping the limits
    #[instrument(skip(self), fields(deployment = %self.config.deployment_name))]
    pub async fn update_requests(&self, cpu: i64, memory: i64) -> Result<Deployment> {
        self.read_modify_replace(|d| kubernetes::set_requests(d, cpu, memory))
            .await
    }

    #[instrument(skip(self), fields(deployment = %self.config.deployment_name))]
    pub async fn update_image(&self, image: &str) -> Result<Deployment> {
        self.read_modify_replace(|d| kubernetes::set_image(d, image))
            .await
    }

    /// Point the target back at the configured image
    pub async fn restore_image(&self) -> Result<Deployment> {
        let image = self.config.image.clone();
        self.update_image(&image).await
    }

    /// Fetch the deployment, apply `mutate` and replace it wholesale.
    ///
    /// The replacement carries the resourceVersion of the fetched object, so a
    /// write that happened in between makes the API answer 409 Conflict. The
    /// conflict is returned to the caller as is.
    async fn read_modify_replace<F>(&self, mutate: F) -> Result<Deployment>
    where
        F: FnOnce(&mut Deployment) -> Result<()>,
    {
        let api = self.deployments();
        let name = &self.config.deployment_name;

        let mut deployment = api.get(name).await?;
        debug!(
            "Fetched deployment at resourceVersion {:?}",
            deployment.metadata.resource_version
        );

        mutate(&mut deployment)?;

        info!("Replacing deployment");
        let replaced = api.replace(name, &PostParams::default(), &deployment).await?;
        info!(
            "Deployment replaced, now at resourceVersion {:?}",
            replaced.metadata.resource_version
        );

        Ok(replaced)
    }

    /// Watch the deployment until every replica runs the latest spec
    #[instrument(skip(self), fields(deployment = %self.config.deployment_name))]
    pub async fn wait_for_rollout(&self, timeout: Duration) -> Result<Deployment> {
        let condition = |obj: Option<&Deployment>| obj.is_some_and(is_rolled_out);
        let wait = await_condition(self.deployments(), &self.config.deployment_name, condition);

        info!("Waiting up to {:?} for rollout", timeout);
        match tokio::time::timeout(timeout, wait).await {
            Ok(Ok(Some(deployment))) => {
                info!("Rollout complete");
                Ok(deployment)
            }
            Ok(Ok(None)) => Err(DeployerError::Rollout(format!(
                "deployment {} disappeared while waiting",
                self.config.deployment_name
            ))),
            Ok(Err(e)) => Err(DeployerError::Rollout(format!(
                "watch on deployment {} failed: {}",
                self.config.deployment_name, e
            ))),
            Err(_) => Err(DeployerError::Rollout(format!(
                "deployment {} not rolled out after {:?}",
                self.config.deployment_name, timeout
            ))),
        }
    }

    /// YAML of the namespace and deployment `start` would submit
    pub fn manifests(&self) -> Result<String> {
        target_manifests(&self.config)
    }
}
