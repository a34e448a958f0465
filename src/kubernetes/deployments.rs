// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment request construction and in-place mutation of fetched deployments

use crate::config::Config;
use crate::constants::{labels, pod, resources};
use crate::error::{DeployerError, Result};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, ResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use kube::ResourceExt;
use std::collections::BTreeMap;

fn target_labels() -> BTreeMap<String, String> {
    [(labels::APP_KEY.to_string(), labels::APP_VALUE.to_string())].into()
}

/// Build the creation request for the target deployment
pub fn build_target_deployment(config: &Config) -> Deployment {
    let container = Container {
        name: config.container_name.clone(),
        image: Some(config.image.clone()),
        ports: Some(vec![ContainerPort {
            container_port: pod::CONTAINER_PORT,
            ..Default::default()
        }]),
        ..Default::default()
    };

    Deployment {
        metadata: ObjectMeta {
            name: Some(config.deployment_name.clone()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(pod::REPLICAS),
            selector: LabelSelector {
                match_labels: Some(target_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(target_labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// CPU in milli-units and memory in mebibytes, unvalidated
pub fn quantities(cpu: i64, memory: i64) -> BTreeMap<String, Quantity> {
    BTreeMap::from([
        (
            resources::CPU.to_string(),
            Quantity(format!("{}{}", cpu, resources::CPU_SUFFIX)),
        ),
        (
            resources::MEMORY.to_string(),
            Quantity(format!("{}{}", memory, resources::MEMORY_SUFFIX)),
        ),
    ])
}

/// The first container of the pod template, which is the one this crate manages
fn target_container(deployment: &mut Deployment) -> Result<&mut Container> {
    let name = deployment.name_any();
    deployment
        .spec
        .as_mut()
        .and_then(|s| s.template.spec.as_mut())
        .and_then(|p| p.containers.first_mut())
        .ok_or_else(|| {
            DeployerError::MalformedDeployment(format!(
                "deployment {} has no container in its pod template",
                name
            ))
        })
}

/// Replace the container resources with the given limits.
/// Existing requests are dropped, not carried over.
pub fn set_limits(deployment: &mut Deployment, cpu: i64, memory: i64) -> Result<()> {
    let container = target_container(deployment)?;
    container.resources = Some(ResourceRequirements {
        limits: Some(quantities(cpu, memory)),
        ..Default::default()
    });
    Ok(())
}

/// Replace the container requests, keeping whatever limits were set
pub fn set_requests(deployment: &mut Deployment, cpu: i64, memory: i64) -> Result<()> {
    let container = target_container(deployment)?;
    let limits = container.resources.take().and_then(|r| r.limits);
    container.resources = Some(ResourceRequirements {
        limits,
        requests: Some(quantities(cpu, memory)),
        ..Default::default()
    });
    Ok(())
}

pub fn set_image(deployment: &mut Deployment, image: &str) -> Result<()> {
    target_container(deployment)?.image = Some(image.to_string());
    Ok(())
}

/// Check whether the controller has observed the latest spec and every
/// desired replica is updated, ready and available
pub fn is_rolled_out(deployment: &Deployment) -> bool {
    let desired = deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(pod::REPLICAS);
    let generation = deployment.metadata.generation.unwrap_or(0);

    deployment.status.as_ref().is_some_and(|status| {
        status.observed_generation.unwrap_or(0) >= generation
            && status.updated_replicas.unwrap_or(0) == desired
            && status.ready_replicas.unwrap_or(0) == desired
            && status.available_replicas.unwrap_or(0) == desired
            && status.replicas.unwrap_or(0) == desired
    })
}
