// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployerError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Malformed deployment: {0}")]
    MalformedDeployment(String),

    #[error("Failed to render manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),

    #[error("Rollout failed: {0}")]
    Rollout(String),
}

impl DeployerError {
    /// HTTP status returned by the API server, if the error came from it
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DeployerError::Kube(kube::Error::Api(resp)) => Some(resp.code),
            _ => None,
        }
    }

    /// The resource was already present (create of an existing object)
    pub fn is_already_exists(&self) -> bool {
        self.api_reason() == Some("AlreadyExists")
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// A replace lost the race against another writer
    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409) && !self.is_already_exists()
    }

    fn api_reason(&self) -> Option<&str> {
        match self {
            DeployerError::Kube(kube::Error::Api(resp)) => Some(resp.reason.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployerError>;
