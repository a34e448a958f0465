// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Defaults for the load-test target
pub mod defaults {
    pub const NAMESPACE: &str = "target";
    pub const DEPLOYMENT_NAME: &str = "target-deployment";
    pub const IMAGE: &str = "301129966109.dkr.ecr.us-east-2.amazonaws.com/nodeexample";
    pub const CONTAINER_NAME: &str = "load-test";
}

/// Labels tying the deployment to its pods
pub mod labels {
    pub const APP_KEY: &str = "app";
    pub const APP_VALUE: &str = "target";
}

/// Fixed parts of the target pod spec
pub mod pod {
    pub const CONTAINER_PORT: i32 = 80;
    pub const REPLICAS: i32 = 1;
}

/// Resource names and quantity suffixes
pub mod resources {
    pub const CPU: &str = "cpu";
    pub const MEMORY: &str = "memory";
    /// CPU milli-units
    pub const CPU_SUFFIX: &str = "m";
    /// Mebibytes
    pub const MEMORY_SUFFIX: &str = "Mi";
}
