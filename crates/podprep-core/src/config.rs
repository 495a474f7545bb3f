//! Autoscaling options parser.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Kubernetes priority assumed for pods without a priority class.
pub const DEFAULT_POD_PRIORITY: i32 = 0;

/// Pods below this priority never trigger scale-up.
pub const DEFAULT_EXPENDABLE_PODS_PRIORITY_CUTOFF: i32 = -10;

/// Resource-name prefix of Cloud TPU device requests.
pub const TPU_RESOURCE_PREFIX: &str = "cloud-tpus.google.com/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Options the pod-list pipeline reads from the processing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoscalingOptions {
    /// Pods with priority strictly below this value are expendable.
    pub expendable_pods_priority_cutoff: i32,
    /// Priority substituted for pods that carry none.
    pub default_pod_priority: i32,
    /// Resource-name prefixes identifying accelerator device requests.
    pub accelerator_resource_prefixes: Vec<String>,
}

impl Default for AutoscalingOptions {
    fn default() -> Self {
        Self {
            expendable_pods_priority_cutoff: DEFAULT_EXPENDABLE_PODS_PRIORITY_CUTOFF,
            default_pod_priority: DEFAULT_POD_PRIORITY,
            accelerator_resource_prefixes: vec![TPU_RESOURCE_PREFIX.to_string()],
        }
    }
}

impl AutoscalingOptions {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
