//! podprep-core — shared types for the pod-list preprocessing pipeline.
//!
//! The pod and node model mirrors the subset of the Kubernetes API the
//! pipeline reads: identity, priority, per-container
//! resource requirements, and the scheduler's nominated node.
//!
//! [`AutoscalingOptions`] carries the handful of knobs the pipeline
//! recognizes and loads them from TOML.

pub mod config;
pub mod types;

pub use config::{
    AutoscalingOptions, ConfigError, DEFAULT_EXPENDABLE_PODS_PRIORITY_CUTOFF, DEFAULT_POD_PRIORITY,
    TPU_RESOURCE_PREFIX,
};
pub use types::*;
