//! Pod and node types shared across podprep crates.
//!
//! All types are serializable so the driver binary can read cluster state
//! from JSON. Optional fields default when absent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resource quantity in the resource's base unit (millicores for `cpu`,
/// bytes for `memory`, device count for extended resources).
pub type Quantity = u64;

/// Resource name → quantity. Ordered so output is deterministic.
pub type ResourceList = BTreeMap<String, Quantity>;

/// Unique identifier for a node in the cluster.
pub type NodeName = String;

// ── Pod ───────────────────────────────────────────────────────────

/// `namespace/name` identity of a pod.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PodKey {
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for PodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Requests and limits of a single container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceRequirements {
    #[serde(default)]
    pub requests: ResourceList,
    #[serde(default)]
    pub limits: ResourceList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub resources: ResourceRequirements,
}

/// A pod as reported unschedulable by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Resolved priority. `None` when the pod carries no priority class.
    #[serde(default)]
    pub priority: Option<i32>,
    #[serde(default)]
    pub containers: Vec<Container>,
    /// Node the scheduler nominated this pod for after preempting
    /// lower-priority pods there. Empty or `None` means no nomination.
    #[serde(default)]
    pub nominated_node_name: Option<NodeName>,
}

fn default_namespace() -> String {
    "default".to_string()
}

impl Pod {
    /// Create a pod in `namespace` with no containers, priority, or nomination.
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            priority: None,
            containers: Vec::new(),
            nominated_node_name: None,
        }
    }

    pub fn key(&self) -> PodKey {
        PodKey {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }

    /// Effective priority, substituting `default` when the pod has none.
    pub fn priority_or(&self, default: i32) -> i32 {
        self.priority.unwrap_or(default)
    }

    /// The nominated node, treating an empty string as no nomination.
    pub fn nominated_node(&self) -> Option<&str> {
        self.nominated_node_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Sum of container requests per resource.
    pub fn total_requests(&self) -> ResourceList {
        let mut total = ResourceList::new();
        for container in &self.containers {
            for (name, qty) in &container.resources.requests {
                let entry = total.entry(name.clone()).or_insert(0);
                *entry = entry.saturating_add(*qty);
            }
        }
        total
    }
}

// ── Node ──────────────────────────────────────────────────────────

/// A cluster node. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: NodeName,
}

impl Node {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
