//! Cluster snapshot — nodes and the pods tentatively placed on them.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use podprep_core::{Node, NodeName, Pod, PodKey, ResourceList};

use crate::error::{SnapshotError, SnapshotResult};

/// Mutable, iteration-scoped scheduling state.
///
/// Implementations are not expected to lock: the pipeline holds the only
/// `&mut` for the duration of a pass.
pub trait ClusterSnapshot {
    /// Place `pod` on `node_name`. Fails on an unknown node or when the
    /// pod is already placed somewhere in the snapshot.
    fn add_pod(&mut self, pod: Pod, node_name: &str) -> SnapshotResult<()>;

    /// Remove a previously placed pod, returning it.
    fn remove_pod(&mut self, key: &PodKey) -> SnapshotResult<Pod>;

    fn node_info(&self, node_name: &str) -> Option<&NodeInfo>;
}

/// A node together with the pods placed on it.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    pub node: Node,
    pub pods: Vec<Pod>,
}

impl NodeInfo {
    fn new(node: Node) -> Self {
        Self {
            node,
            pods: Vec::new(),
        }
    }

    /// Sum of the requests of every pod on this node.
    pub fn requested(&self) -> ResourceList {
        let mut total = ResourceList::new();
        for pod in &self.pods {
            for (name, qty) in pod.total_requests() {
                let entry = total.entry(name).or_insert(0);
                *entry = entry.saturating_add(qty);
            }
        }
        total
    }
}

#[derive(Debug, Clone, Default)]
struct Layer {
    nodes: BTreeMap<NodeName, NodeInfo>,
    /// Pod → node it is placed on.
    placements: HashMap<PodKey, NodeName>,
}

/// In-memory [`ClusterSnapshot`] with fork/revert/commit.
#[derive(Debug, Clone)]
pub struct BasicClusterSnapshot {
    layers: Vec<Layer>,
}

impl Default for BasicClusterSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicClusterSnapshot {
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::default()],
        }
    }

    /// Build a snapshot containing `nodes` and no pods.
    pub fn with_nodes(nodes: impl IntoIterator<Item = Node>) -> SnapshotResult<Self> {
        let mut snapshot = Self::new();
        for node in nodes {
            snapshot.add_node(node)?;
        }
        Ok(snapshot)
    }

    fn top(&self) -> &Layer {
        // `layers` always holds at least the base layer.
        &self.layers[self.layers.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Layer {
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn add_node(&mut self, node: Node) -> SnapshotResult<()> {
        let layer = self.top_mut();
        if layer.nodes.contains_key(&node.name) {
            return Err(SnapshotError::NodeAlreadyExists(node.name));
        }
        debug!(node = %node.name, "node added to snapshot");
        layer.nodes.insert(node.name.clone(), NodeInfo::new(node));
        Ok(())
    }

    pub fn node_names(&self) -> Vec<&str> {
        self.top().nodes.keys().map(String::as_str).collect()
    }

    /// Pods placed on `node_name`, or `None` for an unknown node.
    pub fn pods_on_node(&self, node_name: &str) -> Option<&[Pod]> {
        self.top()
            .nodes
            .get(node_name)
            .map(|info| info.pods.as_slice())
    }

    /// Node the pod is placed on, if any.
    pub fn placement_of(&self, key: &PodKey) -> Option<&str> {
        self.top().placements.get(key).map(String::as_str)
    }

    pub fn pod_count(&self) -> usize {
        self.top().placements.len()
    }

    /// Start a speculative layer. Changes made until the matching
    /// [`revert`](Self::revert) are discarded by it.
    pub fn fork(&mut self) {
        let copy = self.top().clone();
        self.layers.push(copy);
        trace!(depth = self.layers.len() - 1, "snapshot forked");
    }

    /// Drop every change made since the last [`fork`](Self::fork).
    pub fn revert(&mut self) -> SnapshotResult<()> {
        if self.layers.len() == 1 {
            return Err(SnapshotError::NoFork);
        }
        self.layers.pop();
        trace!(depth = self.layers.len() - 1, "snapshot reverted");
        Ok(())
    }

    /// Keep the changes made since the last [`fork`](Self::fork).
    pub fn commit(&mut self) -> SnapshotResult<()> {
        if self.layers.len() == 1 {
            return Err(SnapshotError::NoFork);
        }
        let top = self.layers.pop().ok_or(SnapshotError::NoFork)?;
        *self.top_mut() = top;
        trace!(depth = self.layers.len() - 1, "snapshot committed");
        Ok(())
    }
}

impl ClusterSnapshot for BasicClusterSnapshot {
    fn add_pod(&mut self, pod: Pod, node_name: &str) -> SnapshotResult<()> {
        let key = pod.key();
        let layer = self.top_mut();

        if let Some(existing) = layer.placements.get(&key) {
            return Err(SnapshotError::PodAlreadyExists {
                pod: key.to_string(),
                node: existing.clone(),
            });
        }
        let info = layer
            .nodes
            .get_mut(node_name)
            .ok_or_else(|| SnapshotError::NodeNotFound(node_name.to_string()))?;

        info.pods.push(pod);
        debug!(pod = %key, node = node_name, "pod added to snapshot");
        layer.placements.insert(key, node_name.to_string());
        Ok(())
    }

    fn remove_pod(&mut self, key: &PodKey) -> SnapshotResult<Pod> {
        let layer = self.top_mut();
        let node_name = layer
            .placements
            .get(key)
            .ok_or_else(|| SnapshotError::PodNotFound(key.to_string()))?;
        let info = layer
            .nodes
            .get_mut(node_name)
            .ok_or_else(|| SnapshotError::NodeNotFound(node_name.clone()))?;
        let index = info
            .pods
            .iter()
            .position(|p| p.namespace == key.namespace && p.name == key.name)
            .ok_or_else(|| SnapshotError::PodNotFound(key.to_string()))?;

        // Both lookups succeeded; only now mutate.
        let pod = info.pods.remove(index);
        layer.placements.remove(key);
        Ok(pod)
    }

    fn node_info(&self, node_name: &str) -> Option<&NodeInfo> {
        self.top().nodes.get(node_name)
    }
}
