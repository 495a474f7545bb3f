//! One processing pass over a cluster state file.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use podprep_core::{AutoscalingOptions, Node, Pod};
use podprep_processor::{PodListProcessor, PodListProcessorChain, ProcessingContext};
use podprep_snapshot::{BasicClusterSnapshot, StaticNodeLister};

/// Input document: the cluster's nodes and its unschedulable pods.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterState {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub pods: Vec<Pod>,
}

/// Output document.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Pods that should drive scale-up simulation.
    pub unschedulable: Vec<Pod>,
    /// Node name → `namespace/name` of pods reserved there.
    pub reserved: BTreeMap<String, Vec<String>>,
}

pub fn load_options(path: Option<&Path>) -> anyhow::Result<AutoscalingOptions> {
    match path {
        Some(path) => AutoscalingOptions::from_file(path)
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(AutoscalingOptions::default()),
    }
}

pub fn read_state(path: &Path) -> anyhow::Result<ClusterState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(state)
}

/// Run the default chain over `state` with a fresh snapshot.
pub fn process(state: ClusterState, options: &AutoscalingOptions) -> anyhow::Result<Report> {
    let mut snapshot = BasicClusterSnapshot::with_nodes(state.nodes.clone())?;
    let lister = StaticNodeLister::new(state.nodes);
    let mut chain = PodListProcessorChain::default_chain();

    let input = state.pods.len();
    let result = {
        let mut ctx = ProcessingContext::new(&mut snapshot, &lister, options);
        chain.process(&mut ctx, state.pods)
    };
    chain.clean_up();
    let unschedulable = result?;

    let mut reserved = BTreeMap::new();
    for node in snapshot.node_names() {
        let pods = snapshot.pods_on_node(node).unwrap_or_default();
        if !pods.is_empty() {
            reserved.insert(
                node.to_string(),
                pods.iter().map(|p| p.key().to_string()).collect(),
            );
        }
    }

    info!(
        input,
        unschedulable = unschedulable.len(),
        reserved = snapshot.pod_count(),
        "pod list processed"
    );
    Ok(Report {
        unschedulable,
        reserved,
    })
}
