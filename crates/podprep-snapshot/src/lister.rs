//! Node listing.

use podprep_core::Node;

/// Source of the cluster's current node list.
///
/// Errors are opaque to the pipeline and passed through to its caller
/// unchanged.
pub trait NodeLister {
    fn list(&self) -> anyhow::Result<Vec<Node>>;
}

impl<F> NodeLister for F
where
    F: Fn() -> anyhow::Result<Vec<Node>>,
{
    fn list(&self) -> anyhow::Result<Vec<Node>> {
        self()
    }
}

/// Lister over a fixed set of nodes.
#[derive(Debug, Clone, Default)]
pub struct StaticNodeLister {
    nodes: Vec<Node>,
}

impl StaticNodeLister {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl NodeLister for StaticNodeLister {
    fn list(&self) -> anyhow::Result<Vec<Node>> {
        Ok(self.nodes.clone())
    }
}
