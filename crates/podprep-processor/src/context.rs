//! Per-iteration processing context.

use podprep_core::AutoscalingOptions;
use podprep_snapshot::{ClusterSnapshot, NodeLister};

/// Everything a processor may consult or mutate during one autoscaling
/// iteration. Built fresh by the caller for every pass and dropped after.
pub struct ProcessingContext<'a> {
    pub snapshot: &'a mut dyn ClusterSnapshot,
    pub node_lister: &'a dyn NodeLister,
    pub options: &'a AutoscalingOptions,
}

impl<'a> ProcessingContext<'a> {
    pub fn new(
        snapshot: &'a mut dyn ClusterSnapshot,
        node_lister: &'a dyn NodeLister,
        options: &'a AutoscalingOptions,
    ) -> Self {
        Self {
            snapshot,
            node_lister,
            options,
        }
    }
}
