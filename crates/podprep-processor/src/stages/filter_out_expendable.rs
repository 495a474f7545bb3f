//! Drops expendable pods and reserves capacity for pods waiting on
//! preemption.

use tracing::debug;

use podprep_core::Pod;

use crate::classifier::PriorityCutoff;
use crate::context::ProcessingContext;
use crate::error::ProcessorResult;
use crate::processor::PodListProcessor;
use crate::reservation::reserve;
use crate::splitter::split;

/// Filters out pods below the expendable priority cutoff and moves pods
/// nominated to a node into the snapshot at that node.
///
/// Only pods with no nomination are returned.
#[derive(Debug, Default)]
pub struct FilterOutExpendable;

impl FilterOutExpendable {
    pub fn new() -> Self {
        Self
    }
}

impl PodListProcessor for FilterOutExpendable {
    fn name(&self) -> &'static str {
        "filter_out_expendable"
    }

    fn process(
        &mut self,
        ctx: &mut ProcessingContext<'_>,
        pods: Vec<Pod>,
    ) -> ProcessorResult<Vec<Pod>> {
        debug!("filtering out expendable pods");
        let nodes = ctx.node_lister.list()?;
        let cutoff = PriorityCutoff::from_options(ctx.options);

        let split = split(pods, &nodes, cutoff);
        debug!(
            unschedulable = split.unschedulable.len(),
            waiting_for_preemption = split.waiting_for_preemption.len(),
            expendable = split.expendable.len(),
            "split unschedulable pods"
        );

        reserve(split.waiting_for_preemption, &mut *ctx.snapshot)?;
        Ok(split.unschedulable)
    }

    fn clean_up(&mut self) {}
}
