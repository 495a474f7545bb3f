//! The capability every pipeline stage implements.

use podprep_core::Pod;

use crate::context::ProcessingContext;
use crate::error::ProcessorResult;

/// A stage that consumes the unschedulable pod list and returns the
/// (possibly smaller or rewritten) list for the next stage.
///
/// On error no list is returned; the caller discards the whole pass.
pub trait PodListProcessor {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    fn process(
        &mut self,
        ctx: &mut ProcessingContext<'_>,
        pods: Vec<Pod>,
    ) -> ProcessorResult<Vec<Pod>>;

    /// Release per-stage resources at shutdown. Best effort.
    fn clean_up(&mut self);
}
