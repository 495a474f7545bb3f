//! Strips accelerator resource requests before simulation.

use podprep_core::Pod;

use crate::accelerator::clear_accelerator_requests;
use crate::context::ProcessingContext;
use crate::error::ProcessorResult;
use crate::processor::PodListProcessor;

/// Applies [`clear_accelerator_requests`] with the prefixes from the
/// context's options. Never fails.
#[derive(Debug, Default)]
pub struct ClearAcceleratorRequests;

impl ClearAcceleratorRequests {
    pub fn new() -> Self {
        Self
    }
}

impl PodListProcessor for ClearAcceleratorRequests {
    fn name(&self) -> &'static str {
        "clear_accelerator_requests"
    }

    fn process(
        &mut self,
        ctx: &mut ProcessingContext<'_>,
        pods: Vec<Pod>,
    ) -> ProcessorResult<Vec<Pod>> {
        Ok(clear_accelerator_requests(
            pods,
            &ctx.options.accelerator_resource_prefixes,
        ))
    }

    fn clean_up(&mut self) {}
}
