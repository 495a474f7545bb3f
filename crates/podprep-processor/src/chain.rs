//! Ordered composition of pod-list processors.

use tracing::{debug, warn};

use podprep_core::Pod;

use crate::context::ProcessingContext;
use crate::error::ProcessorResult;
use crate::processor::PodListProcessor;
use crate::stages::{ClearAcceleratorRequests, FilterOutExpendable};

/// Runs a fixed list of processors in order, feeding each one's output to
/// the next. Itself a [`PodListProcessor`], so chains nest.
pub struct PodListProcessorChain {
    processors: Vec<Box<dyn PodListProcessor>>,
}

impl PodListProcessorChain {
    pub fn new(processors: Vec<Box<dyn PodListProcessor>>) -> Self {
        Self { processors }
    }

    /// The stages the autoscaler runs before scale-up simulation.
    pub fn default_chain() -> Self {
        Self::new(vec![
            Box::new(FilterOutExpendable::new()),
            Box::new(ClearAcceleratorRequests::new()),
        ])
    }

    /// Stage names, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl PodListProcessor for PodListProcessorChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn process(
        &mut self,
        ctx: &mut ProcessingContext<'_>,
        mut pods: Vec<Pod>,
    ) -> ProcessorResult<Vec<Pod>> {
        for processor in &mut self.processors {
            let before = pods.len();
            pods = match processor.process(ctx, pods) {
                Ok(pods) => pods,
                Err(err) => {
                    warn!(stage = processor.name(), error = %err, "pod list processor failed");
                    return Err(err);
                }
            };
            debug!(stage = processor.name(), before, after = pods.len(), "stage done");
        }
        Ok(pods)
    }

    fn clean_up(&mut self) {
        for processor in &mut self.processors {
            processor.clean_up();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use podprep_core::AutoscalingOptions;
    use podprep_snapshot::{BasicClusterSnapshot, SnapshotError, StaticNodeLister};

    use crate::error::{ErrorKind, ProcessorError};

    type Log = Rc<RefCell<Vec<String>>>;

    /// Appends a suffix to every pod name, or fails, and logs each call.
    struct Probe {
        name: &'static str,
        fail: bool,
        log: Log,
    }

    impl PodListProcessor for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn process(
            &mut self,
            _ctx: &mut ProcessingContext<'_>,
            pods: Vec<Pod>,
        ) -> ProcessorResult<Vec<Pod>> {
            self.log.borrow_mut().push(format!("process:{}", self.name));
            if self.fail {
                return Err(ProcessorError::Internal(SnapshotError::NodeNotFound(
                    "n".to_string(),
                )));
            }
            Ok(pods
                .into_iter()
                .map(|mut p| {
                    p.name = format!("{}-{}", p.name, self.name);
                    p
                })
                .collect())
        }

        fn clean_up(&mut self) {
            self.log.borrow_mut().push(format!("clean_up:{}", self.name));
        }
    }

    fn probe(name: &'static str, fail: bool, log: &Log) -> Box<dyn PodListProcessor> {
        Box::new(Probe {
            name,
            fail,
            log: Rc::clone(log),
        })
    }

    fn run(chain: &mut PodListProcessorChain, pods: Vec<Pod>) -> ProcessorResult<Vec<Pod>> {
        let mut snapshot = BasicClusterSnapshot::new();
        let lister = StaticNodeLister::default();
        let opts = AutoscalingOptions::default();
        let mut ctx = ProcessingContext::new(&mut snapshot, &lister, &opts);
        chain.process(&mut ctx, pods)
    }

    #[test]
    fn stages_run_in_order_feeding_output_forward() {
        let log = Log::default();
        let mut chain = PodListProcessorChain::new(vec![
            probe("first", false, &log),
            probe("second", false, &log),
        ]);

        let out = run(&mut chain, vec![Pod::new("default", "p")]).unwrap();

        assert_eq!(out[0].name, "p-first-second");
        assert_eq!(*log.borrow(), vec!["process:first", "process:second"]);
    }

    #[test]
    fn stops_at_first_error() {
        let log = Log::default();
        let mut chain = PodListProcessorChain::new(vec![
            probe("first", false, &log),
            probe("broken", true, &log),
            probe("never", false, &log),
        ]);

        let err = run(&mut chain, vec![Pod::new("default", "p")]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(*log.borrow(), vec!["process:first", "process:broken"]);
    }

    #[test]
    fn clean_up_reaches_every_stage() {
        let log = Log::default();
        let mut chain = PodListProcessorChain::new(vec![
            probe("first", false, &log),
            probe("broken", true, &log),
            probe("last", false, &log),
        ]);

        let _ = run(&mut chain, Vec::new());
        log.borrow_mut().clear();
        chain.clean_up();

        assert_eq!(
            *log.borrow(),
            vec!["clean_up:first", "clean_up:broken", "clean_up:last"]
        );
    }

    #[test]
    fn empty_chain_is_identity() {
        let mut chain = PodListProcessorChain::new(Vec::new());
        let pods = vec![Pod::new("default", "a"), Pod::new("default", "b")];
        assert_eq!(run(&mut chain, pods.clone()).unwrap(), pods);
        assert!(chain.is_empty());
    }

    #[test]
    fn default_chain_order() {
        let chain = PodListProcessorChain::default_chain();
        assert_eq!(
            chain.stage_names(),
            vec!["filter_out_expendable", "clear_accelerator_requests"]
        );
        assert_eq!(chain.len(), 2);
    }
}
