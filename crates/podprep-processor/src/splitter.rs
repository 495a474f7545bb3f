//! Splits unschedulable pods into the buckets the autoscaler cares about.
//!
//! Every input pod lands in exactly one of:
//! 1. `expendable` — below the priority cutoff, ignored for scale-up
//! 2. `waiting_for_preemption` — nominated to a node by the scheduler
//! 3. `unschedulable` — everything else

use std::collections::HashSet;

use tracing::{debug, warn};

use podprep_core::{Node, Pod};

use crate::classifier::PriorityCutoff;

/// Result of [`split`]. Each vector preserves input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodSplit {
    pub unschedulable: Vec<Pod>,
    pub waiting_for_preemption: Vec<Pod>,
    pub expendable: Vec<Pod>,
}

impl PodSplit {
    pub fn len(&self) -> usize {
        self.unschedulable.len() + self.waiting_for_preemption.len() + self.expendable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify `pods` against `cutoff`.
///
/// `nodes` is only used to flag nominations that point at nodes which do
/// not exist; such pods still go to `waiting_for_preemption` and will fail
/// when reserved in the snapshot.
pub fn split(pods: Vec<Pod>, nodes: &[Node], cutoff: PriorityCutoff) -> PodSplit {
    let node_names: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    let mut result = PodSplit::default();

    for pod in pods {
        if cutoff.is_expendable(&pod) {
            debug!(
                pod = %pod.key(),
                priority = pod.priority_or(cutoff.default_priority),
                cutoff = cutoff.cutoff,
                "dropping expendable pod"
            );
            result.expendable.push(pod);
            continue;
        }

        match pod.nominated_node() {
            Some(node) => {
                if !node_names.contains(node) {
                    warn!(pod = %pod.key(), node, "pod nominated to unknown node");
                }
                debug!(
                    pod = %pod.key(),
                    node,
                    "pod will be scheduled after lower-priority pods are preempted"
                );
                result.waiting_for_preemption.push(pod);
            }
            None => result.unschedulable.push(pod),
        }
    }

    result
}
