//! Priority classification of pods.

use podprep_core::{AutoscalingOptions, DEFAULT_POD_PRIORITY, Pod};

/// Priority threshold below which pods are expendable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityCutoff {
    pub cutoff: i32,
    /// Priority assumed for pods that carry none.
    pub default_priority: i32,
}

impl PriorityCutoff {
    pub fn new(cutoff: i32) -> Self {
        Self {
            cutoff,
            default_priority: DEFAULT_POD_PRIORITY,
        }
    }

    pub fn with_default_priority(mut self, default_priority: i32) -> Self {
        self.default_priority = default_priority;
        self
    }

    pub fn from_options(options: &AutoscalingOptions) -> Self {
        Self::new(options.expendable_pods_priority_cutoff)
            .with_default_priority(options.default_pod_priority)
    }

    /// A pod is expendable when its effective priority is strictly below
    /// the cutoff. Nothing else about the pod is consulted.
    pub fn is_expendable(&self, pod: &Pod) -> bool {
        pod.priority_or(self.default_priority) < self.cutoff
    }
}

/// [`PriorityCutoff::is_expendable`] with the default pod priority.
pub fn is_expendable(pod: &Pod, cutoff: i32) -> bool {
    PriorityCutoff::new(cutoff).is_expendable(pod)
}
