//! Reserves snapshot capacity for pods waiting on preemption.
//!
//! Placing a nominated pod on its node simulates a scheduling decision that
//! was never simulated: the lower-priority victims stay in the snapshot, so
//! the node may look over-committed. This approximation is intentional and
//! matches how the autoscaler accounted for these pods before it used the
//! scheduler framework. Do not replace it with victim selection here.

use tracing::error;

use podprep_core::Pod;
use podprep_snapshot::ClusterSnapshot;

use crate::error::{ProcessorError, ProcessorResult};

/// Insert each pod into `snapshot` at its nominated node, in order.
///
/// Stops at the first failed insertion. Pods inserted before the failure
/// stay in the snapshot.
pub fn reserve(pods: Vec<Pod>, snapshot: &mut dyn ClusterSnapshot) -> ProcessorResult<()> {
    for pod in pods {
        let node = pod.nominated_node().unwrap_or_default().to_string();
        let key = pod.key();
        if let Err(err) = snapshot.add_pod(pod, &node) {
            error!(
                pod = %key,
                node = %node,
                error = %err,
                "failed to update snapshot with pod waiting for preemption"
            );
            return Err(ProcessorError::Internal(err));
        }
    }
    Ok(())
}
