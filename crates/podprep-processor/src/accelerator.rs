//! Accelerator request normalization.
//!
//! Accelerator devices such as Cloud TPUs are not offered by ordinary node
//! allocatable resources, so a pod requesting them would never fit in the
//! scheduling simulation. Requests and limits for these resources are
//! stripped before simulation.

use podprep_core::{Container, Pod};

fn is_accelerator_resource(name: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
}

fn container_has_accelerator_request(container: &Container, prefixes: &[String]) -> bool {
    container
        .resources
        .requests
        .keys()
        .any(|name| is_accelerator_resource(name, prefixes))
}

/// Whether any container of `pod` requests a resource matching `prefixes`.
pub fn has_accelerator_request(pod: &Pod, prefixes: &[String]) -> bool {
    pod.containers
        .iter()
        .any(|c| container_has_accelerator_request(c, prefixes))
}

fn clear_accelerator_request(mut pod: Pod, prefixes: &[String]) -> Pod {
    for container in &mut pod.containers {
        let resources = &mut container.resources;
        resources
            .requests
            .retain(|name, _| !is_accelerator_resource(name, prefixes));
        resources
            .limits
            .retain(|name, _| !is_accelerator_resource(name, prefixes));
    }
    pod
}

/// Remove accelerator requests and limits from every pod that has them.
/// Pods without accelerator requests are returned untouched.
pub fn clear_accelerator_requests(pods: Vec<Pod>, prefixes: &[String]) -> Vec<Pod> {
    pods.into_iter()
        .map(|pod| {
            if has_accelerator_request(&pod, prefixes) {
                clear_accelerator_request(pod, prefixes)
            } else {
                pod
            }
        })
        .collect()
}
