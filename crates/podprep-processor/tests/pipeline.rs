//! End-to-end tests of the default processor chain.
//!
//! Drives `PodListProcessorChain::default_chain()` against the in-memory
//! snapshot, the way the autoscaler runs it once per iteration.

use podprep_core::*;
use podprep_processor::*;
use podprep_snapshot::*;

fn make_pod(name: &str, priority: Option<i32>, nominated: Option<&str>) -> Pod {
    let mut pod = Pod::new("default", name);
    pod.priority = priority;
    pod.nominated_node_name = nominated.map(str::to_string);
    pod
}

fn with_requests(mut pod: Pod, requests: &[(&str, u64)]) -> Pod {
    pod.containers.push(Container {
        name: "main".to_string(),
        resources: ResourceRequirements {
            requests: requests.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            limits: ResourceList::new(),
        },
    });
    pod
}

fn options(cutoff: i32) -> AutoscalingOptions {
    AutoscalingOptions {
        expendable_pods_priority_cutoff: cutoff,
        ..AutoscalingOptions::default()
    }
}

fn run(
    snapshot: &mut BasicClusterSnapshot,
    lister: &dyn NodeLister,
    opts: &AutoscalingOptions,
    pods: Vec<Pod>,
) -> ProcessorResult<Vec<Pod>> {
    let mut chain = PodListProcessorChain::default_chain();
    let mut ctx = ProcessingContext::new(snapshot, lister, opts);
    let result = chain.process(&mut ctx, pods);
    chain.clean_up();
    result
}

#[test]
fn expendable_nominated_and_plain_pods() {
    let nodes = vec![Node::new("node1")];
    let mut snapshot = BasicClusterSnapshot::with_nodes(nodes.clone()).unwrap();
    let lister = StaticNodeLister::new(nodes);

    let a = make_pod("a", Some(-5), None);
    let b = make_pod("b", Some(10), Some("node1"));
    let c = make_pod("c", Some(10), None);

    let out = run(&mut snapshot, &lister, &options(0), vec![a.clone(), b.clone(), c.clone()]).unwrap();

    assert_eq!(out, vec![c]);
    assert_eq!(snapshot.pods_on_node("node1").unwrap(), &[b][..]);
    assert_eq!(snapshot.placement_of(&a.key()), None);
    assert_eq!(snapshot.pod_count(), 1);
}

#[test]
fn unknown_nominated_node_aborts_with_internal_error() {
    let mut snapshot = BasicClusterSnapshot::new();
    let lister = StaticNodeLister::default();

    let pods = vec![
        make_pod("a", Some(-5), None),
        make_pod("b", Some(10), Some("node1")),
        make_pod("c", Some(10), None),
    ];
    let err = run(&mut snapshot, &lister, &options(0), pods).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(matches!(
        err,
        ProcessorError::Internal(SnapshotError::NodeNotFound(ref node)) if node == "node1"
    ));
    assert_eq!(snapshot.pod_count(), 0);
}

#[test]
fn node_listing_failure_is_returned_verbatim() {
    let mut snapshot = BasicClusterSnapshot::new();
    let lister = || -> anyhow::Result<Vec<Node>> { Err(anyhow::anyhow!("connection refused")) };

    let err = run(&mut snapshot, &lister, &options(0), vec![make_pod("c", Some(1), None)])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn low_priority_pod_never_reaches_output_or_snapshot() {
    let nodes = vec![Node::new("n1")];
    let mut snapshot = BasicClusterSnapshot::with_nodes(nodes.clone()).unwrap();
    let lister = StaticNodeLister::new(nodes);

    let pods = vec![
        make_pod("low-nominated", Some(-20), Some("n1")),
        make_pod("low", Some(-11), None),
    ];
    let out = run(&mut snapshot, &lister, &AutoscalingOptions::default(), pods).unwrap();

    assert!(out.is_empty());
    assert_eq!(snapshot.pod_count(), 0);
}

#[test]
fn pod_below_cutoff_is_dropped_even_when_nominated() {
    let nodes = vec![Node::new("node1")];
    let mut snapshot = BasicClusterSnapshot::with_nodes(nodes.clone()).unwrap();
    let lister = StaticNodeLister::new(nodes);

    let pods = vec![
        make_pod("low", Some(-5), None),
        make_pod("low-nominated", Some(-5), Some("node1")),
    ];
    let out = run(&mut snapshot, &lister, &options(0), pods).unwrap();

    assert!(out.is_empty());
    assert!(snapshot.pods_on_node("node1").unwrap().is_empty());
}

#[test]
fn pods_without_priority_use_configured_default() {
    let nodes = vec![Node::new("n1")];
    let mut snapshot = BasicClusterSnapshot::with_nodes(nodes.clone()).unwrap();
    let lister = StaticNodeLister::new(nodes);
    let pods = vec![make_pod("unset", None, None)];

    let out = run(&mut snapshot, &lister, &options(0), pods.clone()).unwrap();
    assert_eq!(out.len(), 1);

    let opts = AutoscalingOptions {
        default_pod_priority: -1,
        ..options(0)
    };
    let out = run(&mut snapshot, &lister, &opts, pods).unwrap();
    assert!(out.is_empty());
}

#[test]
fn accelerator_requests_cleared_in_output() {
    let nodes = vec![Node::new("n1")];
    let mut snapshot = BasicClusterSnapshot::with_nodes(nodes.clone()).unwrap();
    let lister = StaticNodeLister::new(nodes);

    let tpu = with_requests(
        make_pod("tpu", Some(0), None),
        &[("cpu", 2000), ("cloud-tpus.google.com/v3", 8)],
    );
    let plain = with_requests(make_pod("plain", Some(0), None), &[("cpu", 500)]);

    let out = run(&mut snapshot, &lister, &options(0), vec![tpu, plain.clone()]).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(
        out[0].total_requests(),
        [("cpu".to_string(), 2000)].into_iter().collect::<ResourceList>()
    );
    assert_eq!(out[1], plain);
}

#[test]
fn fork_and_revert_around_failed_pass() {
    let nodes = vec![Node::new("n1")];
    let mut snapshot = BasicClusterSnapshot::with_nodes(nodes.clone()).unwrap();
    let lister = StaticNodeLister::new(nodes);

    let pods = vec![
        make_pod("first", Some(5), Some("n1")),
        make_pod("second", Some(5), Some("missing")),
    ];

    snapshot.fork();
    let result = run(&mut snapshot, &lister, &options(0), pods);
    assert!(result.is_err());
    // The first reservation went through before the failure.
    assert_eq!(snapshot.pod_count(), 1);

    snapshot.revert().unwrap();
    assert_eq!(snapshot.pod_count(), 0);
}
