//! podprep-snapshot — the mutable simulation state the pipeline writes to.
//!
//! A [`ClusterSnapshot`] maps node names to the pods tentatively placed on
//! them for the current autoscaling iteration. The pipeline only ever calls
//! [`ClusterSnapshot::add_pod`]; the rest of the surface exists for the
//! simulator and for tests.
//!
//! # Architecture
//!
//! ```text
//! BasicClusterSnapshot
//!   └── layers: Vec<Layer>        (base + one per fork)
//!       └── nodes: node name → NodeInfo
//!           ├── Node
//!           └── pods: Vec<Pod>
//! ```
//!
//! Forking pushes a copy of the top layer; `revert` drops it and `commit`
//! folds it into the layer below.
//!
//! [`NodeLister`] is the read side for nodes. Its failures are opaque
//! `anyhow` errors owned by whoever implements it.

pub mod error;
pub mod lister;
pub mod snapshot;

pub use error::{SnapshotError, SnapshotResult};
pub use lister::{NodeLister, StaticNodeLister};
pub use snapshot::{BasicClusterSnapshot, ClusterSnapshot, NodeInfo};
