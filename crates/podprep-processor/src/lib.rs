//! podprep-processor — pod-list preprocessing before scale-up simulation.
//!
//! Given the pods the scheduler reported unschedulable, the processors
//! decide which of them should drive scale-up and keep the cluster
//! snapshot consistent with preemption decisions the scheduler already
//! made.
//!
//! # Components
//!
//! - **`classifier`** — expendable-pod predicate
//! - **`splitter`** — unschedulable / waiting-for-preemption / expendable
//! - **`reservation`** — places nominated pods into the snapshot
//! - **`accelerator`** — strips accelerator requests (Cloud TPU by default)
//! - **`stages`** — the above wrapped as [`PodListProcessor`]s
//! - **`chain`** — ordered composition of processors
//!
//! # Flow
//!
//! ```text
//! unschedulable pods
//!   → FilterOutExpendable        (drop expendable, reserve nominated)
//!   → ClearAcceleratorRequests   (normalize requests)
//!   → scheduling simulation
//! ```
//!
//! Everything runs synchronously in the caller's thread. The snapshot is
//! borrowed exclusively through [`ProcessingContext`] for the pass.

pub mod accelerator;
pub mod chain;
pub mod classifier;
pub mod context;
pub mod error;
pub mod processor;
pub mod reservation;
pub mod splitter;
pub mod stages;

pub use accelerator::{clear_accelerator_requests, has_accelerator_request};
pub use chain::PodListProcessorChain;
pub use classifier::{PriorityCutoff, is_expendable};
pub use context::ProcessingContext;
pub use error::{ErrorKind, ProcessorError, ProcessorResult};
pub use processor::PodListProcessor;
pub use reservation::reserve;
pub use splitter::{PodSplit, split};
pub use stages::{ClearAcceleratorRequests, FilterOutExpendable};
