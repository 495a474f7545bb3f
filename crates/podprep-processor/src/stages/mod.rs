//! Built-in pod-list processors.

pub mod clear_accelerator_requests;
pub mod filter_out_expendable;

pub use clear_accelerator_requests::ClearAcceleratorRequests;
pub use filter_out_expendable::FilterOutExpendable;
