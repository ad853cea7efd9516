//! Incremental synchronization: novelty classification and the background
//! sync cycle.

pub mod filter;
pub mod scheduler;

pub use filter::select_new;
pub use scheduler::SyncScheduler;
