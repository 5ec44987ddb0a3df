//! Shared services used by the feature flows.

/// Merge engine for independently sourced collections.
pub mod merge;
/// Pagination state for incrementally loaded collections.
pub mod pagination;
/// Error handling policy wrappers.
pub mod policy;
/// Background polling scheduler.
pub mod polling;

pub use merge::{MergeRecord, merge_by_recency};
pub use pagination::{CursorPager, OffsetPager};
pub use policy::{best_effort, surfaced};
pub use polling::{PollStep, PollingScheduler};
