//! Pipeline entry points for the deadline scan.
//!
//! - `identity`: stable ids for homework items
//! - `known`: known-id diff and merge policy
//! - `scan`: the `DeadlineScanner` orchestrator

pub mod identity;
pub mod known;
pub mod scan;

pub use identity::{HomeworkId, IdentityStrategy, homework_id};
pub use known::{IdDiff, IdSet, MergePolicy};
pub use scan::DeadlineScanner;
