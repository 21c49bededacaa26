//! Storage abstractions for scan output and scan-to-scan state.
//!
//! Everything is a keyed JSON document under one output root:
//!
//! ```text
//! output/
//! ├── known_homework_ids.json   # ids seen by the last scan
//! ├── all_homework.json         # every item of the last scan
//! ├── upcoming_homework.json    # upcoming-actionable subset (when non-empty)
//! └── course_data.json          # raw course export
//! ```

pub mod known;
pub mod local;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::pipeline::IdSet;

// Re-export for convenience
pub use known::KnownIdStore;
pub use local::LocalStorage;

/// Document keys used by the tools.
pub mod keys {
    pub const KNOWN_IDS: &str = "known_homework_ids.json";
    pub const ALL_HOMEWORK: &str = "all_homework.json";
    pub const UPCOMING_HOMEWORK: &str = "upcoming_homework.json";
    pub const COURSE_DATA: &str = "course_data.json";
}

/// Trait for keyed document storage backends.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load a set of strings. A missing document is an empty set; a
    /// malformed one is a `PersistenceRead` error.
    async fn load_set(&self, key: &str) -> Result<IdSet>;

    /// Replace the document at `key` with the given set.
    async fn save_set(&self, key: &str, set: &IdSet) -> Result<()>;

    /// Load a JSON document, `None` if absent.
    async fn load_document(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the document at `key` with a JSON value.
    async fn save_document(&self, key: &str, value: &Value) -> Result<()>;
}
