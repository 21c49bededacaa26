//! Persisted set of homework ids seen by the previous scan.

use std::sync::Arc;

use crate::error::Result;
use crate::pipeline::IdSet;
use crate::storage::{Storage, keys};

const LOG_TARGET: &str = "zxin::known_ids";

/// Loads and replaces the known-id document.
#[derive(Clone)]
pub struct KnownIdStore {
    storage: Arc<dyn Storage>,
    key: String,
    log_target: String,
}

impl KnownIdStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            key: keys::KNOWN_IDS.to_string(),
            log_target: LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the known set. Absent, unreadable or malformed documents all
    /// read as empty; first runs hit this path routinely.
    pub async fn load(&self) -> IdSet {
        match self.storage.load_set(&self.key).await {
            Ok(set) => {
                log::debug!(
                    target: self.log_target.as_str(),
                    "Loaded {} known homework ids",
                    set.len()
                );
                set
            }
            Err(e) => {
                log::warn!(
                    target: self.log_target.as_str(),
                    "Known-id store unavailable ({}), starting from an empty set",
                    e
                );
                IdSet::new()
            }
        }
    }

    /// Replace the persisted set with `ids`.
    pub async fn save(&self, ids: &IdSet) -> Result<()> {
        self.storage.save_set(&self.key, ids).await?;
        log::debug!(
            target: self.log_target.as_str(),
            "Saved {} known homework ids",
            ids.len()
        );
        Ok(())
    }
}
