//! Known-id bookkeeping between scans.
//!
//! Computes which homework ids are new or forgotten relative to the set
//! persisted by the previous scan, and decides what set to persist next.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of homework ids. Ordered so persisted documents are stable.
pub type IdSet = BTreeSet<String>;

/// How the persisted id set is updated at the end of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Persist exactly the ids seen in this scan. An item that drops out of
    /// the feed and later reappears is reported as new again.
    #[default]
    Replace,
    /// Persist every id ever seen.
    Union,
}

impl MergePolicy {
    /// The set to persist after a scan.
    pub fn merge(&self, known: &IdSet, current: &IdSet) -> IdSet {
        match self {
            MergePolicy::Replace => current.clone(),
            MergePolicy::Union => known.union(current).cloned().collect(),
        }
    }
}

/// Difference between the known set and the ids observed in a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdDiff {
    /// Observed but not known, in observation order
    pub added: Vec<String>,
    /// Known but not observed, sorted
    pub removed: Vec<String>,
}

impl IdDiff {
    /// Compute the diff; `observed` may contain duplicates and keeps its order.
    pub fn calculate(known: &IdSet, observed: &[String]) -> Self {
        let mut seen = IdSet::new();
        let added = observed
            .iter()
            .filter(|id| !known.contains(*id) && seen.insert((*id).clone()))
            .cloned()
            .collect();

        let observed_set: IdSet = observed.iter().cloned().collect();
        let removed = known.difference(&observed_set).cloned().collect();

        Self { added, removed }
    }

    /// Check if there are any changes.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}
