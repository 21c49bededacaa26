//! Stable identities for homework items.
//!
//! A server-provided id always wins. Without one, an id is synthesized from
//! the course name, title and raw deadline string. A synthetic id changes
//! whenever the portal edits the title or deadline of an existing assignment.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::HomeworkRecord;

/// Substituted for any missing field of a synthetic id.
pub const PLACEHOLDER: &str = "unknown";

const HASH_PREFIX: &str = "hw_";
const HASH_HEX_LEN: usize = 16;
const FIELD_SEPARATOR: &[u8] = b"\x1f";
const LOG_TARGET: &str = "zxin::identity";

/// How ids are synthesized when the portal does not send one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStrategy {
    /// `{course}_{title}_{endtime}`
    #[default]
    Composite,
    /// `hw_` followed by a truncated SHA-256 of the same three fields
    Hashed,
}

/// Where an id came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeworkId {
    Native(String),
    Synthetic(String),
}

impl HomeworkId {
    pub fn as_str(&self) -> &str {
        match self {
            HomeworkId::Native(id) | HomeworkId::Synthetic(id) => id,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            HomeworkId::Native(id) | HomeworkId::Synthetic(id) => id,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, HomeworkId::Synthetic(_))
    }
}

fn or_placeholder(field: &str) -> &str {
    if field.is_empty() { PLACEHOLDER } else { field }
}

impl IdentityStrategy {
    /// Identify a homework record within its course. Never fails.
    pub fn identify(&self, homework: &HomeworkRecord, course_name: &str) -> HomeworkId {
        if let Some(id) = homework.native_id() {
            return HomeworkId::Native(id);
        }

        let course = or_placeholder(course_name);
        let title = or_placeholder(&homework.title);
        let endtime = or_placeholder(&homework.endtime);

        let id = match self {
            IdentityStrategy::Composite => format!("{course}_{title}_{endtime}"),
            IdentityStrategy::Hashed => {
                let mut hasher = Sha256::new();
                hasher.update(course.as_bytes());
                hasher.update(FIELD_SEPARATOR);
                hasher.update(title.as_bytes());
                hasher.update(FIELD_SEPARATOR);
                hasher.update(endtime.as_bytes());
                let digest = hex::encode(hasher.finalize());
                format!("{HASH_PREFIX}{}", &digest[..HASH_HEX_LEN])
            }
        };
        HomeworkId::Synthetic(id)
    }

    /// Identify a record, warning under `log_target` when the id is synthetic.
    pub fn id_for(
        &self,
        homework: &HomeworkRecord,
        course_name: &str,
        log_target: &str,
    ) -> String {
        let id = self.identify(homework, course_name);
        if id.is_synthetic() {
            log::warn!(
                target: log_target,
                "Homework 《{}》 in {} has no id, using synthetic id {}",
                homework.title,
                course_name,
                id.as_str()
            );
        }
        id.into_string()
    }
}

/// Identify with the default composite strategy, warning on fallback.
pub fn homework_id(homework: &HomeworkRecord, course_name: &str) -> String {
    IdentityStrategy::Composite.id_for(homework, course_name, LOG_TARGET)
}
