//! Course-data providers.
//!
//! The scanner only sees the [`CourseProvider`] trait. The portal-backed
//! provider fetches joined courses over HTTP; the static provider replays a
//! fixed list or a saved `course_data.json`.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{CourseEnvelope, CourseRecord};
use crate::services::PortalClient;
use crate::storage::{Storage, keys};

/// Endpoint listing the student's joined courses with their homework.
pub const JOINED_COURSES_ENDPOINT: &str = "/stu/course/getJoinedCourse2";

const LOG_TARGET: &str = "zxin::courses";

/// Source of course and homework data for a scan.
#[async_trait]
pub trait CourseProvider: Send + Sync {
    /// Fetch courses in upstream order. `Ok(None)` means the upstream had no
    /// usable data.
    async fn fetch(&self) -> Result<Option<Vec<CourseRecord>>>;
}

/// Provider backed by the portal API.
pub struct PortalCourseProvider {
    client: Arc<PortalClient>,
    log_target: String,
}

impl PortalCourseProvider {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self {
            client,
            log_target: LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    /// Fetch the raw response envelope.
    pub async fn fetch_envelope(&self) -> Result<CourseEnvelope> {
        log::info!(target: self.log_target.as_str(), "Fetching course data");
        let envelope: CourseEnvelope = self.client.api_request(JOINED_COURSES_ENDPOINT).await?;
        if !envelope.is_success() {
            log::error!(
                target: self.log_target.as_str(),
                "Course data request rejected: {}",
                envelope.msg
            );
            return Err(AppError::fetch(format!(
                "course data request rejected: {}",
                envelope.msg
            )));
        }
        Ok(envelope)
    }
}

#[async_trait]
impl CourseProvider for PortalCourseProvider {
    async fn fetch(&self) -> Result<Option<Vec<CourseRecord>>> {
        let courses = self.fetch_envelope().await?.into_courses();
        if let Some(courses) = &courses {
            log::info!(
                target: self.log_target.as_str(),
                "Fetched {} courses",
                courses.len()
            );
        }
        Ok(courses)
    }
}

/// Provider returning a fixed course list.
#[derive(Debug, Clone, Default)]
pub struct StaticCourseProvider {
    courses: Option<Vec<CourseRecord>>,
}

impl StaticCourseProvider {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self {
            courses: Some(courses),
        }
    }

    /// A provider that reports no data.
    pub fn empty() -> Self {
        Self { courses: None }
    }

    /// Replay a saved course envelope.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let envelope = CourseEnvelope::load(path)?;
        Ok(Self {
            courses: envelope.into_courses(),
        })
    }
}

#[async_trait]
impl CourseProvider for StaticCourseProvider {
    async fn fetch(&self) -> Result<Option<Vec<CourseRecord>>> {
        Ok(self.courses.clone())
    }
}

/// Fetch the raw course envelope and save it as `course_data.json`.
///
/// Returns the number of homework items in the export.
pub async fn export_courses(
    provider: &PortalCourseProvider,
    storage: &dyn Storage,
) -> Result<usize> {
    let envelope = provider.fetch_envelope().await?;
    let homework_count = envelope
        .data
        .as_ref()
        .map(|courses| courses.iter().map(|c| c.homework.len()).sum())
        .unwrap_or(0);

    storage
        .save_document(keys::COURSE_DATA, &serde_json::to_value(&envelope)?)
        .await?;
    log::info!(
        target: provider.log_target.as_str(),
        "Saved course data ({} homework items) to {}",
        homework_count,
        keys::COURSE_DATA
    );
    Ok(homework_count)
}
