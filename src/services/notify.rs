//! Notification delivery.
//!
//! Notifications are best-effort: the scanner logs a failed delivery and
//! moves on.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{HomeworkInfo, NotifyConfig};
use crate::utils::http;

const LOG_TARGET: &str = "zxin::notify";
const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const WEBHOOK_USER_AGENT: &str = "zxin-tools/0.1";

/// Sink for user-facing alerts.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Alert for an item not seen by the previous scan.
    pub fn new_homework(info: &HomeworkInfo) -> Self {
        Self {
            title: "新作业提醒".to_string(),
            body: format!(
                "课程：{}\n作业：{}\n类型：{}\n截止时间：{}\n剩余时间：{}",
                info.course_name,
                info.title,
                info.category,
                info.end_time_local.format(DEADLINE_FORMAT),
                info.remaining_time
            ),
        }
    }

    /// Alert for an unsubmitted item inside the threshold.
    pub fn deadline_approaching(info: &HomeworkInfo) -> Self {
        Self {
            title: "作业即将截止".to_string(),
            body: format!(
                "课程：{}\n教师：{}\n作业：{}\n截止时间：{}\n剩余时间：{}",
                info.course_name,
                info.teacher,
                info.title,
                info.end_time_local.format(DEADLINE_FORMAT),
                info.remaining_time
            ),
        }
    }

    pub async fn send(&self, notifier: &dyn Notifier) -> Result<()> {
        notifier.notify(&self.title, &self.body).await
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    title: &'a str,
    content: &'a str,
}

/// Posts notifications as JSON to a chat webhook.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    log_target: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: http::create_client_with_timeout(WEBHOOK_USER_AGENT, timeout_secs)?,
            url: url.into(),
            log_target: LOG_TARGET.to_string(),
        })
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload {
                title,
                content: body,
            })
            .send()
            .await
            .map_err(|e| AppError::notify(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notify(format!("webhook returned {status}")));
        }
        log::debug!(target: self.log_target.as_str(), "Webhook delivered: {}", title);
        Ok(())
    }
}

/// Writes notifications to the log only.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    log_target: String,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self {
            log_target: LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        log::info!(
            target: self.log_target.as_str(),
            "[{}] {}",
            title,
            body.replace('\n', " | ")
        );
        Ok(())
    }
}

/// Build the notifier selected by configuration.
pub fn from_config(config: &NotifyConfig) -> Result<Arc<dyn Notifier>> {
    match &config.webhook_url {
        Some(url) => Ok(Arc::new(WebhookNotifier::new(url, config.timeout_secs)?)),
        None => Ok(Arc::new(LogNotifier::new())),
    }
}
