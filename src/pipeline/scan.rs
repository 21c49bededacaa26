// src/pipeline/scan.rs

//! Homework deadline scan.
//!
//! One scan is a single sequential pass:
//!
//! 1. Fetch courses from the provider (nothing is written if there are none)
//! 2. Load the known-id set
//! 3. Walk courses and homework in upstream order, identifying, localizing
//!    and classifying each item, notifying about new and upcoming work
//! 4. Persist all items, the merged id set, and the upcoming subset
//!
//! Notifications and writes happen in iteration order. Concurrent scans
//! against the same storage are not coordinated; callers must serialize them.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::models::{
    AllHomework, CourseRecord, HomeworkInfo, HomeworkRecord, ScanConfig, ScanOutcome, ScanReport,
    SkippedRecord, UpcomingHomework,
};
use crate::pipeline::{IdDiff, IdSet};
use crate::services::{CourseProvider, Notification, Notifier};
use crate::storage::{KnownIdStore, Storage, keys};
use crate::utils::duration::{days_to_seconds, format_remaining, seconds_of, whole_days};
use crate::utils::time::{Clock, SystemClock, fixed_offset, parse_utc, to_local};

const LOG_TARGET: &str = "zxin::scan";

/// Orchestrates one deadline scan over injected collaborators.
pub struct DeadlineScanner {
    provider: Arc<dyn CourseProvider>,
    notifier: Arc<dyn Notifier>,
    storage: Arc<dyn Storage>,
    known: KnownIdStore,
    clock: Arc<dyn Clock>,
    config: ScanConfig,
    offset: FixedOffset,
    log_target: String,
}

impl DeadlineScanner {
    /// Create a scanner. Fails only if the configured UTC offset is invalid.
    pub fn new(
        provider: Arc<dyn CourseProvider>,
        notifier: Arc<dyn Notifier>,
        storage: Arc<dyn Storage>,
        config: ScanConfig,
    ) -> Result<Self> {
        let offset = fixed_offset(config.utc_offset_hours)?;
        Ok(Self {
            provider,
            notifier,
            known: KnownIdStore::new(Arc::clone(&storage)),
            storage,
            clock: Arc::new(SystemClock),
            config,
            offset,
            log_target: LOG_TARGET.to_string(),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        let target = target.into();
        self.known = self.known.with_log_target(format!("{target}::known_ids"));
        self.log_target = target;
        self
    }

    fn target(&self) -> &str {
        self.log_target.as_str()
    }

    /// Scan with the configured threshold.
    pub async fn scan(&self) -> ScanOutcome {
        self.scan_with_threshold(self.config.threshold_days).await
    }

    /// Scan, treating unsubmitted work due within `threshold_days` as upcoming.
    pub async fn scan_with_threshold(&self, threshold_days: f64) -> ScanOutcome {
        log::info!(target: self.target(), "Starting homework scan");

        // Fetch
        let courses = match self.provider.fetch().await {
            Ok(Some(courses)) if !courses.is_empty() => courses,
            Ok(_) => {
                log::error!(target: self.target(), "No course data to process");
                return ScanOutcome::NoData;
            }
            Err(e) => {
                log::error!(target: self.target(), "Failed to fetch course data: {}", e);
                return ScanOutcome::NoData;
            }
        };

        // Initialize
        let now = self.clock.now(&self.offset);
        let threshold_seconds = days_to_seconds(threshold_days);
        let known = self.known.load().await;
        let mut current = IdSet::new();
        let mut observed = Vec::new();
        let mut all_homework = Vec::new();
        let mut report = ScanReport::default();

        // Iterate
        for course in &courses {
            log::info!(target: self.target(), "Scanning course: {}", course.course_name);

            for homework in &course.homework {
                let id = self
                    .config
                    .identity
                    .id_for(homework, &course.course_name, self.target());

                let info = match self.build_info(course, homework, &id, now) {
                    Ok(info) => info,
                    Err(e) => {
                        // An unparsable record keeps only the known state it had.
                        if known.contains(&id) && current.insert(id.clone()) {
                            observed.push(id.clone());
                        }
                        log::error!(
                            target: self.target(),
                            "Skipping homework 《{}》 in {}: {}",
                            homework.title,
                            course.course_name,
                            e
                        );
                        report.skipped.push(SkippedRecord {
                            id,
                            course_name: course.course_name.clone(),
                            title: homework.title.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                };

                let first_sighting = current.insert(id.clone());
                if first_sighting {
                    observed.push(id.clone());
                }

                if first_sighting && !known.contains(&id) {
                    log::info!(
                        target: self.target(),
                        "New homework: 《{}》, course: {}",
                        info.title,
                        info.course_name
                    );
                    self.dispatch(&Notification::new_homework(&info), &mut report)
                        .await;
                }

                if info.is_upcoming(threshold_seconds) {
                    log::warn!(
                        target: self.target(),
                        "Upcoming deadline: 《{}》, course: {}, remaining: {}",
                        info.title,
                        info.course_name,
                        info.remaining_time
                    );
                    self.dispatch(&Notification::deadline_approaching(&info), &mut report)
                        .await;
                    report.upcoming.push(info.clone());
                } else {
                    log::info!(
                        target: self.target(),
                        "Homework: 《{}》, course: {}, status: {}",
                        info.title,
                        info.course_name,
                        info.status()
                    );
                }

                all_homework.push(info);
            }
        }

        // Finalize
        report.total = all_homework.len();
        let diff = IdDiff::calculate(&known, &observed);
        if !diff.has_changes() {
            log::info!(target: self.target(), "Homework ids unchanged since last scan");
        }
        report.new_ids = diff.added;
        report.forgotten_ids = diff.removed;

        let all_doc = AllHomework { all_homework };
        self.persist(keys::ALL_HOMEWORK, &all_doc, &mut report).await;

        let merged = self.config.merge_policy.merge(&known, &current);
        if let Err(e) = self.known.save(&merged).await {
            log::error!(target: self.target(), "Failed to save known homework ids: {}", e);
            report.write_failures.push(self.known.key().to_string());
        }

        if report.has_upcoming() {
            let upcoming_doc = UpcomingHomework {
                upcoming_homework: report.upcoming.clone(),
            };
            self.persist(keys::UPCOMING_HOMEWORK, &upcoming_doc, &mut report)
                .await;
            log::info!(
                target: self.target(),
                "Found {} upcoming homework item(s)",
                report.upcoming.len()
            );
        } else {
            log::info!(target: self.target(), "No upcoming homework");
        }

        log::info!(
            target: self.target(),
            "Scan complete: {} items, {} new, {} forgotten, {} skipped",
            report.total,
            report.new_ids.len(),
            report.forgotten_ids.len(),
            report.skipped.len()
        );

        ScanOutcome::Completed(report)
    }

    /// Derive the remaining-time view of one homework item.
    fn build_info(
        &self,
        course: &CourseRecord,
        homework: &HomeworkRecord,
        id: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<HomeworkInfo> {
        let end_time_local =
            to_local(&parse_utc(&homework.endtime)?, self.config.utc_offset_hours)?;
        let seconds_remaining = seconds_of(end_time_local - now);

        Ok(HomeworkInfo {
            id: id.to_string(),
            course_name: course.course_name.clone(),
            teacher: course.teacher_name.clone(),
            title: homework.title.clone(),
            category: homework.category.clone(),
            end_time: homework.endtime.clone(),
            end_time_local,
            days_remaining: whole_days(seconds_remaining),
            seconds_remaining,
            remaining_time: format_remaining(seconds_remaining),
            is_submitted: homework.is_submitted(),
        })
    }

    async fn dispatch(&self, notification: &Notification, report: &mut ScanReport) {
        if let Err(e) = notification.send(self.notifier.as_ref()).await {
            log::error!(
                target: self.target(),
                "Failed to send notification '{}': {}",
                notification.title,
                e
            );
            report.notify_failures += 1;
        }
    }

    async fn persist<T: serde::Serialize>(&self, key: &str, doc: &T, report: &mut ScanReport) {
        let result = match serde_json::to_value(doc) {
            Ok(value) => self.storage.save_document(key, &value).await,
            Err(e) => Err(e.into()),
        };
        match result {
            Ok(()) => log::info!(target: self.target(), "Saved {}", key),
            Err(e) => {
                log::error!(target: self.target(), "Failed to save {}: {}", key, e);
                report.write_failures.push(key.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::error::AppError;
    use crate::pipeline::MergePolicy;
    use crate::services::StaticCourseProvider;
    use crate::storage::LocalStorage;
    use crate::utils::time::FixedClock;

    const NOW: &str = "2026-10-17T00:00:00Z";

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn titles(&self) -> Vec<String> {
            self.sent.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
        }

        fn bodies_titled(&self, title: &str) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .filter(|(t, _)| t == title)
                .map(|(_, b)| b.clone())
                .collect()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, title: &str, body: &str) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((title.to_string(), body.to_string()));
            if self.fail {
                return Err(AppError::notify("webhook down"));
            }
            Ok(())
        }
    }

    /// Storage that rejects every write.
    struct ReadOnlyStorage;

    #[async_trait]
    impl Storage for ReadOnlyStorage {
        async fn load_set(&self, _key: &str) -> Result<IdSet> {
            Ok(IdSet::new())
        }
        async fn save_set(&self, key: &str, _set: &IdSet) -> Result<()> {
            Err(AppError::write(key, "read-only"))
        }
        async fn load_document(&self, _key: &str) -> Result<Option<Value>> {
            Ok(None)
        }
        async fn save_document(&self, key: &str, _value: &Value) -> Result<()> {
            Err(AppError::write(key, "read-only"))
        }
    }

    fn homework(id: Option<&str>, title: &str, endtime: &str, submitted: bool) -> HomeworkRecord {
        HomeworkRecord {
            id: id.map(Value::from),
            title: title.into(),
            category: "作业".into(),
            starttime: "2026-10-01T00:00:00Z".into(),
            endtime: endtime.into(),
            submissions: if submitted {
                vec![Default::default()]
            } else {
                Vec::new()
            },
        }
    }

    fn course(homework: Vec<HomeworkRecord>) -> CourseRecord {
        CourseRecord {
            course_name: "数据结构".into(),
            teacher_name: "王老师".into(),
            homework,
        }
    }

    fn scanner(
        courses: Option<Vec<CourseRecord>>,
        notifier: Arc<RecordingNotifier>,
        storage: Arc<dyn Storage>,
        config: ScanConfig,
    ) -> DeadlineScanner {
        let provider = match courses {
            Some(courses) => StaticCourseProvider::new(courses),
            None => StaticCourseProvider::empty(),
        };
        DeadlineScanner::new(Arc::new(provider), notifier, storage, config)
            .unwrap()
            .with_clock(Arc::new(FixedClock::at(NOW).unwrap()))
            .with_log_target("test::scan")
    }

    fn local(tmp: &TempDir) -> Arc<LocalStorage> {
        Arc::new(LocalStorage::new(tmp.path()))
    }

    fn seed_known(tmp: &TempDir, ids: &[&str]) {
        let json = serde_json::to_string(ids).unwrap();
        std::fs::write(tmp.path().join(keys::KNOWN_IDS), json).unwrap();
    }

    fn read_known(tmp: &TempDir) -> Vec<String> {
        let raw = std::fs::read_to_string(tmp.path().join(keys::KNOWN_IDS)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_no_data_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let s = scanner(None, notifier.clone(), local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        assert!(matches!(outcome, ScanOutcome::NoData));
        assert!(notifier.titles().is_empty());
        assert!(!tmp.path().join(keys::ALL_HOMEWORK).exists());
        assert!(!tmp.path().join(keys::KNOWN_IDS).exists());
    }

    #[tokio::test]
    async fn test_empty_course_list_is_no_data() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let s = scanner(Some(Vec::new()), notifier, local(&tmp), ScanConfig::default());

        assert!(matches!(s.scan().await, ScanOutcome::NoData));
    }

    #[tokio::test]
    async fn test_exactly_one_new_notification() {
        let tmp = TempDir::new().unwrap();
        seed_known(&tmp, &["A"]);
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![
            homework(Some("A"), "旧作业", "2026-12-01T00:00:00Z", false),
            homework(Some("B"), "新作业", "2026-12-01T00:00:00Z", false),
        ])];
        let s = scanner(Some(courses), notifier.clone(), local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        let report = outcome.report().unwrap();

        let new_bodies = notifier.bodies_titled("新作业提醒");
        assert_eq!(new_bodies.len(), 1);
        assert!(new_bodies[0].contains("新作业"));
        assert_eq!(report.new_ids, vec!["B"]);
        assert!(report.forgotten_ids.is_empty());
    }

    #[tokio::test]
    async fn test_upcoming_boundary_and_submission() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        // Exactly three days after NOW
        let courses = vec![course(vec![
            homework(Some("1"), "边界未交", "2026-10-20T00:00:00Z", false),
            homework(Some("2"), "边界已交", "2026-10-20T00:00:00Z", true),
            homework(Some("3"), "刚过期", "2026-10-16T23:59:59Z", false),
        ])];
        let s = scanner(Some(courses), notifier.clone(), local(&tmp), ScanConfig::default());

        let outcome = s.scan_with_threshold(3.0).await;
        let upcoming = outcome.upcoming();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "边界未交");
        assert_eq!(upcoming[0].seconds_remaining, 259_200.0);
        assert_eq!(upcoming[0].days_remaining, 3);
        assert_eq!(notifier.bodies_titled("作业即将截止").len(), 1);

        let report = outcome.report().unwrap();
        assert_eq!(report.total, 3);
    }

    #[tokio::test]
    async fn test_overdue_fields() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(
            Some("1"),
            "刚过期",
            "2026-10-16T23:59:59Z",
            false,
        )])];
        let s = scanner(Some(courses), notifier, local(&tmp), ScanConfig::default());

        s.scan().await;
        let raw = std::fs::read_to_string(tmp.path().join(keys::ALL_HOMEWORK)).unwrap();
        let doc: AllHomework = serde_json::from_str(&raw).unwrap();
        let item = &doc.all_homework[0];
        assert_eq!(item.seconds_remaining, -1.0);
        assert_eq!(item.days_remaining, -1);
        assert_eq!(item.remaining_time, "已过期");
        assert_eq!(item.end_time_local.to_rfc3339(), "2026-10-17T07:59:59+08:00");
    }

    #[tokio::test]
    async fn test_bad_deadline_is_isolated() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![
            homework(Some("bad"), "坏数据", "soon", false),
            homework(Some("good"), "好数据", "2026-10-18T00:00:00Z", false),
        ])];
        let s = scanner(Some(courses), notifier, local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        let report = outcome.report().unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id, "bad");
        assert_eq!(report.total, 1);
        assert_eq!(report.upcoming.len(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.new_ids, vec!["good"]);
        assert_eq!(read_known(&tmp), vec!["good"]);
    }

    #[tokio::test]
    async fn test_fixed_deadline_is_announced_as_new() {
        let tmp = TempDir::new().unwrap();

        let first = Arc::new(RecordingNotifier::default());
        let broken = vec![course(vec![homework(Some("X"), "实验报告", "garbage", false)])];
        let outcome = scanner(Some(broken), first.clone(), local(&tmp), ScanConfig::default())
            .scan()
            .await;
        assert!(outcome.report().unwrap().new_ids.is_empty());
        assert!(first.titles().is_empty());

        let second = Arc::new(RecordingNotifier::default());
        let fixed = vec![course(vec![homework(
            Some("X"),
            "实验报告",
            "2026-10-18T00:00:00Z",
            false,
        )])];
        let outcome = scanner(Some(fixed), second.clone(), local(&tmp), ScanConfig::default())
            .scan()
            .await;
        assert_eq!(outcome.report().unwrap().new_ids, vec!["X"]);
        assert_eq!(second.titles(), vec!["新作业提醒", "作业即将截止"]);
        assert_eq!(read_known(&tmp), vec!["X"]);
    }

    #[tokio::test]
    async fn test_known_item_with_bad_deadline_stays_known() {
        let tmp = TempDir::new().unwrap();
        seed_known(&tmp, &["X"]);
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(Some("X"), "实验报告", "garbage", false)])];
        let s = scanner(Some(courses), notifier.clone(), local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        let report = outcome.report().unwrap();
        assert!(report.new_ids.is_empty());
        assert!(report.forgotten_ids.is_empty());
        assert!(notifier.titles().is_empty());
        assert_eq!(read_known(&tmp), vec!["X"]);
    }

    #[tokio::test]
    async fn test_replace_policy_forgets_vanished_ids() {
        let tmp = TempDir::new().unwrap();
        seed_known(&tmp, &["gone", "kept"]);
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(
            Some("kept"),
            "保留",
            "2026-12-01T00:00:00Z",
            false,
        )])];
        let s = scanner(Some(courses), notifier, local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        assert_eq!(outcome.report().unwrap().forgotten_ids, vec!["gone"]);
        assert_eq!(read_known(&tmp), vec!["kept"]);
    }

    #[tokio::test]
    async fn test_union_policy_keeps_vanished_ids() {
        let tmp = TempDir::new().unwrap();
        seed_known(&tmp, &["gone"]);
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(
            Some("fresh"),
            "新",
            "2026-12-01T00:00:00Z",
            false,
        )])];
        let config = ScanConfig {
            merge_policy: MergePolicy::Union,
            ..ScanConfig::default()
        };
        let s = scanner(Some(courses), notifier, local(&tmp), config);

        s.scan().await;
        assert_eq!(read_known(&tmp), vec!["fresh", "gone"]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_notify_once() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![
            homework(Some("same"), "第一版", "2026-12-01T00:00:00Z", false),
            homework(Some("same"), "第二版", "2026-12-02T00:00:00Z", false),
        ])];
        let s = scanner(Some(courses), notifier.clone(), local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        assert_eq!(notifier.bodies_titled("新作业提醒").len(), 1);
        assert_eq!(outcome.report().unwrap().total, 2);
    }

    #[tokio::test]
    async fn test_notify_failure_does_not_abort() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::failing());
        let courses = vec![course(vec![homework(
            Some("1"),
            "即将截止",
            "2026-10-18T00:00:00Z",
            false,
        )])];
        let s = scanner(Some(courses), notifier.clone(), local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        let report = outcome.report().unwrap();
        assert_eq!(report.notify_failures, 2);
        assert_eq!(report.upcoming.len(), 1);
        assert!(tmp.path().join(keys::UPCOMING_HOMEWORK).exists());
        assert_eq!(notifier.titles(), vec!["新作业提醒", "作业即将截止"]);
    }

    #[tokio::test]
    async fn test_write_failures_are_reported() {
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(
            Some("1"),
            "即将截止",
            "2026-10-18T00:00:00Z",
            false,
        )])];
        let s = scanner(
            Some(courses),
            notifier,
            Arc::new(ReadOnlyStorage),
            ScanConfig::default(),
        );

        let outcome = s.scan().await;
        let report = outcome.report().unwrap();
        assert_eq!(
            report.write_failures,
            vec![
                keys::ALL_HOMEWORK.to_string(),
                keys::KNOWN_IDS.to_string(),
                keys::UPCOMING_HOMEWORK.to_string()
            ]
        );
        assert_eq!(report.upcoming.len(), 1);
    }

    #[tokio::test]
    async fn test_no_upcoming_skips_upcoming_document() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(
            Some("1"),
            "很远",
            "2027-01-01T00:00:00Z",
            false,
        )])];
        let s = scanner(Some(courses), notifier, local(&tmp), ScanConfig::default());

        let outcome = s.scan().await;
        assert!(outcome.upcoming().is_empty());
        assert!(tmp.path().join(keys::ALL_HOMEWORK).exists());
        assert!(!tmp.path().join(keys::UPCOMING_HOMEWORK).exists());
    }

    #[tokio::test]
    async fn test_synthetic_ids_follow_strategy() {
        let tmp = TempDir::new().unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let courses = vec![course(vec![homework(
            None,
            "无编号",
            "2027-01-01T00:00:00Z",
            false,
        )])];
        let config = ScanConfig {
            identity: crate::pipeline::IdentityStrategy::Hashed,
            ..ScanConfig::default()
        };
        let s = scanner(Some(courses), notifier, local(&tmp), config);

        let outcome = s.scan().await;
        let id = &outcome.report().unwrap().new_ids[0];
        assert!(id.starts_with("hw_"));
    }

    #[tokio::test]
    async fn test_second_scan_sends_no_new_notifications() {
        let tmp = TempDir::new().unwrap();
        let courses = vec![course(vec![homework(
            None,
            "无编号",
            "2027-01-01T00:00:00Z",
            false,
        )])];

        let first = Arc::new(RecordingNotifier::default());
        scanner(Some(courses.clone()), first.clone(), local(&tmp), ScanConfig::default())
            .scan()
            .await;
        assert_eq!(first.titles().len(), 1);

        let second = Arc::new(RecordingNotifier::default());
        scanner(Some(courses), second.clone(), local(&tmp), ScanConfig::default())
            .scan()
            .await;
        assert!(second.titles().is_empty());
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let config = ScanConfig {
            utc_offset_hours: 99,
            ..ScanConfig::default()
        };
        let result = DeadlineScanner::new(
            Arc::new(StaticCourseProvider::empty()),
            Arc::new(RecordingNotifier::default()),
            Arc::new(ReadOnlyStorage),
            config,
        );
        assert!(result.is_err());
    }
}
