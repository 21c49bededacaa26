// src/models/mod.rs

//! Domain models for the portal tools.
//!
//! Wire types from the portal API, derived scan output, and configuration.

mod config;
mod course;
mod homework;

// Re-export all public types
pub use config::{
    AccountConfig, ApiConfig, Config, NotifyConfig, PASSWORD_ENV, PathsConfig, ScanConfig,
    USERNAME_ENV,
};
pub use course::{
    CourseEnvelope, CourseRecord, CourseRef, HomeworkRecord, JoinedCourse, SUCCESS_MSG,
    SubmissionRecord, TeacherRef, UserRef,
};
pub use homework::{
    AllHomework, HomeworkInfo, ScanOutcome, ScanReport, SkippedRecord, UpcomingHomework,
};
