//! Service layer for the portal tools.
//!
//! This module contains the collaborators the scanner consumes:
//! - Portal access and login (`PortalClient`)
//! - Course data (`CourseProvider`, `PortalCourseProvider`, `StaticCourseProvider`)
//! - Notification delivery (`Notifier`, `WebhookNotifier`, `LogNotifier`)

mod client;
mod courses;
pub mod notify;

pub use client::{ApiResponse, PortalClient, SUCCESS_CODE, UserInfo, encode_credentials};
pub use courses::{
    CourseProvider, JOINED_COURSES_ENDPOINT, PortalCourseProvider, StaticCourseProvider,
    export_courses,
};
pub use notify::{LogNotifier, Notification, Notifier, WebhookNotifier};
