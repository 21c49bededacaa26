// src/models/course.rs

//! Course and homework records as delivered by the portal API.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Message the portal puts in `msg` for a successful call.
pub const SUCCESS_MSG: &str = "成功";

/// Response envelope of `/stu/course/getJoinedCourse2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEnvelope {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub msg: String,

    #[serde(default)]
    pub data: Option<Vec<JoinedCourse>>,
}

impl CourseEnvelope {
    /// Load a previously saved envelope (e.g. `course_data.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Whether the portal reported success.
    pub fn is_success(&self) -> bool {
        self.msg == SUCCESS_MSG
    }

    /// Convert into course records, or `None` when the envelope carries no data.
    pub fn into_courses(self) -> Option<Vec<CourseRecord>> {
        if !self.is_success() {
            return None;
        }
        let data = self.data?;
        if data.is_empty() {
            return None;
        }
        Some(data.into_iter().map(CourseRecord::from).collect())
    }
}

/// One joined course in the portal's nested shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedCourse {
    #[serde(default)]
    pub course: CourseRef,

    #[serde(default)]
    pub teacher: TeacherRef,

    #[serde(default)]
    pub homework: Vec<HomeworkRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherRef {
    #[serde(default)]
    pub user: UserRef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub nickname: String,
}

/// A course together with its homework, flattened for scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub course_name: String,
    pub teacher_name: String,
    pub homework: Vec<HomeworkRecord>,
}

impl From<JoinedCourse> for CourseRecord {
    fn from(joined: JoinedCourse) -> Self {
        Self {
            course_name: joined.course.name,
            teacher_name: joined.teacher.user.nickname,
            homework: joined.homework,
        }
    }
}

/// A single homework item. Empty strings stand for missing fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    /// Server id; the portal has sent both strings and numbers here.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub starttime: String,

    /// UTC deadline, ISO-8601 with a trailing `Z`
    #[serde(default)]
    pub endtime: String,

    #[serde(default, rename = "studenthomework")]
    pub submissions: Vec<SubmissionRecord>,
}

impl HomeworkRecord {
    /// The server id as a string, if one is present and non-empty.
    pub fn native_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The first submission is authoritative; any submission means submitted.
    pub fn submission(&self) -> Option<&SubmissionRecord> {
        self.submissions.first()
    }

    pub fn is_submitted(&self) -> bool {
        self.submission().is_some()
    }
}

/// A student's submission for a homework item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(default)]
    pub answer_progress: Value,

    #[serde(default)]
    pub correct_progress: Value,

    #[serde(default)]
    pub final_score: Value,

    #[serde(default)]
    pub last_answer_time: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": 2000,
        "msg": "成功",
        "data": [{
            "course": {"name": "数据结构"},
            "teacher": {"user": {"nickname": "王老师"}},
            "homework": [
                {
                    "id": 42,
                    "title": "链表练习",
                    "category": "作业",
                    "starttime": "2026-10-01T00:00:00Z",
                    "endtime": "2026-10-20T15:59:59Z",
                    "studenthomework": [{
                        "answerProgress": 1,
                        "correctProgress": 1,
                        "finalScore": 95,
                        "lastAnswerTime": "2026-10-10T08:00:00Z"
                    }]
                },
                {
                    "title": "树的遍历",
                    "category": "实验",
                    "starttime": "2026-10-05T00:00:00Z",
                    "endtime": "2026-10-25T15:59:59Z",
                    "studenthomework": []
                }
            ]
        }]
    }"#;

    #[test]
    fn test_envelope_into_courses() {
        let envelope: CourseEnvelope = serde_json::from_str(SAMPLE).unwrap();
        assert!(envelope.is_success());

        let courses = envelope.into_courses().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_name, "数据结构");
        assert_eq!(courses[0].teacher_name, "王老师");
        assert_eq!(courses[0].homework.len(), 2);
    }

    #[test]
    fn test_native_id_and_submission() {
        let envelope: CourseEnvelope = serde_json::from_str(SAMPLE).unwrap();
        let courses = envelope.into_courses().unwrap();
        let first = &courses[0].homework[0];
        let second = &courses[0].homework[1];

        assert_eq!(first.native_id(), Some("42".to_string()));
        assert!(first.is_submitted());
        assert_eq!(first.submission().unwrap().final_score, Value::from(95));

        assert_eq!(second.native_id(), None);
        assert!(!second.is_submitted());
    }

    #[test]
    fn test_blank_string_id_is_absent() {
        let hw = HomeworkRecord {
            id: Some(Value::String("  ".into())),
            ..HomeworkRecord::default()
        };
        assert_eq!(hw.native_id(), None);
    }

    #[test]
    fn test_failed_envelope_has_no_courses() {
        let envelope = CourseEnvelope {
            code: Some(4001),
            msg: "失败".into(),
            data: Some(Vec::new()),
        };
        assert!(envelope.into_courses().is_none());
    }

    #[test]
    fn test_empty_data_has_no_courses() {
        let envelope = CourseEnvelope {
            code: Some(2000),
            msg: SUCCESS_MSG.into(),
            data: Some(Vec::new()),
        };
        assert!(envelope.into_courses().is_none());
    }
}
