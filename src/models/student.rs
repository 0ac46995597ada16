// src/models/student.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'students' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,

    /// Student number, unique; the key students authenticate with.
    pub student_id: String,

    pub student_name: String,

    /// Class the student belongs to.
    pub class_id: String,

    /// Assigned topic. Both fields stay null until a topic is selected.
    pub topic_id: Option<String>,
    pub topic_name: Option<String>,

    /// Password, a shared default value until the student changes it.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub student_pwd: String,

    /// Flipped once, on the first successful password update.
    pub is_pwd_changed: bool,

    /// Soft-delete flag; inactive students cannot authenticate.
    pub yn: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
}

/// Wire shape of one entry in the class listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i64,
    pub student_id: String,
    pub student_name: String,
    pub class_id: String,
    pub topic_id: Option<String>,
    pub topic_name: Option<String>,
    pub yn: bool,
    pub create_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            student_id: student.student_id.clone(),
            student_name: student.student_name.clone(),
            class_id: student.class_id.clone(),
            topic_id: student.topic_id.clone(),
            topic_name: student.topic_name.clone(),
            yn: student.yn,
            create_time: student.create_time,
            modified_time: student.modified_time,
        }
    }
}
