// src/response.rs

use axum::Json;
use serde_json::{Value, json};

use crate::models::student::{Student, StudentRecord};

pub const CODE_OK: i64 = 200;
pub const CODE_PWD_CHANGE_REQUIRED: i64 = 300;
pub const CODE_ERROR: i64 = 400;

/// Bare envelope carrying only a status code.
pub fn status(code: i64) -> Json<Value> {
    Json(json!({ "code": code }))
}

/// Success envelope for login and password update.
///
/// Unselected topics render as the literal string "null": existing clients
/// key off that value rather than a JSON null.
pub fn login_success(student: &Student) -> Json<Value> {
    Json(json!({
        "code": CODE_OK,
        "classId": student.class_id,
        "studentName": student.student_name,
        "topicName": text_or_null(student.topic_name.as_deref()),
        "topicId": text_or_null(student.topic_id.as_deref()),
    }))
}

/// Envelope for the class listing: `size` plus the full record list.
pub fn student_list(students: &[Student]) -> Json<Value> {
    let records: Vec<StudentRecord> = students.iter().map(StudentRecord::from).collect();

    Json(json!({
        "code": CODE_OK,
        "size": records.len(),
        "list": records,
    }))
}

fn text_or_null(value: Option<&str>) -> String {
    value.unwrap_or("null").to_string()
}
