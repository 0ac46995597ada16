// src/services/user.rs

use sqlx::PgPool;

use crate::{error::AppError, models::student::Student};

/// Checks whether an active student with this ID and password exists.
///
/// Passwords are stored and compared as-is; the system hands out a known
/// default that students are expected to replace on first login.
pub async fn credentials_match(
    pool: &PgPool,
    student_id: &str,
    student_pwd: &str,
) -> Result<bool, AppError> {
    let found: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM students WHERE student_id = $1 AND student_pwd = $2 AND yn = TRUE",
    )
    .bind(student_id)
    .bind(student_pwd)
    .fetch_optional(pool)
    .await?;

    Ok(found.is_some())
}

/// Whether the student has already replaced the default password.
pub async fn has_changed_password(pool: &PgPool, student_id: &str) -> Result<bool, AppError> {
    let changed: Option<bool> = sqlx::query_scalar(
        "SELECT is_pwd_changed FROM students WHERE student_id = $1 AND yn = TRUE",
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;

    Ok(changed.unwrap_or(false))
}

/// Fetches the full record for one active student.
pub async fn find_by_student_id(
    pool: &PgPool,
    student_id: &str,
) -> Result<Option<Student>, AppError> {
    let student = sqlx::query_as::<_, Student>(
        "SELECT id, student_id, student_name, class_id, topic_id, topic_name, \
         student_pwd, is_pwd_changed, yn, create_time, modified_time \
         FROM students \
         WHERE student_id = $1 AND yn = TRUE",
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

/// Persists a new password and marks it as changed.
///
/// Returns false when no active student matched, leaving nothing updated.
pub async fn update_password(
    pool: &PgPool,
    student_id: &str,
    new_pwd: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE students \
         SET student_pwd = $2, is_pwd_changed = TRUE, modified_time = NOW() \
         WHERE student_id = $1 AND yn = TRUE",
    )
    .bind(student_id)
    .bind(new_pwd)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Lists student records, optionally restricted to one class.
///
/// Soft-deleted rows are included; the listing exposes the `yn` flag instead
/// of hiding them.
pub async fn list_by_class(
    pool: &PgPool,
    class_id: Option<&str>,
) -> Result<Vec<Student>, AppError> {
    let students = sqlx::query_as::<_, Student>(
        "SELECT id, student_id, student_name, class_id, topic_id, topic_name, \
         student_pwd, is_pwd_changed, yn, create_time, modified_time \
         FROM students \
         WHERE ($1::TEXT IS NULL OR class_id = $1) \
         ORDER BY id",
    )
    .bind(class_id)
    .fetch_all(pool)
    .await?;

    Ok(students)
}
