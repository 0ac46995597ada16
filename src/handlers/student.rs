// src/handlers/student.rs

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{
    error::AppError,
    response::{self, CODE_ERROR, CODE_PWD_CHANGE_REQUIRED},
    services::{status, user},
};

/// Query parameters for login and password update.
///
/// Optional so an absent parameter surfaces as the code-400 envelope rather
/// than an extraction rejection. On the update endpoint `student_pwd`
/// carries the new password.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialParams {
    pub student_id: Option<String>,
    pub student_pwd: Option<String>,
}

/// Authenticates a student.
///
/// * Bad or missing credentials: code 400.
/// * Valid credentials with the default password still in place: code 300,
///   the client must send the student through the password-change flow.
/// * Valid credentials, password already changed: code 200 with class, name
///   and topic fields.
pub async fn login(
    State(pool): State<PgPool>,
    Query(params): Query<CredentialParams>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        "studentId={} with studentPwd={} login",
        params.student_id.as_deref().unwrap_or("null"),
        params.student_pwd.as_deref().unwrap_or("null")
    );

    let (Some(student_id), Some(student_pwd)) =
        (params.student_id.as_deref(), params.student_pwd.as_deref())
    else {
        return Ok(response::status(CODE_ERROR));
    };

    if !user::credentials_match(&pool, student_id, student_pwd).await? {
        return Ok(response::status(CODE_ERROR));
    }

    if !user::has_changed_password(&pool, student_id).await? {
        return Ok(response::status(CODE_PWD_CHANGE_REQUIRED));
    }

    match user::find_by_student_id(&pool, student_id).await? {
        Some(student) => Ok(response::login_success(&student)),
        None => Ok(response::status(CODE_ERROR)),
    }
}

/// Replaces a student's password.
///
/// Rejected outright while either phase flag blocks changes; otherwise the
/// new password is persisted and the refreshed login envelope returned.
pub async fn update_pwd(
    State(pool): State<PgPool>,
    Query(params): Query<CredentialParams>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        "studentId={} is trying to change pwd={}",
        params.student_id.as_deref().unwrap_or("null"),
        params.student_pwd.as_deref().unwrap_or("null")
    );

    let (Some(student_id), Some(student_pwd)) =
        (params.student_id.as_deref(), params.student_pwd.as_deref())
    else {
        return Ok(response::status(CODE_ERROR));
    };

    if status::password_change_blocked(&pool).await? {
        return Ok(response::status(CODE_ERROR));
    }

    if user::update_password(&pool, student_id, student_pwd).await? {
        if let Some(student) = user::find_by_student_id(&pool, student_id).await? {
            return Ok(response::login_success(&student));
        }
    }

    Ok(response::status(CODE_ERROR))
}

/// Query parameters for the class listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Class number; "-1" means every class. Absent reads as a failure.
    pub class_id: Option<String>,
}

/// Lists student records for one class, or for all of them.
pub async fn get_list(
    State(pool): State<PgPool>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        "query student info list with classId={}",
        params.class_id.as_deref().unwrap_or("null")
    );

    let Some(class_id) = params.class_id.as_deref() else {
        return Ok(response::status(CODE_ERROR));
    };

    let class_filter = match class_id {
        "-1" => None,
        other => Some(other),
    };

    let students = user::list_by_class(&pool, class_filter).await?;

    Ok(response::student_list(&students))
}
