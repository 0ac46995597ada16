// src/services/status.rs

use sqlx::PgPool;

use crate::{error::AppError, models::status::SystemStatus};

/// Reads the current phase flags. A missing singleton row reads as all-clear.
pub async fn fetch(pool: &PgPool) -> Result<SystemStatus, AppError> {
    let status = sqlx::query_as::<_, SystemStatus>(
        "SELECT status1, status2 FROM system_status WHERE id = 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(status.unwrap_or_default())
}

/// Whether the selection period currently forbids password changes.
///
/// The two flags represent externally managed phases and are not
/// distinguished here; either one blocks the update.
pub async fn password_change_blocked(pool: &PgPool) -> Result<bool, AppError> {
    let status = fetch(pool).await?;

    Ok(status.status1 || status.status2)
}
