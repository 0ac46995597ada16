// src/models/status.rs

use sqlx::FromRow;

/// The 'system_status' singleton row.
///
/// Both flags are set externally by the administrator tooling; this service
/// only ever reads them.
#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct SystemStatus {
    pub status1: bool,
    pub status2: bool,
}
