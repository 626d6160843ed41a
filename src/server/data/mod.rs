//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and convert
//! to domain models at the boundary where parsing is involved (battle status, formation
//! payload). All database queries, inserts, updates, and deletes are performed through
//! these repositories.

pub mod attendance;
pub mod battle;
pub mod change_log;
pub mod leave_request;
pub mod registration;
pub mod user;

/// Whether a database error is a unique-constraint violation.
///
/// Services translate these into domain conflicts where a race slipped past
/// their own existence checks (duplicate registration, second open battle).
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
