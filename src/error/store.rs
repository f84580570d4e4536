use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure reported by the persistent store.
///
/// Repositories return raw `DbErr`; the conversion into `AppError` classifies it here so
/// callers can tell a rejected write apart from an unreachable database.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness or foreign-key constraint rejected the write (e.g. duplicate
    /// message id).
    #[error("Store constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other database failure. Fatal to the triggering event only.
    #[error("Store unavailable: {0}")]
    Unavailable(#[source] DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Unavailable(err),
        }
    }
}
