//! Error types and user-facing error mapping.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level
//! error type that wraps domain-specific errors; event handlers log it and turn it into
//! an ephemeral reply through [`AppError::user_message`].

pub mod config;
pub mod internal;
pub mod store;
pub mod validation;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, store::StoreError, validation::ValidationError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. Validation, not-found and permission
/// failures are terminal for the triggering event only and carry a human-readable reason;
/// every other variant is surfaced to users as a generic failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Persistent store failure, classified as constraint violation or unavailability.
    ///
    /// Aborts processing of the triggering event; never retried by the application.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// User input was rejected (empty or too short content).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected internal state, such as an unparsable stored Discord id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised whenever a gateway call (send, edit, delete,
    /// member fetch) fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Referenced suggestion, thread or message does not exist.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The acting user lacks permission for the requested operation.
    ///
    /// # Fields
    /// - Message describing who may perform the operation
    #[error("{0}")]
    Forbidden(String),

    /// The requested state transition conflicts with the stored state.
    ///
    /// # Fields
    /// - Message describing the conflict
    #[error("{0}")]
    Conflict(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Classifies database errors at the service boundary.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::StoreErr(StoreError::from(err))
    }
}

impl AppError {
    /// Text of the ephemeral reply sent to the user whose action failed.
    ///
    /// Validation, not-found, permission and conflict errors explain the rejection.
    /// Every other error is logged with full details and replaced by a generic message
    /// to avoid leaking implementation details.
    ///
    /// # Returns
    /// - Reply content, prefixed with a failure marker
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::Forbidden(msg) | Self::Conflict(msg) => {
                format!("❌ {}", msg)
            }
            Self::ValidationErr(err) => format!("❌ {}", err),
            err => {
                tracing::error!("{}", err);
                "❌ Something went wrong while processing your request. Please try again."
                    .to_string()
            }
        }
    }
}
