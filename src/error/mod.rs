//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors raised by
//! configuration, the view store, the Discord transport and the selection component.
//! Event handlers are the outermost boundary: they log `AppError`s or render them to the
//! invoking user, since there is no caller above them to propagate to.

pub mod config;
pub mod selection;
pub mod transport;

use thiserror::Error;

use crate::error::{config::ConfigError, selection::SelectionError, transport::TransportError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// This is the storage error of the view store: fatal to the operation in progress,
    /// never retried.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord client error from Serenity raised outside the transport traits.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Discord transport error surfaced through the collaborator traits.
    #[error(transparent)]
    TransportErr(#[from] TransportError),

    /// Selection component precondition failure.
    #[error(transparent)]
    SelectionErr(#[from] SelectionError),
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
