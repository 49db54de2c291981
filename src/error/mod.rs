//! Error types for the lookup facade and the bot.
//!
//! `AppError` is the single error type returned by every `Client` operation and
//! by the `Session` seam. Errors raised by serenity and songbird are wrapped
//! transparently, so their message and source chain reach the caller exactly as
//! the underlying library produced them. The only errors this crate synthesizes
//! itself are the not-found conditions in [`not_found::NotFoundError`] and the
//! startup problems in [`config::ConfigError`].

pub mod config;
pub mod not_found;

use thiserror::Error;

use crate::error::{config::ConfigError, not_found::NotFoundError};

/// Top-level error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or when the voice manager is missing.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord cache or API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Voice gateway error from Songbird while joining a channel.
    #[error(transparent)]
    VoiceErr(#[from] songbird::error::JoinError),

    /// A role or voice state could not be located after the fallback lookup.
    #[error(transparent)]
    NotFoundErr(#[from] NotFoundError),
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
