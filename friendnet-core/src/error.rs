//! Typed error handling for friendnet.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about which users or data source were involved.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for friendnet operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum FriendnetError {
    /// The user/friendship collaborator could not be read.
    ///
    /// Never recovered locally: a failed read aborts the whole query.
    #[error("Data source unavailable: {message}")]
    DataSource {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No user is registered under this email.
    #[error("No user registered for {email}")]
    UnknownUser { email: String },

    /// A user with this email already exists.
    #[error("A user is already registered for {email}")]
    DuplicateUser { email: String },

    /// A friendship between this pair already exists (pending or approved).
    #[error("A friendship between {first} and {second} already exists")]
    DuplicateFriendship { first: String, second: String },

    /// No friendship is recorded between this pair.
    #[error("No friendship between {first} and {second}")]
    FriendshipNotFound { first: String, second: String },

    /// The two endpoints of a friendship must be distinct users.
    #[error("A user cannot befriend themselves: {email}")]
    SelfFriendship { email: String },

    /// Accept was called on an edge that is not in the pending state.
    #[error("There is no pending request between {first} and {second}")]
    NoPendingRequest { first: String, second: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl FriendnetError {
    /// Create a data-source error from a message alone.
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
            source: None,
        }
    }

    /// Create a data-source error wrapping an underlying cause.
    pub fn data_source_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataSource {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unknown-user error.
    pub fn unknown_user(email: impl Into<String>) -> Self {
        Self::UnknownUser {
            email: email.into(),
        }
    }

    /// Create a duplicate-user error.
    pub fn duplicate_user(email: impl Into<String>) -> Self {
        Self::DuplicateUser {
            email: email.into(),
        }
    }

    /// Create a duplicate-friendship error.
    pub fn duplicate_friendship(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateFriendship {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a friendship-not-found error.
    pub fn friendship_not_found(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::FriendshipNotFound {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a self-friendship error.
    pub fn self_friendship(email: impl Into<String>) -> Self {
        Self::SelfFriendship {
            email: email.into(),
        }
    }

    /// Create a no-pending-request error.
    pub fn no_pending_request(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::NoPendingRequest {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by a caller request rather than the
    /// environment (data source, configuration).
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::DataSource { .. } | Self::Config { .. })
    }

    /// Get the email associated with this error, if there is a single one.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::UnknownUser { email } => Some(email.as_str()),
            Self::DuplicateUser { email } => Some(email.as_str()),
            Self::SelfFriendship { email } => Some(email.as_str()),
            _ => None,
        }
    }
}

/// Convenience type alias for friendnet results.
pub type FriendnetResult<T> = Result<T, FriendnetError>;
