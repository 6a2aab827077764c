//! Error types for kwenv operations.
//!
//! This module defines [`KwenvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `KwenvError` for domain-specific errors that need distinct handling;
//!   usage and precondition failures map to the invalid-argument exit status
//! - Use `anyhow::Error` (via `KwenvError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kwenv operations.
#[derive(Debug, Error)]
pub enum KwenvError {
    /// Project has no usable `.kw` config directory.
    #[error("Project not initialized: no usable .kw directory at {path}")]
    UninitializedProject { path: PathBuf },

    /// Environment name failed syntax validation.
    #[error("Invalid environment name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// An environment with this name already exists.
    #[error("Environment '{name}' already exists")]
    AlreadyExists { name: String },

    /// Referenced environment does not exist.
    #[error("Environment '{name}' not found")]
    NotFound { name: String },

    /// No environment is currently active.
    #[error("No environment is currently active")]
    NoActiveEnvironment,

    /// No source was available to seed the cached kernel config artifact.
    #[error("No kernel config source found to seed the cache artifact")]
    NoKernelConfigSource,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KwenvError {
    /// Whether this is a usage or precondition failure that should exit with
    /// the invalid-argument status rather than as a generic command failure.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UninitializedProject { .. }
                | Self::InvalidName { .. }
                | Self::AlreadyExists { .. }
                | Self::NotFound { .. }
                | Self::NoActiveEnvironment
                | Self::NoKernelConfigSource
        )
    }
}

/// Result type alias for kwenv operations.
pub type Result<T> = std::result::Result<T, KwenvError>;
