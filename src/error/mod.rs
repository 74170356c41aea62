// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for vibecheck.
//!
//! Only fatal conditions surface as errors. A rejected commit message is a
//! normal outcome and is reported through [`crate::rules::ValidationResult`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vibecheck operations.
#[derive(Error, Debug)]
pub enum VibeError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit message error: {0}")]
    Commit(#[from] CommitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // Media playback errors
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("No commit message file given")]
    MissingPath,

    #[error("Failed to read commit message from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Not a git repository: {message}")]
    NotARepository { message: String },

    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Backup of the existing hook already exists: {path} (move it away first)")]
    BackupExists { path: PathBuf },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

impl From<git2::Error> for HookError {
    fn from(err: git2::Error) -> Self {
        HookError::NotARepository {
            message: err.message().to_string(),
        }
    }
}

/// Media playback errors. These never abort the hook.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Clip '{clip}' is not configured")]
    NotConfigured { clip: String },

    #[error("Clip file not found: {path}")]
    ClipNotFound { path: PathBuf },

    #[error("No playback command available on this platform")]
    NoCommand,

    #[error("Player '{program}' failed: {message}")]
    CommandFailed { program: String, message: String },
}

/// Result type alias for vibecheck operations.
pub type Result<T> = std::result::Result<T, VibeError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VibeError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
