//! # Error Types
//!
//! Error taxonomy for the exporter. Everything reachable from [`ExporterError`]
//! is fatal for the run. [`SecretDocumentError`] is the one non-fatal condition:
//! it is logged and the secret contributes no lines (see [`crate::materializer`]).

use std::path::PathBuf;

use thiserror::Error;

use crate::provider::ProviderError;

/// Top-level error returned by the export pipeline
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error("failed to write export lines: {0}")]
    Emit(#[source] std::io::Error),
}

/// Configuration errors, detected before any cloud call is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no tags for secrets filtering specified: set at least one {prefix}<TAG>=<VALUE> variable")]
    NoTagFilters { prefix: String },

    #[error("tag prefix must not be empty")]
    EmptyTagPrefix,
}

/// Why a string secret could not be rendered as export lines
///
/// Messages never include secret content: only JSON positions, types, and key names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretDocumentError {
    #[error("secret is not valid JSON ({category} error at line {line} column {column})")]
    Malformed {
        category: &'static str,
        line: usize,
        column: usize,
    },

    #[error("secret must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("value for key '{key}' must be a string, found {found}")]
    NonStringValue { key: String, found: &'static str },
}

/// Errors raised while turning a binary secret into a file
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("binary secret '{secret}' is not valid base64: {source}")]
    InvalidBase64 {
        secret: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("secret name '{secret}' has no final path segment to use as a file name")]
    InvalidFileName { secret: String },

    #[error("failed to {action} '{}' for secret '{secret}': {source}", .path.display())]
    Io {
        action: &'static str,
        secret: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    /// Get human-readable reason string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterializeError::InvalidBase64 { .. } => "invalid_base64",
            MaterializeError::InvalidFileName { .. } => "invalid_file_name",
            MaterializeError::Io { .. } => "io",
        }
    }
}
