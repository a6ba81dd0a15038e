//! # Secret Providers
//!
//! Provider-agnostic view of a cloud secret store.
//!
//! The export pipeline only talks to the [`SecretCatalog`] and [`SecretFetcher`]
//! traits. The AWS Secrets Manager binding lives in [`aws`]; tests plug in
//! in-memory fakes.

pub mod aws;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use aws::AwsSecretManager;

/// A secret as listed in the provider catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Provider-assigned identifier, often a path-like name (`prod/app/db`)
    pub name: String,
    /// Tags attached to the secret
    pub tags: HashMap<String, String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

/// Decrypted secret content
///
/// Exactly one shape is populated per fetch. Contents are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub enum SecretPayload {
    /// UTF-8 text, expected to be a flat JSON object
    Text(String),
    /// Opaque bytes, base64 text as stored by the producer
    Binary(Vec<u8>),
}

impl SecretPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            SecretPayload::Text(_) => "string",
            SecretPayload::Binary(_) => "binary",
        }
    }
}

impl std::fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretPayload::Text(s) => write!(f, "Text(<{} bytes redacted>)", s.len()),
            SecretPayload::Binary(b) => write!(f, "Binary(<{} bytes redacted>)", b.len()),
        }
    }
}

/// Result of a single secret fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedSecret {
    /// Full secret name as reported by the provider
    pub name: String,
    pub payload: SecretPayload,
}

/// Lists every secret visible to the current credentials
#[async_trait]
pub trait SecretCatalog: Send + Sync {
    /// List all secrets, in provider order, across all pages
    async fn list_secrets(&self) -> Result<Vec<CatalogEntry>, ProviderError>;
}

/// Retrieves the value of a single secret
#[async_trait]
pub trait SecretFetcher: Send + Sync {
    /// Fetch the secret value at the given version stage
    async fn fetch_secret(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<FetchedSecret, ProviderError>;
}

/// Provider error with classification
#[derive(Debug, Error)]
#[error("{operation} failed ({}): {message}", .kind.as_str())]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub operation: &'static str,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            operation,
            message: message.into(),
        }
    }

    /// Get remediation guidance for this error
    pub fn remediation(&self) -> &'static str {
        self.kind.remediation()
    }
}

/// Classification of provider failures
///
/// All kinds are fatal for an export run; the classification drives the
/// diagnostic shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The secret could not be decrypted with its KMS key
    DecryptionFailure,
    /// The provider failed on the server side
    InternalServiceError,
    /// A request parameter was invalid
    InvalidParameter,
    /// The request is not valid for the current state of the secret
    InvalidRequest,
    /// The secret or requested version does not exist
    ResourceNotFound,
    /// The secret has neither a string nor a binary value
    EmptyPayload,
    /// Transport, credential, or unclassified service failure
    Other,
}

impl ProviderErrorKind {
    /// Classify an AWS-style error code
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("DecryptionFailure") => ProviderErrorKind::DecryptionFailure,
            Some("InternalServiceError") => ProviderErrorKind::InternalServiceError,
            Some("InvalidParameterException") => ProviderErrorKind::InvalidParameter,
            Some("InvalidRequestException") => ProviderErrorKind::InvalidRequest,
            Some("ResourceNotFoundException") => ProviderErrorKind::ResourceNotFound,
            _ => ProviderErrorKind::Other,
        }
    }

    /// Get human-readable reason string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderErrorKind::DecryptionFailure => "decryption_failure",
            ProviderErrorKind::InternalServiceError => "internal_service_error",
            ProviderErrorKind::InvalidParameter => "invalid_parameter",
            ProviderErrorKind::InvalidRequest => "invalid_request",
            ProviderErrorKind::ResourceNotFound => "resource_not_found",
            ProviderErrorKind::EmptyPayload => "empty_payload",
            ProviderErrorKind::Other => "other",
        }
    }

    /// Get remediation guidance for this error type
    pub fn remediation(&self) -> &'static str {
        match self {
            ProviderErrorKind::DecryptionFailure => {
                "Secrets Manager cannot decrypt the secret with its KMS key. Verify the caller has kms:Decrypt on the key."
            }
            ProviderErrorKind::InternalServiceError => {
                "Secrets Manager reported a server-side error. Re-run the container once the service recovers."
            }
            ProviderErrorKind::InvalidParameter => {
                "A request parameter was rejected. Check the secret name and SM_VERSION_STAGE."
            }
            ProviderErrorKind::InvalidRequest => {
                "The secret is not in a state that allows this request (for example it is scheduled for deletion)."
            }
            ProviderErrorKind::ResourceNotFound => {
                "The secret or version stage does not exist. Check SM_VERSION_STAGE and the secret's staging labels."
            }
            ProviderErrorKind::EmptyPayload => {
                "The secret has no SecretString or SecretBinary value. Store a value before starting the workload."
            }
            ProviderErrorKind::Other => {
                "Check AWS credentials, AWS_REGION, and network access to Secrets Manager."
            }
        }
    }
}
