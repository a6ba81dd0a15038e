//! # Secret Manager Env
//!
//! Exports AWS Secrets Manager secrets selected by tag as shell environment
//! variables, for use at container startup:
//!
//! ```bash
//! export SM_TAG_team=payments SM_TAG_env=prod SM_SECRETS_PATH=/etc/secrets/
//! eval "$(sm-env)"
//! exec my-service
//! ```
//!
//! String secrets must be flat JSON objects; each key becomes an exported
//! variable. Binary secrets are written to `SM_SECRETS_PATH` instead.

pub mod config;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod materializer;
pub mod provider;
pub mod runtime;

pub use config::ExporterConfig;
pub use error::{ConfigError, ExporterError, MaterializeError, SecretDocumentError};
pub use filter::TagFilter;
pub use provider::{
    AwsSecretManager, CatalogEntry, FetchedSecret, ProviderError, ProviderErrorKind,
    SecretCatalog, SecretFetcher, SecretPayload,
};
pub use runtime::{export_from_vars, run_export, ExportSummary};
