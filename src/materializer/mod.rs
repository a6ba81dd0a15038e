//! # Secret Materializer
//!
//! Turns matched secrets into their runtime form:
//!
//! - **String secrets** are parsed as a flat JSON object of string values and
//!   rendered as `export KEY='VALUE'` lines
//! - **Binary secrets** are base64-decoded and written to
//!   `<secrets_path><last name segment>`
//!
//! Provider and filesystem failures abort the run. A string secret that is not a
//! flat JSON object of strings is logged and contributes no lines.

mod binary;
mod exports;

pub use binary::{binary_file_path, write_binary_secret};
pub use exports::{render_exports, ExportLine};

use tracing::{debug, error, info, info_span, Instrument};

use crate::error::ExporterError;
use crate::provider::{SecretFetcher, SecretPayload};

/// Fetches secrets one at a time and materializes them
pub struct SecretMaterializer<'a> {
    fetcher: &'a dyn SecretFetcher,
    secrets_path: &'a str,
    version_stage: &'a str,
}

impl std::fmt::Debug for SecretMaterializer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretMaterializer")
            .field("secrets_path", &self.secrets_path)
            .field("version_stage", &self.version_stage)
            .finish_non_exhaustive()
    }
}

impl<'a> SecretMaterializer<'a> {
    pub fn new(fetcher: &'a dyn SecretFetcher, secrets_path: &'a str, version_stage: &'a str) -> Self {
        Self {
            fetcher,
            secrets_path,
            version_stage,
        }
    }

    /// Materialize every secret in order
    ///
    /// # Errors
    ///
    /// Stops at the first provider, base64, or filesystem error. Lines rendered
    /// for earlier secrets are discarded with the error.
    pub async fn materialize(&self, secret_ids: &[String]) -> Result<Vec<ExportLine>, ExporterError> {
        let mut lines = Vec::new();

        for secret_id in secret_ids {
            let span = info_span!("secret.materialize", secret.id = %secret_id);
            let rendered = self.materialize_one(secret_id).instrument(span).await?;
            lines.extend(rendered);
        }

        Ok(lines)
    }

    async fn materialize_one(&self, secret_id: &str) -> Result<Vec<ExportLine>, ExporterError> {
        let fetched = self
            .fetcher
            .fetch_secret(secret_id, self.version_stage)
            .await
            .inspect_err(|e| {
                error!(
                    error.kind = e.kind.as_str(),
                    "Failed to fetch secret {}: {}", secret_id, e
                );
                error!("Remediation: {}", e.remediation());
            })?;
        debug!(payload = fetched.payload.kind(), "Fetched secret");

        match &fetched.payload {
            SecretPayload::Text(text) => match render_exports(text) {
                Ok(lines) => {
                    info!(exports = lines.len(), "Rendered export lines");
                    Ok(lines)
                }
                Err(e) => {
                    error!(
                        "Secret {} is not a flat JSON object of strings, skipping: {}",
                        fetched.name, e
                    );
                    Ok(Vec::new())
                }
            },
            SecretPayload::Binary(bytes) => {
                let path = write_binary_secret(self.secrets_path, &fetched.name, bytes)
                    .inspect_err(|e| error!(error.kind = e.as_str(), "{}", e))?;
                info!(path = %path.display(), "Wrote binary secret");
                Ok(Vec::new())
            }
        }
    }
}
