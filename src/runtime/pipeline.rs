//! # Export Pipeline
//!
//! One linear pass: list the catalog, select secrets by tag, materialize them,
//! then print the export lines. Nothing is printed unless every step succeeds.

use std::future::Future;
use std::io::Write;

use tracing::{info, info_span, Instrument};

use crate::config::ExporterConfig;
use crate::emitter::emit;
use crate::error::ExporterError;
use crate::filter::TagFilter;
use crate::matcher::filter_secrets;
use crate::materializer::SecretMaterializer;
use crate::provider::{SecretCatalog, SecretFetcher};

/// Counters reported at the end of a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Secrets visible in the catalog
    pub listed: usize,
    /// Secrets selected by the tag filter
    pub matched: usize,
    /// Export lines written
    pub exported: usize,
}

/// Build the tag filter from `vars`, then connect and run the export
///
/// `connect` is only awaited once the filter is known to be non-empty, so a
/// missing `SM_TAG_*` variable fails without building a provider.
///
/// # Errors
///
/// [`ExporterError::Config`] when no variable carries the tag prefix, otherwise
/// as [`run_export`].
pub async fn export_from_vars<I, K, V, F, Fut, P, W>(
    vars: I,
    config: &ExporterConfig,
    connect: F,
    out: &mut W,
) -> Result<ExportSummary, ExporterError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = P>,
    P: SecretCatalog + SecretFetcher,
    W: Write,
{
    let filter = TagFilter::from_vars(vars, &config.tag_prefix)?;
    info!("Selecting secrets tagged {}", filter);

    let provider = connect().await;
    run_export(&filter, &provider, &provider, config, out).await
}

/// Run the export pipeline against the given provider
///
/// # Errors
///
/// Any provider, base64, filesystem, or output error aborts the run. Malformed
/// JSON in a string secret does not.
pub async fn run_export<W: Write>(
    filter: &TagFilter,
    catalog: &dyn SecretCatalog,
    fetcher: &dyn SecretFetcher,
    config: &ExporterConfig,
    out: &mut W,
) -> Result<ExportSummary, ExporterError> {
    let span = info_span!("export.run", filter = %filter, version_stage = %config.version_stage);

    async move {
        let secrets = catalog.list_secrets().await?;
        let matched = filter_secrets(&secrets, filter);
        info!(
            "{} of {} secrets match the tag filter",
            matched.len(),
            secrets.len()
        );

        let materializer =
            SecretMaterializer::new(fetcher, &config.secrets_path, &config.version_stage);
        let lines = materializer.materialize(&matched).await?;

        emit(out, &lines).map_err(ExporterError::Emit)?;

        let summary = ExportSummary {
            listed: secrets.len(),
            matched: matched.len(),
            exported: lines.len(),
        };
        info!(
            listed = summary.listed,
            matched = summary.matched,
            exported = summary.exported,
            "Export complete"
        );
        Ok(summary)
    }
    .instrument(span)
    .await
}
