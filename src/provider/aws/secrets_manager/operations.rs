//! # AWS Secrets Manager Operations
//!
//! `ListSecrets` and `GetSecretValue` calls behind the provider traits.

use async_trait::async_trait;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueOutput;
use aws_sdk_secretsmanager::types::SecretListEntry;
use tracing::{debug, info};

use super::AwsSecretManager;
use crate::provider::{
    CatalogEntry, FetchedSecret, ProviderError, ProviderErrorKind, SecretCatalog, SecretFetcher,
    SecretPayload,
};

#[async_trait]
impl SecretCatalog for AwsSecretManager {
    async fn list_secrets(&self) -> Result<Vec<CatalogEntry>, ProviderError> {
        let mut entries = Vec::new();
        let mut token: Option<String> = None;
        let mut pages = 0_usize;

        loop {
            let response = self
                .client
                .list_secrets()
                .set_next_token(token.take())
                .send()
                .await
                .map_err(|e| sdk_error("list_secrets", &e))?;
            pages += 1;

            entries.extend(response.secret_list().iter().filter_map(catalog_entry));

            match response.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => break,
            }
        }

        info!(
            secrets = entries.len(),
            pages, "Listed secrets from AWS Secrets Manager"
        );
        Ok(entries)
    }
}

#[async_trait]
impl SecretFetcher for AwsSecretManager {
    async fn fetch_secret(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<FetchedSecret, ProviderError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .version_stage(version_stage)
            .send()
            .await
            .map_err(|e| sdk_error("get_secret_value", &e))?;

        fetched_secret(secret_id, &output)
    }
}

/// Convert a listing entry, skipping entries without a name
fn catalog_entry(entry: &SecretListEntry) -> Option<CatalogEntry> {
    let Some(name) = entry.name() else {
        debug!("Skipping secret list entry without a name");
        return None;
    };

    let tags = entry
        .tags()
        .iter()
        .filter_map(|tag| Some((tag.key()?.to_string(), tag.value().unwrap_or_default().to_string())))
        .collect();

    Some(CatalogEntry {
        name: name.to_string(),
        tags,
    })
}

/// Pick the populated payload shape; string takes precedence over binary
fn fetched_secret(
    secret_id: &str,
    output: &GetSecretValueOutput,
) -> Result<FetchedSecret, ProviderError> {
    let name = output.name().unwrap_or(secret_id).to_string();

    let payload = if let Some(value) = output.secret_string() {
        SecretPayload::Text(value.to_string())
    } else if let Some(blob) = output.secret_binary() {
        SecretPayload::Binary(blob.as_ref().to_vec())
    } else {
        return Err(ProviderError::new(
            ProviderErrorKind::EmptyPayload,
            "get_secret_value",
            format!("secret '{name}' has neither a string nor a binary value"),
        ));
    };

    Ok(FetchedSecret { name, payload })
}

/// Classify an SDK error by its service error code
fn sdk_error<E, R>(operation: &'static str, err: &SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = match err {
        SdkError::ServiceError(context) => context.err().code(),
        _ => None,
    };
    ProviderError::new(
        ProviderErrorKind::from_code(code),
        operation,
        DisplayErrorContext(err).to_string(),
    )
}
