//! Export pipeline integration tests
//!
//! Shared in-memory provider plus the test modules, organized by payload shape.

pub mod string_secrets;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use secret_manager_env::{
    run_export, CatalogEntry, ExportSummary, ExporterConfig, ExporterError, FetchedSecret,
    ProviderError, ProviderErrorKind, SecretCatalog, SecretFetcher, SecretPayload, TagFilter,
};

/// In-memory secret store recording every call it receives
#[derive(Debug, Default)]
pub struct InMemorySecrets {
    catalog: Vec<CatalogEntry>,
    values: HashMap<String, StoredValue>,
    list_error: Option<ProviderErrorKind>,
    pub list_calls: AtomicUsize,
    pub fetched: Mutex<Vec<(String, String)>>,
}

#[derive(Debug)]
enum StoredValue {
    Payload { name: String, payload: SecretPayload },
    Fails(ProviderErrorKind),
}

impl InMemorySecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, entry: CatalogEntry, value: &str) -> Self {
        self.values.insert(
            entry.name.clone(),
            StoredValue::Payload {
                name: entry.name.clone(),
                payload: SecretPayload::Text(value.to_string()),
            },
        );
        self.catalog.push(entry);
        self
    }

    pub fn with_binary(mut self, entry: CatalogEntry, encoded: &[u8]) -> Self {
        self.values.insert(
            entry.name.clone(),
            StoredValue::Payload {
                name: entry.name.clone(),
                payload: SecretPayload::Binary(encoded.to_vec()),
            },
        );
        self.catalog.push(entry);
        self
    }

    pub fn with_failure(mut self, entry: CatalogEntry, kind: ProviderErrorKind) -> Self {
        self.values
            .insert(entry.name.clone(), StoredValue::Fails(kind));
        self.catalog.push(entry);
        self
    }

    pub fn failing_list(mut self, kind: ProviderErrorKind) -> Self {
        self.list_error = Some(kind);
        self
    }

    pub fn fetched_ids(&self) -> Vec<String> {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[async_trait]
impl SecretCatalog for InMemorySecrets {
    async fn list_secrets(&self) -> Result<Vec<CatalogEntry>, ProviderError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.list_error {
            Some(kind) => Err(ProviderError::new(kind, "list_secrets", "listing failed")),
            None => Ok(self.catalog.clone()),
        }
    }
}

#[async_trait]
impl SecretFetcher for InMemorySecrets {
    async fn fetch_secret(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<FetchedSecret, ProviderError> {
        self.fetched
            .lock()
            .unwrap()
            .push((secret_id.to_string(), version_stage.to_string()));

        match self.values.get(secret_id) {
            Some(StoredValue::Payload { name, payload }) => Ok(FetchedSecret {
                name: name.clone(),
                payload: payload.clone(),
            }),
            Some(StoredValue::Fails(kind)) => Err(ProviderError::new(
                *kind,
                "get_secret_value",
                format!("cannot read {secret_id}"),
            )),
            None => Err(ProviderError::new(
                ProviderErrorKind::ResourceNotFound,
                "get_secret_value",
                format!("{secret_id} not found"),
            )),
        }
    }
}

// Lets a borrowed store stand in as the provider returned by a connect closure
#[async_trait]
impl<'a> SecretCatalog for &'a InMemorySecrets {
    async fn list_secrets(&self) -> Result<Vec<CatalogEntry>, ProviderError> {
        (**self).list_secrets().await
    }
}

#[async_trait]
impl<'a> SecretFetcher for &'a InMemorySecrets {
    async fn fetch_secret(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<FetchedSecret, ProviderError> {
        (**self).fetch_secret(secret_id, version_stage).await
    }
}

/// Filter requiring `team=payments` and `env=prod`
pub fn payments_prod() -> TagFilter {
    TagFilter::from_vars(
        [("SM_TAG_team", "payments"), ("SM_TAG_env", "prod")],
        "SM_TAG_",
    )
    .unwrap()
}

pub fn tagged(name: &str) -> CatalogEntry {
    CatalogEntry::new(name)
        .with_tag("team", "payments")
        .with_tag("env", "prod")
}

/// Run the pipeline and capture standard output
pub async fn run(
    store: &InMemorySecrets,
    filter: &TagFilter,
    config: &ExporterConfig,
) -> (Result<ExportSummary, ExporterError>, String) {
    let mut out = Vec::new();
    let result = run_export(filter, store, store, config, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}
