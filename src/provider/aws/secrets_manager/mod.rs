//! # AWS Secrets Manager Client
//!
//! Client for interacting with AWS Secrets Manager API.
//!
//! This module provides functionality to:
//! - List every secret visible to the ambient credentials, with tags
//! - Retrieve secret values at a version stage
//! - Map AWS error codes onto [`ProviderErrorKind`](crate::provider::ProviderErrorKind)

mod auth;
mod operations;

use aws_sdk_secretsmanager::Client as SecretsManagerClient;

use crate::config::ExporterConfig;

use self::auth::create_sdk_config;

/// AWS Secrets Manager provider implementation
pub struct AwsSecretManager {
    pub(crate) client: SecretsManagerClient,
    pub(crate) region: Option<String>,
}

impl std::fmt::Debug for AwsSecretManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretManager")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl AwsSecretManager {
    /// Create a new AWS Secrets Manager client
    ///
    /// Credentials come from the SDK default chain (environment, profile,
    /// web identity/IRSA, container or instance metadata).
    pub async fn new(config: &ExporterConfig) -> Self {
        let sdk_config = create_sdk_config(config).await;
        let region = sdk_config.region().map(ToString::to_string);
        Self {
            client: SecretsManagerClient::new(&sdk_config),
            region,
        }
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: SecretsManagerClient) -> Self {
        let region = client.config().region().map(ToString::to_string);
        Self { client, region }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
