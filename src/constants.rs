//! # Constants
//!
//! Environment variable names and default values shared across the exporter.

/// Prefix of the environment variables that carry required tag filters
pub const DEFAULT_TAG_PREFIX: &str = "SM_TAG_";

/// Environment variable holding the directory prefix for binary secret files
pub const SECRETS_PATH_ENV: &str = "SM_SECRETS_PATH";

/// Environment variable selecting the secret version stage to fetch
pub const VERSION_STAGE_ENV: &str = "SM_VERSION_STAGE";

/// Environment variable holding the target AWS region
pub const REGION_ENV: &str = "AWS_REGION";

/// Environment variable overriding the Secrets Manager endpoint (local emulators, mock servers)
pub const ENDPOINT_ENV: &str = "AWS_SECRETS_MANAGER_ENDPOINT";

/// Version stage Secrets Manager serves when none is requested
pub const DEFAULT_VERSION_STAGE: &str = "AWSCURRENT";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "secret_manager_env=info";
