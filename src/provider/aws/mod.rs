//! # AWS Providers
//!
//! - `secrets_manager`: AWS Secrets Manager catalog and secret values

pub mod secrets_manager;

pub use secrets_manager::AwsSecretManager;
