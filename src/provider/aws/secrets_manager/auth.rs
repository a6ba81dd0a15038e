//! # AWS Secrets Manager Authentication
//!
//! Handles AWS SDK configuration. Authentication itself is left to the SDK
//! default credential chain.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::info;

use crate::config::ExporterConfig;

/// Create AWS SDK config from the exporter configuration
pub async fn create_sdk_config(config: &ExporterConfig) -> SdkConfig {
    let mut builder = aws_config::defaults(BehaviorVersion::latest());

    match &config.region {
        Some(region) => {
            info!("Using AWS region {}", region);
            builder = builder.region(Region::new(region.clone()));
        }
        None => {
            info!("AWS_REGION not set, using the SDK default region chain");
        }
    }

    // Local emulators and mock servers
    if let Some(endpoint) = &config.endpoint_url {
        info!("Routing AWS Secrets Manager requests to {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    builder.load().await
}
