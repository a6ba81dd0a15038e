//! # sm-env
//!
//! Prints `export KEY='VALUE'` lines for every AWS Secrets Manager secret whose
//! tags match the `SM_TAG_*` environment variables, and writes binary secrets
//! under `SM_SECRETS_PATH`.
//!
//! ## Usage
//!
//! ```bash
//! SM_TAG_team=payments SM_TAG_env=prod eval "$(sm-env)"
//!
//! # Override the environment
//! sm-env --region eu-west-1 --secrets-path /etc/secrets/ --version-stage AWSPREVIOUS
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use secret_manager_env::config::process_vars;
use secret_manager_env::runtime::{export_from_vars, init_tracing};
use secret_manager_env::{AwsSecretManager, ExporterConfig};

/// Export tag-selected AWS Secrets Manager secrets as shell variables
#[derive(Parser, Debug)]
#[command(name = "sm-env", version)]
#[command(about = "Export tag-selected AWS Secrets Manager secrets as shell variables", long_about = None)]
struct Cli {
    /// AWS region (defaults to AWS_REGION, then the SDK region chain)
    #[arg(long)]
    region: Option<String>,

    /// Prefix for binary secret files (defaults to SM_SECRETS_PATH)
    #[arg(long)]
    secrets_path: Option<String>,

    /// Prefix of the tag filter variables
    #[arg(long)]
    tag_prefix: Option<String>,

    /// Version stage to fetch (defaults to SM_VERSION_STAGE, then AWSCURRENT)
    #[arg(long)]
    version_stage: Option<String>,

    /// Secrets Manager endpoint override (defaults to AWS_SECRETS_MANAGER_ENDPOINT)
    #[arg(long)]
    endpoint_url: Option<String>,
}

impl Cli {
    /// Command-line values take precedence over the environment
    fn apply(self, mut config: ExporterConfig) -> ExporterConfig {
        if let Some(region) = self.region {
            config.region = Some(region);
        }
        if let Some(path) = self.secrets_path {
            config.secrets_path = path;
        }
        if let Some(prefix) = self.tag_prefix {
            config.tag_prefix = prefix;
        }
        if let Some(stage) = self.version_stage {
            config.version_stage = stage;
        }
        if let Some(endpoint) = self.endpoint_url {
            config.endpoint_url = Some(endpoint);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.apply(ExporterConfig::from_env());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    export_from_vars(
        process_vars(),
        &config,
        || AwsSecretManager::new(&config),
        &mut out,
    )
    .await
    .context("Secret export aborted")?;

    Ok(())
}
