//! # Binary Secrets
//!
//! Writes binary secrets to disk. The stored payload is base64 text (standard
//! alphabet, padded); line breaks inside it are ignored. Raw bytes uploaded as
//! `SecretBinary` (e.g. `--secret-binary fileb://cert.der`) are not base64 text
//! and fail with [`MaterializeError::InvalidBase64`].

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::Zeroizing;

use crate::error::MaterializeError;

/// Target path for a binary secret: the prefix followed by the last `/` segment of the name
///
/// `("/etc/secrets/", "prod/app/tls-cert")` gives `/etc/secrets/tls-cert`.
///
/// # Errors
///
/// Returns [`MaterializeError::InvalidFileName`] when the name ends with `/`.
pub fn binary_file_path(secrets_path: &str, secret_name: &str) -> Result<PathBuf, MaterializeError> {
    let file_name = secret_name.rsplit('/').next().unwrap_or_default();
    if file_name.is_empty() || file_name == "." || file_name == ".." {
        return Err(MaterializeError::InvalidFileName {
            secret: secret_name.to_string(),
        });
    }
    Ok(PathBuf::from(format!("{secrets_path}{file_name}")))
}

/// Decode a binary secret and write it, replacing any existing file
///
/// The file is synced before returning.
///
/// # Errors
///
/// Invalid base64, an unusable secret name, or any create/write/sync failure.
pub fn write_binary_secret(
    secrets_path: &str,
    secret_name: &str,
    encoded: &[u8],
) -> Result<PathBuf, MaterializeError> {
    let path = binary_file_path(secrets_path, secret_name)?;

    let compact: Zeroizing<Vec<u8>> = Zeroizing::new(
        encoded
            .iter()
            .copied()
            .filter(|b| *b != b'\r' && *b != b'\n')
            .collect(),
    );
    let decoded = Zeroizing::new(STANDARD.decode(compact.as_slice()).map_err(|source| {
        MaterializeError::InvalidBase64 {
            secret: secret_name.to_string(),
            source,
        }
    })?);

    let mut file = File::create(&path).map_err(|e| io_error("create", secret_name, &path, e))?;
    file.write_all(&decoded)
        .map_err(|e| io_error("write", secret_name, &path, e))?;
    file.sync_all()
        .map_err(|e| io_error("sync", secret_name, &path, e))?;

    Ok(path)
}

fn io_error(
    action: &'static str,
    secret_name: &str,
    path: &Path,
    source: std::io::Error,
) -> MaterializeError {
    MaterializeError::Io {
        action,
        secret: secret_name.to_string(),
        path: path.to_path_buf(),
        source,
    }
}
