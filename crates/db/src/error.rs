use std::path::PathBuf;

/// Failure reported by a repository adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store configuration error: {0}")]
    Configuration(String),
}

/// The credentials file could not be read or parsed.
///
/// Only raised at startup; the binary aborts on it.
#[derive(Debug, thiserror::Error)]
pub enum CredentialLoadError {
    #[error("Failed to read credentials file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed credentials file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
