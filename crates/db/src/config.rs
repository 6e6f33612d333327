//! Store configuration and credential loading.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use crate::error::{CredentialLoadError, StoreError};

/// Default location of the mounted credentials file.
pub const DEFAULT_CREDENTIALS_PATH: &str = "/mnt/postgres/write-creds.json";

/// Which repository adapter backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(StoreError::Configuration(format!(
                "unknown STORE_BACKEND '{other}' (expected 'postgres' or 'memory')"
            ))),
        }
    }
}

/// Store configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// `host[:port]/database[?params]`, without scheme or credentials.
    pub endpoint: Option<String>,
    pub credentials_path: PathBuf,
    pub max_connections: u32,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                           |
    /// |--------------------------|-----------------------------------|
    /// | `STORE_BACKEND`          | `postgres`                        |
    /// | `STORE_ENDPOINT`         | none (required for postgres)      |
    /// | `STORE_CREDENTIALS_PATH` | `/mnt/postgres/write-creds.json`  |
    /// | `STORE_MAX_CONNECTIONS`  | `20`                              |
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("STORE_BACKEND")
            .map(|v| v.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or(StoreBackend::Postgres);

        let endpoint = lookup("STORE_ENDPOINT").filter(|v| !v.trim().is_empty());

        let credentials_path = lookup("STORE_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_PATH));

        let max_connections: u32 = match lookup("STORE_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|_| {
                StoreError::Configuration(format!("STORE_MAX_CONNECTIONS must be a valid u32, got '{v}'"))
            })?,
            None => 20,
        };

        if backend == StoreBackend::Postgres && endpoint.is_none() {
            return Err(StoreError::Configuration(
                "STORE_ENDPOINT must be set when STORE_BACKEND is postgres".into(),
            ));
        }

        Ok(Self {
            backend,
            endpoint,
            credentials_path,
            max_connections,
        })
    }
}

/// Username and password read from the mounted credentials file.
#[derive(Clone, Deserialize)]
pub struct StoreCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read `{ "username": ..., "password": ... }` from `path`.
///
/// Unknown keys are ignored.
pub fn load_credentials(path: &Path) -> Result<StoreCredentials, CredentialLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CredentialLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CredentialLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build authenticated Postgres connect options from the endpoint and
/// credentials.
pub fn connect_options(
    config: &StoreConfig,
    credentials: &StoreCredentials,
) -> Result<PgConnectOptions, StoreError> {
    let endpoint = config.endpoint.as_deref().ok_or_else(|| {
        StoreError::Configuration("STORE_ENDPOINT must be set when STORE_BACKEND is postgres".into())
    })?;

    let options: PgConnectOptions = format!("postgres://{endpoint}").parse()?;

    Ok(options
        .username(&credentials.username)
        .password(&credentials.password))
}
