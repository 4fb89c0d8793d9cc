use std::path::PathBuf;

use serde::Deserialize;

/// Configuration options for the inventory service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Storage backend selected at startup; the rest of the application does
    /// not know which one is active.
    pub storage: StorageConfig,
}

/// Persistence backend selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Relational backend: SQLite database reached through Diesel.
    Sqlite { database_url: String },
    /// Local backend: JSON collections stored under a directory.
    Local { path: PathBuf },
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
