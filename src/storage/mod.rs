//! Persistence for saved calculations.
//!
//! Two interchangeable backends sit behind the [`Storage`] trait: an
//! in-memory store and a MySQL-backed one. [`connect`] picks between them
//! at startup from the configured database URL and degrades to the
//! in-memory variant when the database is unreachable.

/// In-memory backend.
pub mod memory;
/// MySQL backend.
pub mod mysql;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::model::{Calculation, CalculationPatch, NewCalculation};

pub use memory::MemoryStorage;
pub use mysql::MySqlStorage;

/// Storage failure surfaced to the API layer.
#[derive(Debug)]
pub enum StorageError {
    /// Query or connection failure from the database driver.
    Database(sqlx::Error),
    /// A persisted appliance list failed to (de)serialize.
    Payload(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(err) => write!(f, "database error: {err}"),
            Self::Payload(err) => write!(f, "malformed appliance payload: {err}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(err) => Some(err),
            Self::Payload(err) => Some(err),
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err)
    }
}

/// CRUD contract over persisted calculations.
///
/// Implementations store input fields only; derived consumption figures
/// are recomputed on demand by the engine.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetches one calculation by id.
    async fn get(&self, id: &str) -> Result<Option<Calculation>, StorageError>;

    /// Lists all calculations.
    async fn list(&self) -> Result<Vec<Calculation>, StorageError>;

    /// Persists a new calculation, assigning its id and creation timestamp.
    async fn create(&self, new: NewCalculation) -> Result<Calculation, StorageError>;

    /// Applies a partial update; `None` when the id is unknown.
    async fn update(
        &self,
        id: &str,
        patch: CalculationPatch,
    ) -> Result<Option<Calculation>, StorageError>;

    /// Deletes by id; `false` when the id is unknown.
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;
}

/// Selects the storage backend for this process.
///
/// Attempts MySQL when a URL is configured and falls back to the
/// in-memory store if the connection fails. Selection happens once at
/// startup, so the degradation is logged exactly once.
pub async fn connect(config: &DatabaseConfig) -> Arc<dyn Storage> {
    let Some(url) = config.url.as_deref() else {
        info!("no database URL configured, using in-memory storage");
        return Arc::new(MemoryStorage::new());
    };
    match MySqlStorage::connect(url, config.connect_timeout()).await {
        Ok(storage) => {
            info!("connected to MySQL database");
            Arc::new(storage)
        }
        Err(err) => {
            warn!(error = %err, "database connection failed, falling back to in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    }
}
