use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::HistoryEntry;
use crate::storage::{BankDocument, Storage, UsersDocument};

/// File-backed storage adapter: one JSON file per document kind, read and
/// written whole on every call. There is no locking or partial-write
/// protection; concurrent writers to the same files are unsupported.
pub struct JsonStorage {
    users_path: PathBuf,
    bank_path: PathBuf,
    history_path: PathBuf,
}

impl JsonStorage {
    pub fn new(config: &Config) -> Self {
        Self::with_paths(
            config.users_path.clone(),
            config.bank_path.clone(),
            config.history_path.clone(),
        )
    }

    pub fn with_paths(users_path: PathBuf, bank_path: PathBuf, history_path: PathBuf) -> Self {
        JsonStorage {
            users_path,
            bank_path,
            history_path,
        }
    }

    /// Reads and parses one document. A missing file or invalid JSON yields
    /// the empty default for the document kind, never an error.
    async fn load_or_default<T>(&self, path: &Path) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                log::warn!(
                    "{} contains invalid JSON ({}), substituting an empty document",
                    path.display(),
                    err
                );
                Ok(T::default())
            }
        }
    }

    /// Overwrites one document, pretty-printed. serde_json leaves non-ASCII
    /// text unescaped, matching the existing files.
    async fn save_pretty<T: Serialize>(&self, path: &Path, value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value).map_err(|err| {
            AppError::Storage(format!("failed to serialize {}: {}", path.display(), err))
        })?;
        tokio::fs::write(path, json).await.map_err(|err| {
            AppError::Storage(format!("failed to write {}: {}", path.display(), err))
        })
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn load_users(&self) -> AppResult<UsersDocument> {
        self.load_or_default(&self.users_path).await
    }

    async fn save_users(&self, doc: &UsersDocument) -> AppResult<()> {
        self.save_pretty(&self.users_path, doc).await
    }

    async fn load_bank(&self) -> AppResult<BankDocument> {
        self.load_or_default(&self.bank_path).await
    }

    async fn save_bank(&self, doc: &BankDocument) -> AppResult<()> {
        self.save_pretty(&self.bank_path, doc).await
    }

    async fn load_history(&self) -> AppResult<Vec<HistoryEntry>> {
        self.load_or_default(&self.history_path).await
    }

    async fn save_history(&self, entries: &[HistoryEntry]) -> AppResult<()> {
        self.save_pretty(&self.history_path, &entries).await
    }
}
