pub mod json_storage;

pub use json_storage::JsonStorage;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::domain::{Category, HistoryEntry, User};

/// On-disk shape of the users file: `{"users": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UsersDocument {
    pub users: Vec<User>,
}

/// On-disk shape of the question-bank file: `{"categories": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BankDocument {
    pub categories: Vec<Category>,
}

/// Persistence seam for the three application documents.
///
/// Loads never fail on a missing or malformed file; implementations return
/// the empty default for that document kind instead. The history document is
/// a bare top-level array (not object-wrapped), matching existing files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load_users(&self) -> AppResult<UsersDocument>;
    async fn save_users(&self, doc: &UsersDocument) -> AppResult<()>;

    async fn load_bank(&self) -> AppResult<BankDocument>;
    async fn save_bank(&self, doc: &BankDocument) -> AppResult<()>;

    async fn load_history(&self) -> AppResult<Vec<HistoryEntry>>;
    async fn save_history(&self, entries: &[HistoryEntry]) -> AppResult<()>;
}
