use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use qcm_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    models::domain::HistoryEntry,
    storage::{BankDocument, Storage, UsersDocument},
};

/// In-memory stand-in for the JSON files, so the suites exercise the real
/// services without touching the filesystem.
#[derive(Default)]
pub struct InMemoryStorage {
    users: RwLock<UsersDocument>,
    bank: RwLock<BankDocument>,
    history: RwLock<Vec<HistoryEntry>>,
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn load_users(&self) -> AppResult<UsersDocument> {
        Ok(self.users.read().await.clone())
    }

    async fn save_users(&self, doc: &UsersDocument) -> AppResult<()> {
        *self.users.write().await = doc.clone();
        Ok(())
    }

    async fn load_bank(&self) -> AppResult<BankDocument> {
        Ok(self.bank.read().await.clone())
    }

    async fn save_bank(&self, doc: &BankDocument) -> AppResult<()> {
        *self.bank.write().await = doc.clone();
        Ok(())
    }

    async fn load_history(&self) -> AppResult<Vec<HistoryEntry>> {
        Ok(self.history.read().await.clone())
    }

    async fn save_history(&self, entries: &[HistoryEntry]) -> AppResult<()> {
        *self.history.write().await = entries.to_vec();
        Ok(())
    }
}

// Not every suite uses every helper.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        users_path: "users.json".into(),
        bank_path: "qcm.json".into(),
        history_path: "history.json".into(),
        seconds_per_question: 20,
        admin_code: SecretString::from("Admin2025".to_string()),
    }
}

#[allow(dead_code)]
pub fn app_state() -> AppState {
    AppState::with_storage(test_config(), Arc::new(InMemoryStorage::default()))
}
