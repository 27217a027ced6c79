use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    config::Config,
    models::domain::QuizSession,
    services::{BankService, HistoryService, IdentityService},
    storage::{JsonStorage, Storage},
};

/// Shared application state: the services over one storage adapter, plus the
/// table of quiz sessions currently in flight. The session engine itself is
/// stateless; this table is the caller-side home for session values between
/// HTTP requests.
#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<IdentityService>,
    pub bank_service: Arc<BankService>,
    pub history_service: Arc<HistoryService>,
    pub sessions: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage: Arc<dyn Storage> = Arc::new(JsonStorage::new(&config));
        Self::with_storage(config, storage)
    }

    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self {
            identity_service: Arc::new(IdentityService::new(storage.clone())),
            bank_service: Arc::new(BankService::new(storage.clone())),
            history_service: Arc::new(HistoryService::new(storage)),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
        }
    }
}
