use std::sync::Arc;

use chrono::Utc;

use crate::errors::AppResult;
use crate::models::domain::{AnsweredQuestion, HistoryEntry};
use crate::storage::Storage;

/// Append-only log of finished sessions. Entries are never rewritten, so
/// the len+1 id policy cannot collide here.
pub struct HistoryService {
    storage: Arc<dyn Storage>,
}

impl HistoryService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn record(
        &self,
        user_id: u32,
        category_name: &str,
        records: Vec<AnsweredQuestion>,
        score: &str,
    ) -> AppResult<HistoryEntry> {
        let mut entries = self.storage.load_history().await?;
        let entry = HistoryEntry {
            id: entries.len() as u32 + 1,
            user_id,
            category: category_name.to_string(),
            questions: records,
            score: score.to_string(),
            date: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        entries.push(entry.clone());
        self.storage.save_history(&entries).await?;

        log::info!(
            "recorded history entry {} for user {} ({})",
            entry.id,
            user_id,
            entry.score
        );
        Ok(entry)
    }

    /// All of one user's entries, in stored (insertion) order.
    pub async fn query(&self, user_id: u32) -> AppResult<Vec<HistoryEntry>> {
        let entries = self.storage.load_history().await?;
        Ok(entries
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect())
    }
}
