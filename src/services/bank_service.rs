use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerKey, Category, Question};
use crate::storage::Storage;

/// Admin-side management of the question bank: categories and the questions
/// inside them. Every mutation reloads the bank, applies one change and
/// saves it back, so a crash between calls never leaves a half-written
/// category.
pub struct BankService {
    storage: Arc<dyn Storage>,
}

impl BankService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create_category(&self, name: &str) -> AppResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "category name cannot be empty".into(),
            ));
        }

        let mut doc = self.storage.load_bank().await?;
        let wanted = name.to_lowercase();
        if doc
            .categories
            .iter()
            .any(|c| c.name.to_lowercase() == wanted)
        {
            return Err(AppError::AlreadyExists(format!(
                "category '{}' already exists",
                name
            )));
        }

        let id = doc.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category::new(id, name);
        doc.categories.push(category.clone());
        self.storage.save_bank(&doc).await?;

        log::info!("created category '{}' with id {}", category.name, category.id);
        Ok(category)
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.storage.load_bank().await?.categories)
    }

    pub async fn get_category(&self, id: u32) -> AppResult<Category> {
        let doc = self.storage.load_bank().await?;
        doc.categories
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("category with id {} not found", id)))
    }

    pub async fn delete_category(&self, id: u32) -> AppResult<()> {
        let mut doc = self.storage.load_bank().await?;
        let before = doc.categories.len();
        doc.categories.retain(|c| c.id != id);
        if doc.categories.len() == before {
            return Err(AppError::NotFound(format!(
                "category with id {} not found",
                id
            )));
        }
        self.storage.save_bank(&doc).await?;

        log::info!("deleted category {}", id);
        Ok(())
    }

    pub async fn add_question(
        &self,
        category_id: u32,
        text: &str,
        options: Vec<String>,
        correct_answer: AnswerKey,
    ) -> AppResult<Question> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput(
                "question text cannot be empty".into(),
            ));
        }
        let options: [String; 4] = options.try_into().map_err(|_| {
            AppError::InvalidInput("exactly four options are required".into())
        })?;
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::InvalidInput("options cannot be empty".into()));
        }

        let mut doc = self.storage.load_bank().await?;
        let category = doc
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("category with id {} not found", category_id))
            })?;

        let question = Question::new(category.next_question_id(), text, options, correct_answer);
        category.questions.push(question.clone());
        self.storage.save_bank(&doc).await?;

        log::info!(
            "added question {} to category {}",
            question.id,
            category_id
        );
        Ok(question)
    }

    pub async fn delete_question(&self, category_id: u32, question_id: u32) -> AppResult<()> {
        let mut doc = self.storage.load_bank().await?;
        let category = doc
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("category with id {} not found", category_id))
            })?;

        let before = category.questions.len();
        category.questions.retain(|q| q.id != question_id);
        if category.questions.len() == before {
            return Err(AppError::NotFound(format!(
                "question with id {} not found in category {}",
                question_id, category_id
            )));
        }
        self.storage.save_bank(&doc).await?;

        log::info!(
            "deleted question {} from category {}",
            question_id,
            category_id
        );
        Ok(())
    }
}
