use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::User;
use crate::storage::Storage;

/// User registration and credential checks over the users document.
/// Usernames are matched case-insensitively; passwords exactly.
pub struct IdentityService {
    storage: Arc<dyn Storage>,
}

impl IdentityService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::InvalidInput("username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(AppError::InvalidInput("password cannot be empty".into()));
        }

        let mut doc = self.storage.load_users().await?;
        if find_user(&doc.users, username).is_some() {
            return Err(AppError::AlreadyExists(format!(
                "user '{}' already exists",
                username
            )));
        }

        let id = doc.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::new(id, username, password);
        doc.users.push(user.clone());
        self.storage.save_users(&doc).await?;

        log::info!("registered user '{}' with id {}", user.username, user.id);
        Ok(user)
    }

    /// Checks credentials. A wrong password and an unknown username are the
    /// same failure outcome so callers cannot tell the two apart.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let doc = self.storage.load_users().await?;
        match find_user(&doc.users, username) {
            Some(user) if user.password == password => Ok(user.clone()),
            _ => Err(AppError::Unauthorized(
                "invalid username or password".into(),
            )),
        }
    }

    pub async fn resolve_id(&self, username: &str) -> AppResult<u32> {
        let doc = self.storage.load_users().await?;
        find_user(&doc.users, username)
            .map(|user| user.id)
            .ok_or_else(|| AppError::NotFound(format!("user '{}' not found", username)))
    }
}

fn find_user<'a>(users: &'a [User], username: &str) -> Option<&'a User> {
    let wanted = username.to_lowercase();
    users.iter().find(|u| u.username.to_lowercase() == wanted)
}
