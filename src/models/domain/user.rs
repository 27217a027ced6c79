use serde::{Deserialize, Serialize};

/// A registered player. Passwords are stored in plain text: this application
/// is a single-user local tool and its user file is not a security boundary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: u32, username: &str, password: &str) -> Self {
        User {
            id,
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
