use std::env;
use std::path::PathBuf;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub users_path: PathBuf,
    pub bank_path: PathBuf,
    pub history_path: PathBuf,
    pub seconds_per_question: u64,
    pub admin_code: SecretString,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            users_path: env::var("USERS_FILE")
                .unwrap_or_else(|_| "users.json".to_string())
                .into(),
            bank_path: env::var("BANK_FILE")
                .unwrap_or_else(|_| "qcm.json".to_string())
                .into(),
            history_path: env::var("HISTORY_FILE")
                .unwrap_or_else(|_| "history.json".to_string())
                .into(),
            seconds_per_question: env::var("SECONDS_PER_QUESTION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            admin_code: SecretString::from(
                env::var("ADMIN_CODE").unwrap_or_else(|_| "Admin2025".to_string()),
            ),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            users_path: "users.json".into(),
            bank_path: "qcm.json".into(),
            history_path: "history.json".into(),
            seconds_per_question: 20,
            admin_code: SecretString::from("Admin2025".to_string()),
        }
    }
}
