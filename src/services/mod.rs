pub mod bank_service;
pub mod history_service;
pub mod identity_service;
pub mod session_service;

pub use bank_service::BankService;
pub use history_service::HistoryService;
pub use identity_service::IdentityService;
pub use session_service::{SessionService, ALLOWED_QUESTION_COUNTS};
