pub mod category;
pub mod history;
pub mod session;
pub mod user;

pub use category::{AnswerKey, AnswerOption, Category, Question};
pub use history::{AnsweredQuestion, HistoryEntry};
pub use session::{QuizSession, SessionOutcome, SessionStatus};
pub use user::User;
