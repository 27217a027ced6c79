use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    AnswerKey, AnsweredQuestion, Category, QuizSession, SessionOutcome, SessionStatus,
};

/// Question counts a caller may request for one session.
pub const ALLOWED_QUESTION_COUNTS: [u32; 3] = [10, 20, 30];

/// The quiz-session engine. Stateless: callers own the `QuizSession` value
/// and pass it into each step together with the current time, so elapsed-time
/// behavior is fully testable.
pub struct SessionService;

impl SessionService {
    /// Starts a session over `category`, drawing a uniform random sample
    /// without replacement of `min(requested_count, available)` questions.
    ///
    /// `time_budget` is the total allowance for the whole session (the
    /// caller computes it as requested_count x seconds-per-question); `None`
    /// runs untimed. The budget is only checked between questions, so one
    /// slow answer can overrun it.
    pub fn start(
        user_id: u32,
        category: &Category,
        requested_count: u32,
        time_budget: Option<Duration>,
        now: DateTime<Utc>,
    ) -> AppResult<QuizSession> {
        if !ALLOWED_QUESTION_COUNTS.contains(&requested_count) {
            return Err(AppError::InvalidInput(format!(
                "question count must be one of {:?}, got {}",
                ALLOWED_QUESTION_COUNTS, requested_count
            )));
        }
        if category.questions.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "category '{}' has no questions",
                category.name
            )));
        }

        let count = (requested_count as usize).min(category.questions.len());
        let mut rng = rand::thread_rng();
        let questions = category
            .questions
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect();

        Ok(QuizSession {
            id: Uuid::new_v4(),
            user_id,
            category: category.name.clone(),
            questions,
            answers: Vec::new(),
            score: 0,
            current: 0,
            started_at: now,
            deadline: time_budget.map(|budget| now + budget),
            status: SessionStatus::InProgress,
        })
    }

    /// Scores one answer against the current question and advances the
    /// session. If the time budget has already run out, the session becomes
    /// `TimedOut` with the answers collected so far and the late answer is
    /// discarded — a normal terminal state, not an error.
    pub fn submit_answer(
        session: &mut QuizSession,
        answer: AnswerKey,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if session.is_finished() {
            return Err(AppError::InvalidInput(
                "session is already finished".into(),
            ));
        }

        if let Some(deadline) = session.deadline {
            if now > deadline {
                session.status = SessionStatus::TimedOut;
                return Ok(());
            }
        }

        let question = match session.questions.get(session.current) {
            Some(q) => q,
            None => {
                // current is only ever advanced past the end together with a
                // terminal status, and is_finished() was checked above.
                session.status = SessionStatus::Completed;
                return Ok(());
            }
        };

        let is_correct = answer == question.correct_answer;
        session.answers.push(AnsweredQuestion {
            question: question.text.clone(),
            user_answer: answer,
            is_correct,
        });
        if is_correct {
            session.score += 1;
        }
        session.current += 1;
        if session.current == session.questions.len() {
            session.status = SessionStatus::Completed;
        }
        Ok(())
    }

    /// The result of a finished session, or `None` while it is in progress.
    /// `total` is the number of questions actually answered, so a timed-out
    /// session scores over what was reached, not over what was requested.
    pub fn outcome(session: &QuizSession) -> Option<SessionOutcome> {
        match session.status {
            SessionStatus::InProgress => None,
            SessionStatus::Completed | SessionStatus::TimedOut => Some(SessionOutcome {
                records: session.answers.clone(),
                score: session.score,
                total: session.answers.len() as u32,
                timed_out: session.status == SessionStatus::TimedOut,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use std::collections::HashSet;

    #[test]
    fn start_rejects_counts_outside_the_allowed_set() {
        let category = fixtures::category_with_questions(1, "Sports", 10);
        let now = Utc::now();
        for count in [0, 5, 15, 100] {
            let err = SessionService::start(1, &category, count, None, now).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "count {}", count);
        }
    }

    #[test]
    fn start_rejects_empty_category() {
        let category = fixtures::category_with_questions(1, "Sports", 0);
        let err = SessionService::start(1, &category, 10, None, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn start_selects_every_question_exactly_once_when_bank_is_small() {
        let category = fixtures::category_with_questions(1, "Sports", 10);
        let session = SessionService::start(1, &category, 10, None, Utc::now()).unwrap();

        let selected: HashSet<u32> = session.questions.iter().map(|q| q.id).collect();
        let expected: HashSet<u32> = (1..=10).collect();
        assert_eq!(session.questions.len(), 10, "no repeats");
        assert_eq!(selected, expected, "no omissions");
    }

    #[test]
    fn start_samples_a_strict_subset_of_a_large_bank() {
        let category = fixtures::category_with_questions(1, "Sports", 50);
        let session = SessionService::start(1, &category, 20, None, Utc::now()).unwrap();

        assert_eq!(session.questions.len(), 20);
        let distinct: HashSet<u32> = session.questions.iter().map(|q| q.id).collect();
        assert_eq!(distinct.len(), 20, "sampling is without replacement");
    }

    #[test]
    fn single_question_scenario_scores_one_of_one() {
        // Category "Sports" with one question whose correct answer is "b";
        // requesting 10 questions still yields just that one.
        let mut category = Category::new(1, "Sports");
        category.questions.push(fixtures::question(1));
        let now = Utc::now();

        let mut session = SessionService::start(1, &category, 10, None, now).unwrap();
        assert_eq!(session.questions.len(), 1);

        SessionService::submit_answer(&mut session, AnswerKey::B, now).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);

        let outcome = SessionService::outcome(&session).unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.score_string(), "1/1");
        assert!(outcome.records[0].is_correct);
    }

    #[test]
    fn wrong_answers_are_recorded_but_not_scored() {
        let mut category = Category::new(1, "Sports");
        category.questions.push(fixtures::question(1)); // correct answer is b
        let now = Utc::now();

        let mut session = SessionService::start(1, &category, 10, None, now).unwrap();
        SessionService::submit_answer(&mut session, AnswerKey::C, now).unwrap();

        let outcome = SessionService::outcome(&session).unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.records[0].user_answer, AnswerKey::C);
        assert!(!outcome.records[0].is_correct);
    }

    #[test]
    fn session_times_out_between_questions_keeping_answers_so_far() {
        let category = fixtures::category_with_questions(1, "Sports", 10);
        let start = Utc::now();
        // 10 questions x 20s per question = 200s budget.
        let budget = Duration::seconds(200);

        let mut session = SessionService::start(1, &category, 10, Some(budget), start).unwrap();
        for i in 0..6 {
            let now = start + Duration::seconds(30 * i);
            SessionService::submit_answer(&mut session, AnswerKey::A, now).unwrap();
        }
        assert_eq!(session.status, SessionStatus::InProgress);

        // 201s elapsed: the seventh answer arrives past the deadline.
        let late = start + Duration::seconds(201);
        SessionService::submit_answer(&mut session, AnswerKey::A, late).unwrap();

        assert_eq!(session.status, SessionStatus::TimedOut);
        let outcome = SessionService::outcome(&session).unwrap();
        assert_eq!(outcome.total, 6, "only the six in-budget answers count");
        assert_eq!(outcome.records.len(), 6);
        assert!(outcome.timed_out);
    }

    #[test]
    fn untimed_session_never_times_out() {
        let category = fixtures::category_with_questions(1, "Sports", 10);
        let start = Utc::now();
        let mut session = SessionService::start(1, &category, 10, None, start).unwrap();

        let much_later = start + Duration::days(2);
        SessionService::submit_answer(&mut session, AnswerKey::A, much_later).unwrap();
        assert_eq!(session.status, SessionStatus::InProgress);
        assert_eq!(session.answers.len(), 1);
    }

    #[test]
    fn answers_after_the_end_are_rejected() {
        let mut category = Category::new(1, "Sports");
        category.questions.push(fixtures::question(1));
        let now = Utc::now();

        let mut session = SessionService::start(1, &category, 10, None, now).unwrap();
        SessionService::submit_answer(&mut session, AnswerKey::B, now).unwrap();

        let err = SessionService::submit_answer(&mut session, AnswerKey::B, now).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn outcome_is_none_while_in_progress() {
        let category = fixtures::category_with_questions(1, "Sports", 10);
        let session = SessionService::start(1, &category, 10, None, Utc::now()).unwrap();
        assert!(SessionService::outcome(&session).is_none());
    }
}
