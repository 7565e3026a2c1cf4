use tracing::{info, warn};

use crate::client::QuestionSource;
use crate::models::Question;

use super::samples::sample_questions;

pub const LOAD_FAILED_NOTICE: &str = "Failed to load questions. Using sample questions.";
pub const EMPTY_SOURCE_NOTICE: &str =
    "No questions available from the service. Using sample questions.";

/// Where a loaded question set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOrigin {
    Random,
    All,
    Samples,
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub questions: Vec<Question>,
    pub origin: QuestionOrigin,
    /// Non-fatal message for the player when the built-in set was used.
    pub notice: Option<String>,
}

/// Load questions for a game, falling back until something playable remains.
///
/// Tries a random selection first, then the full list, and finally the
/// built-in sample set. Never fails.
pub async fn load_questions(source: &dyn QuestionSource, count: usize) -> LoadOutcome {
    let mut failed = false;

    match source.fetch_random(count).await {
        Ok(questions) if !questions.is_empty() => {
            info!(count = questions.len(), "loaded random questions");
            return LoadOutcome {
                questions,
                origin: QuestionOrigin::Random,
                notice: None,
            };
        }
        Ok(_) => warn!("random questions came back empty, trying all questions"),
        Err(e) => warn!(error = %e, "random questions not available, trying all questions"),
    }

    match source.fetch_all().await {
        Ok(questions) if !questions.is_empty() => {
            info!(count = questions.len(), "loaded all questions");
            return LoadOutcome {
                questions,
                origin: QuestionOrigin::All,
                notice: None,
            };
        }
        Ok(_) => warn!("question list is empty"),
        Err(e) => {
            warn!(error = %e, "error loading questions");
            failed = true;
        }
    }

    let notice = if failed {
        LOAD_FAILED_NOTICE
    } else {
        EMPTY_SOURCE_NOTICE
    };
    info!("using built-in sample questions");

    LoadOutcome {
        questions: sample_questions(),
        origin: QuestionOrigin::Samples,
        notice: Some(notice.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::client::ClientError;
    use crate::models::Difficulty;

    pub(crate) fn question(id: i64, answer: &str) -> Question {
        Question {
            id,
            question_text: format!("question {}", id),
            answer: answer.to_string(),
            code_snippet: None,
            difficulty_level: Difficulty::Beginner,
        }
    }

    /// Canned responses for each source call.
    pub(crate) enum Reply {
        Questions(Vec<Question>),
        Fail,
    }

    impl Reply {
        fn into_result(self) -> Result<Vec<Question>, ClientError> {
            match self {
                Reply::Questions(questions) => Ok(questions),
                Reply::Fail => Err(ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)),
            }
        }
    }

    pub(crate) struct FakeSource {
        random: Mutex<Option<Reply>>,
        all: Mutex<Option<Reply>>,
        pub(crate) calls: Mutex<Vec<&'static str>>,
    }

    impl FakeSource {
        pub(crate) fn new(random: Reply, all: Reply) -> Self {
            Self {
                random: Mutex::new(Some(random)),
                all: Mutex::new(Some(all)),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn serving(questions: Vec<Question>) -> Self {
            Self::new(Reply::Questions(questions), Reply::Fail)
        }

        fn take(slot: &Mutex<Option<Reply>>) -> Reply {
            slot.lock().unwrap().take().unwrap_or(Reply::Fail)
        }
    }

    #[async_trait]
    impl QuestionSource for FakeSource {
        async fn fetch_random(&self, _count: usize) -> Result<Vec<Question>, ClientError> {
            self.calls.lock().unwrap().push("random");
            Self::take(&self.random).into_result()
        }

        async fn fetch_all(&self) -> Result<Vec<Question>, ClientError> {
            self.calls.lock().unwrap().push("all");
            Self::take(&self.all).into_result()
        }
    }

    #[tokio::test]
    async fn test_random_questions_are_used_first() {
        let source = FakeSource::new(
            Reply::Questions(vec![question(1, "a"), question(2, "b")]),
            Reply::Questions(vec![question(3, "c")]),
        );
        let outcome = load_questions(&source, 10).await;

        assert_eq!(outcome.origin, QuestionOrigin::Random);
        assert_eq!(outcome.questions.len(), 2);
        assert!(outcome.notice.is_none());
        assert_eq!(*source.calls.lock().unwrap(), vec!["random"]);
    }

    #[tokio::test]
    async fn test_failed_random_falls_back_to_all() {
        let source = FakeSource::new(Reply::Fail, Reply::Questions(vec![question(3, "c")]));
        let outcome = load_questions(&source, 10).await;

        assert_eq!(outcome.origin, QuestionOrigin::All);
        assert_eq!(outcome.questions[0].id, 3);
        assert!(outcome.notice.is_none());
        assert_eq!(*source.calls.lock().unwrap(), vec!["random", "all"]);
    }

    #[tokio::test]
    async fn test_empty_random_falls_back_to_all() {
        let source = FakeSource::new(
            Reply::Questions(Vec::new()),
            Reply::Questions(vec![question(3, "c")]),
        );
        let outcome = load_questions(&source, 10).await;
        assert_eq!(outcome.origin, QuestionOrigin::All);
    }

    #[tokio::test]
    async fn test_total_failure_uses_samples_with_notice() {
        let source = FakeSource::new(Reply::Fail, Reply::Fail);
        let outcome = load_questions(&source, 10).await;

        assert_eq!(outcome.origin, QuestionOrigin::Samples);
        assert_eq!(outcome.questions.len(), 5);
        assert_eq!(outcome.notice.as_deref(), Some(LOAD_FAILED_NOTICE));
    }

    #[tokio::test]
    async fn test_empty_service_uses_samples_with_notice() {
        let source = FakeSource::new(Reply::Questions(Vec::new()), Reply::Questions(Vec::new()));
        let outcome = load_questions(&source, 10).await;

        assert_eq!(outcome.origin, QuestionOrigin::Samples);
        assert_eq!(outcome.notice.as_deref(), Some(EMPTY_SOURCE_NOTICE));
    }

    #[test]
    fn test_samples_span_all_difficulties() {
        let samples = sample_questions();
        assert_eq!(samples.len(), 5);
        for level in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert!(samples.iter().any(|q| q.difficulty_level == level));
        }
    }
}
