//! Quiz service client module.
//!
//! Provides the REST client for the remote question service and the
//! [`QuestionSource`] seam the game loads questions through.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::Question;

pub use client::{DEFAULT_API_URL, QuizServiceClient};
pub use error::ClientError;

/// Anything that can hand out questions for a game.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// A random selection of up to `count` questions.
    async fn fetch_random(&self, count: usize) -> Result<Vec<Question>, ClientError>;

    /// Every question the source knows about.
    async fn fetch_all(&self) -> Result<Vec<Question>, ClientError>;
}
