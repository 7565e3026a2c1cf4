//! REST client for the quiz service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::{Difficulty, GameSessionRecord, Question, SessionType, User};

use super::{ClientError, QuestionSource};

/// Used when no service url is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct NewUser<'a> {
    username: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartSession<'a> {
    user_id: i64,
    session_type: &'a SessionType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EndSession {
    score: u32,
    total_questions: u32,
}

/// Client for the quiz service REST API.
#[derive(Debug, Clone)]
pub struct QuizServiceClient {
    http: Client,
    base_url: Url,
}

impl QuizServiceClient {
    /// Create a client rooted at `base_url`, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(base_url.to_string()));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /questions/random?count=N`
    pub async fn random_questions(&self, count: usize) -> Result<Vec<Question>, ClientError> {
        let mut url = self.endpoint(&["questions", "random"])?;
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        self.get_json(url).await
    }

    /// `GET /questions`
    pub async fn all_questions(&self) -> Result<Vec<Question>, ClientError> {
        let url = self.endpoint(&["questions"])?;
        self.get_json(url).await
    }

    /// `GET /questions/by-difficulty?difficulty=D`
    pub async fn questions_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, ClientError> {
        let mut url = self.endpoint(&["questions", "by-difficulty"])?;
        url.query_pairs_mut()
            .append_pair("difficulty", difficulty.as_str());
        self.get_json(url).await
    }

    /// `POST /users`
    pub async fn create_user(&self, username: &str, email: &str) -> Result<User, ClientError> {
        let url = self.endpoint(&["users"])?;
        self.post_json(url, &NewUser { username, email }).await
    }

    /// `GET /users/{username}`
    pub async fn user_by_username(&self, username: &str) -> Result<User, ClientError> {
        let url = self.endpoint(&["users", username])?;
        self.get_json(url).await
    }

    /// `POST /game-sessions/start`
    pub async fn start_game_session(
        &self,
        user_id: i64,
        session_type: &SessionType,
    ) -> Result<GameSessionRecord, ClientError> {
        let url = self.endpoint(&["game-sessions", "start"])?;
        self.post_json(
            url,
            &StartSession {
                user_id,
                session_type,
            },
        )
        .await
    }

    /// `POST /game-sessions/{id}/end`
    pub async fn end_game_session(
        &self,
        session_id: i64,
        score: u32,
        total_questions: u32,
    ) -> Result<GameSessionRecord, ClientError> {
        let id = session_id.to_string();
        let url = self.endpoint(&["game-sessions", &id, "end"])?;
        self.post_json(
            url,
            &EndSession {
                score,
                total_questions,
            },
        )
        .await
    }

    /// `GET /users/{id}/game-history`
    pub async fn user_game_history(
        &self,
        user_id: i64,
    ) -> Result<Vec<GameSessionRecord>, ClientError> {
        let id = user_id.to_string();
        let url = self.endpoint(&["users", &id, "game-history"])?;
        self.get_json(url).await
    }

    /// Append percent-encoded path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        warn!(url = %response.url(), %status, "quiz service returned an error");
        return Err(ClientError::Status(status));
    }
    Ok(response.json().await?)
}

#[async_trait]
impl QuestionSource for QuizServiceClient {
    async fn fetch_random(&self, count: usize) -> Result<Vec<Question>, ClientError> {
        self.random_questions(count).await
    }

    async fn fetch_all(&self) -> Result<Vec<Question>, ClientError> {
        self.all_questions().await
    }
}
