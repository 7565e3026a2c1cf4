//! # code-quiz
//!
//! A terminal quiz game for coding knowledge.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use code_quiz::{Quiz, QuizError};
//! use code_quiz::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Questions come from the service at Config::api_url,
//!     // or from the built-in samples when it is unreachable.
//!     let quiz = Quiz::new(Config::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod client;
pub mod config;
mod data;
mod models;
pub mod presenter;
pub mod scheduler;
pub mod scoreboard;
pub mod terminal;
pub mod timer;
mod ui;

use std::io;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

pub use app::{AUTO_ADVANCE_DELAY, App, GameError, NO_QUESTIONS_NOTICE};
pub use client::{ClientError, QuestionSource, QuizServiceClient};
pub use data::{
    EMPTY_SOURCE_NOTICE, LOAD_FAILED_NOTICE, LoadOutcome, QuestionOrigin, load_questions,
    sample_questions,
};
pub use models::{Difficulty, GameMode, GameSessionRecord, Question, SessionType, User};

use config::Config;
use scheduler::{GameEvent, Scheduler};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The service client could not be set up.
    #[error("Failed to set up quiz service client: {0}")]
    Client(#[from] ClientError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    events: UnboundedReceiver<GameEvent>,
}

impl Quiz {
    /// Create a quiz backed by the service at `config.api_url`.
    pub fn new(config: Config) -> Result<Self, QuizError> {
        let client = QuizServiceClient::new(&config.api_url)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a quiz backed by any question source.
    pub fn with_source(config: Config, source: Arc<dyn QuestionSource>) -> Self {
        let (scheduler, events) = Scheduler::new();
        Self {
            app: App::new(config.game, source, scheduler),
            events,
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, load questions, display the quiz UI,
    /// and return when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        self.app.reload();

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &mut self.events).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    events: &mut UnboundedReceiver<GameEvent>,
) -> Result<(), QuizError> {
    let mut input = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            Some(event) = events.recv() => app.handle_event(event),
            maybe_input = input.next() => match maybe_input {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        GameMode::Menu => handle_menu_input(app, key),
        GameMode::Playing => handle_playing_input(app, key),
        GameMode::Paused => handle_paused_input(app, key),
        GameMode::Finished => handle_finished_input(app, key),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            if let Err(e) = app.start() {
                warn!(error = %e, "cannot start game");
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.reload(),
        _ => {}
    }
}

fn handle_playing_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_highlighted();
        }
        KeyCode::Char(c @ 'a'..='d') => {
            app.select_answer(c as usize - 'a' as usize);
        }
        KeyCode::Char(c @ '1'..='4') => {
            app.select_answer(c as usize - '1' as usize);
        }
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => app.pause(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.stop(),
        _ => debug!(?key, "ignored key"),
    }
}

fn handle_paused_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter | KeyCode::Esc => app.resume(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.main_menu(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.stop(),
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => app.play_again(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.main_menu(),
        _ => {}
    }
}
