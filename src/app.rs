use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::client::QuestionSource;
use crate::config::GameSettings;
use crate::data::{LoadOutcome, load_questions};
use crate::models::{GameMode, Question};
use crate::presenter::{AnswerOutcome, PresentedQuestion};
use crate::scheduler::{GameEvent, ScheduledTask, Scheduler};
use crate::scoreboard::{self, ScoreInput, Summary};
use crate::timer::{Countdown, TickOutcome};

/// How long a result stays on screen before the next question.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(2);

pub const NO_QUESTIONS_NOTICE: &str = "No questions available. Please load questions first.";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("no questions available")]
    NoQuestions,
    #[error("questions are still loading")]
    Loading,
}

/// The game: mode, question sequence, counters and pending tasks.
pub struct App {
    pub mode: GameMode,
    pub should_quit: bool,
    questions: Vec<Question>,
    current_index: usize,
    presented: Option<PresentedQuestion>,
    highlighted: usize,
    score: usize,
    correct: usize,
    incorrect: usize,
    elapsed_secs: u32,
    countdown: Countdown,
    advance_generation: u64,
    advance_task: Option<ScheduledTask>,
    load_task: Option<ScheduledTask>,
    notice: Option<String>,
    question_count: usize,
    source: Arc<dyn QuestionSource>,
    scheduler: Scheduler,
    rng: StdRng,
}

impl App {
    pub fn new(settings: GameSettings, source: Arc<dyn QuestionSource>, scheduler: Scheduler) -> Self {
        Self {
            mode: GameMode::Menu,
            should_quit: false,
            questions: Vec::new(),
            current_index: 0,
            presented: None,
            highlighted: 0,
            score: 0,
            correct: 0,
            incorrect: 0,
            elapsed_secs: 0,
            countdown: Countdown::new(settings.time_limit_secs),
            advance_generation: 0,
            advance_task: None,
            load_task: None,
            notice: None,
            question_count: settings.question_count,
            source,
            scheduler,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for choice shuffling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the question set without going through the source.
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    /// Questions left after the current one.
    pub fn remaining_questions(&self) -> usize {
        self.questions.len().saturating_sub(self.current_index + 1)
    }

    pub fn progress_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        let progress = self.current_question_number() as f64 / self.questions.len() as f64;
        (progress * 100.0).round() as u32
    }

    pub fn presented(&self) -> Option<&PresentedQuestion> {
        self.presented.as_ref()
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_loading(&self) -> bool {
        self.load_task.is_some()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn summary(&self) -> Summary {
        scoreboard::summarize(ScoreInput {
            score: self.score,
            total_questions: self.questions.len(),
            correct: self.correct,
            incorrect: self.incorrect,
            elapsed_secs: self.elapsed_secs,
        })
    }

    /// Fetch a fresh question set in the background.
    pub fn reload(&mut self) {
        if self.mode != GameMode::Menu {
            return;
        }

        info!(count = self.question_count, "loading questions");
        self.notice = None;
        let source = Arc::clone(&self.source);
        let count = self.question_count;
        self.load_task = Some(self.scheduler.run(async move {
            GameEvent::QuestionsLoaded(load_questions(source.as_ref(), count).await)
        }));
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if self.mode != GameMode::Menu {
            return Ok(());
        }
        if self.is_loading() {
            return Err(GameError::Loading);
        }
        if self.questions.is_empty() {
            self.notice = Some(NO_QUESTIONS_NOTICE.to_string());
            return Err(GameError::NoQuestions);
        }

        self.begin_session();
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        self.mode = GameMode::Paused;
        self.countdown.deactivate();
        self.cancel_advance();
        info!(remaining = self.countdown.remaining(), "game paused");
    }

    pub fn resume(&mut self) {
        if self.mode != GameMode::Paused {
            return;
        }
        self.mode = GameMode::Playing;
        self.countdown.activate(&self.scheduler);
        if self.presented.as_ref().is_some_and(PresentedQuestion::is_answered) {
            self.schedule_advance();
        }
        info!("game resumed");
    }

    /// End the game early.
    pub fn stop(&mut self) {
        if matches!(self.mode, GameMode::Playing | GameMode::Paused) {
            self.finish();
        }
    }

    pub fn play_again(&mut self) {
        if self.mode == GameMode::Finished {
            self.begin_session();
        }
    }

    pub fn main_menu(&mut self) {
        self.mode = GameMode::Menu;
        self.countdown.deactivate();
        self.countdown.reset(&self.scheduler);
        self.reset_session();
        info!("back to main menu");
    }

    /// Answer the current question with the choice at `index`.
    ///
    /// Returns `None` when not playing or when the question was already answered.
    pub fn select_answer(&mut self, index: usize) -> Option<AnswerOutcome> {
        if self.mode != GameMode::Playing {
            return None;
        }
        let outcome = self.presented.as_mut()?.select(index)?;

        if outcome.is_correct {
            self.score += 1;
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        debug!(
            question = self.current_index,
            correct = outcome.is_correct,
            "answer recorded"
        );

        self.schedule_advance();
        Some(outcome)
    }

    pub fn select_highlighted(&mut self) -> Option<AnswerOutcome> {
        self.select_answer(self.highlighted)
    }

    pub fn highlight_next(&mut self) {
        if let Some(count) = self.selectable_choices() {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous(&mut self) {
        if let Some(count) = self.selectable_choices() {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Tick { generation } => self.on_tick(generation),
            GameEvent::AutoAdvance { generation } => {
                if generation == self.advance_generation && self.mode == GameMode::Playing {
                    self.advance_task = None;
                    self.next_question();
                }
            }
            GameEvent::QuestionsLoaded(outcome) => self.on_questions_loaded(outcome),
        }
    }

    fn on_tick(&mut self, generation: u64) {
        match self.countdown.tick(generation) {
            TickOutcome::Ignored => {}
            TickOutcome::Ticked => self.elapsed_secs += 1,
            TickOutcome::Expired => {
                self.elapsed_secs += 1;
                if self.mode == GameMode::Playing {
                    info!("time is up");
                    self.finish();
                }
            }
        }
    }

    fn on_questions_loaded(&mut self, outcome: LoadOutcome) {
        self.load_task = None;
        info!(
            count = outcome.questions.len(),
            origin = ?outcome.origin,
            "questions loaded"
        );
        self.questions = outcome.questions;
        self.notice = outcome.notice;
        self.reset_session();
    }

    fn begin_session(&mut self) {
        self.reset_session();
        self.notice = None;
        self.mode = GameMode::Playing;
        self.countdown.reset(&self.scheduler);
        self.countdown.activate(&self.scheduler);
        self.present_current();
        info!(questions = self.questions.len(), "game started");
    }

    fn reset_session(&mut self) {
        self.cancel_advance();
        self.current_index = 0;
        self.presented = None;
        self.highlighted = 0;
        self.score = 0;
        self.correct = 0;
        self.incorrect = 0;
        self.elapsed_secs = 0;
    }

    fn present_current(&mut self) {
        self.presented = self
            .questions
            .get(self.current_index)
            .map(|question| PresentedQuestion::new(question, &mut self.rng));
        self.highlighted = 0;
    }

    fn next_question(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.present_current();
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.mode = GameMode::Finished;
        self.countdown.deactivate();
        self.cancel_advance();
        info!(
            score = self.score,
            total = self.questions.len(),
            elapsed = self.elapsed_secs,
            "game finished"
        );
    }

    fn schedule_advance(&mut self) {
        self.cancel_advance();
        let generation = self.advance_generation;
        self.advance_task = Some(
            self.scheduler
                .after(AUTO_ADVANCE_DELAY, GameEvent::AutoAdvance { generation }),
        );
    }

    fn cancel_advance(&mut self) {
        if let Some(task) = self.advance_task.take() {
            task.cancel();
        }
        self.advance_generation += 1;
    }

    fn selectable_choices(&self) -> Option<usize> {
        let presented = self.presented.as_ref()?;
        if self.mode != GameMode::Playing || presented.is_answered() || presented.choices().is_empty() {
            return None;
        }
        Some(presented.choices().len())
    }
}
