//! Multiple-choice presentation of a single question.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;

pub const CHOICE_COUNT: usize = 4;

/// Generic wrong answers mixed in with the correct one.
pub const DISTRACTOR_POOL: [&str; 6] = [
    "A syntax error in the code",
    "A runtime exception",
    "A deprecated method call",
    "An undefined variable reference",
    "A memory allocation issue",
    "A type conversion error",
];

/// Build a shuffled choice set around `correct`.
///
/// Holds `CHOICE_COUNT` entries unless the pool runs out of distractors that
/// differ from `correct`, in which case it holds as many as are available.
pub fn generate_choices<R: Rng>(correct: &str, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = DISTRACTOR_POOL
        .iter()
        .copied()
        .filter(|candidate| *candidate != correct)
        .collect();

    let mut choices = Vec::with_capacity(CHOICE_COUNT);
    choices.push(correct.to_string());

    while choices.len() < CHOICE_COUNT && !pool.is_empty() {
        let pick = rng.random_range(0..pool.len());
        choices.push(pool.swap_remove(pick).to_string());
    }

    choices.shuffle(rng);
    choices
}

/// Outcome of the one accepted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub choice: String,
    pub is_correct: bool,
}

/// How a choice should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    Idle,
    Correct,
    Incorrect,
}

/// A question as shown to the player: its choices and the selection lock.
#[derive(Debug, Clone)]
pub struct PresentedQuestion {
    choices: Vec<String>,
    correct_answer: String,
    selected: Option<usize>,
}

impl PresentedQuestion {
    pub fn new<R: Rng>(question: &Question, rng: &mut R) -> Self {
        Self {
            choices: generate_choices(&question.answer, rng),
            correct_answer: question.answer.clone(),
            selected: None,
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the result is being shown.
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Select the choice at `index`.
    ///
    /// Only the first valid selection counts; afterwards this returns `None`.
    pub fn select(&mut self, index: usize) -> Option<AnswerOutcome> {
        if self.selected.is_some() {
            return None;
        }
        let choice = self.choices.get(index)?.clone();

        self.selected = Some(index);
        Some(AnswerOutcome {
            index,
            is_correct: choice == self.correct_answer,
            choice,
        })
    }

    pub fn choice_state(&self, index: usize) -> ChoiceState {
        let Some(selected) = self.selected else {
            return ChoiceState::Idle;
        };
        match self.choices.get(index) {
            Some(choice) if *choice == self.correct_answer => ChoiceState::Correct,
            Some(_) if index == selected => ChoiceState::Incorrect,
            _ => ChoiceState::Idle,
        }
    }
}
