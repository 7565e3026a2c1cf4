mod loader;
mod samples;

pub use loader::{
    EMPTY_SOURCE_NOTICE, LOAD_FAILED_NOTICE, LoadOutcome, QuestionOrigin, load_questions,
};
pub use samples::sample_questions;

#[cfg(test)]
pub(crate) use loader::tests::{FakeSource, Reply, question};
