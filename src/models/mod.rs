mod question;
mod user;

pub use question::{Difficulty, Question};
pub use user::{GameSessionRecord, SessionType, User};

/// Coarse mode of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    Paused,
    Finished,
}
