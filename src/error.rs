use thiserror::Error;

/// Construction-time validation failures.
///
/// Gameplay misuse is not an error: out-of-range coordinates and moves after
/// the game is over are silent no-op outcomes.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Username must not be empty")]
    EmptyUsername,
}

pub type Result<T> = core::result::Result<T, GameError>;
