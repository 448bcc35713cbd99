//! Error types for the game loop.

use thiserror::Error;

use crate::GamePhase;

/// Errors raised by [`GameSession`](crate::GameSession) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not allowed in the current phase.
    #[error("cannot {action} while {actual}; expected {expected}")]
    WrongPhase {
        /// Operation that was attempted.
        action: &'static str,
        /// Phase the operation requires.
        expected: GamePhase,
        /// Phase the session was in.
        actual: GamePhase,
    },
    /// Too few playable artifacts to fill the game.
    #[error("need {needed} playable artifacts, found {available}")]
    NotEnoughArtifacts {
        /// Rounds the game requires.
        needed: u32,
        /// Playable artifacts supplied.
        available: usize,
    },
    /// The configuration asks for a game without rounds.
    #[error("a game needs at least one round")]
    NoRounds,
}
