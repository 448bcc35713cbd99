//! Round-based game loop for the costume atlas.
//!
//! A [`GameSession`] walks a player through a fixed number of rounds. Each
//! round shows one resolved artifact, waits for a guess (or for the clock to
//! run out), scores it with any [`GuessScorer`](atlas_core::GuessScorer) and
//! records the result. The session is plain caller-owned state: drive it by
//! calling its methods, there is no background timer.
//!
//! ```text
//! Loading --load--> Playing --make_guess/tick--> Feedback --next_round--> Playing
//!                                                         \--last round--> GameOver
//! any phase --restart--> Loading
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod phase;
mod session;
mod summary;

pub use config::GameConfig;
pub use error::GameError;
pub use phase::GamePhase;
pub use session::{GameSession, TIMEOUT_GUESS, TickOutcome};
pub use summary::{GameSummary, PlayerRank};
