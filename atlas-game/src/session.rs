//! The round-by-round game state machine.

use atlas_core::{
    ArtifactRecord, Guess, GuessScorer, LocationResolver, ResolvedArtifact, RoundResult,
};
use atlas_scorer::ScoringEngine;
use log::{debug, info};

use crate::summary::average;
use crate::{GameConfig, GameError, GamePhase, GameSummary, PlayerRank};

/// Guess submitted on the player's behalf when the clock runs out.
pub const TIMEOUT_GUESS: Guess = Guess::at(0.0, 0.0);

/// Result of advancing the round clock by one second.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The round is still open.
    Running {
        /// Seconds left on the clock.
        remaining: u32,
    },
    /// The clock reached zero and [`TIMEOUT_GUESS`] was scored.
    TimedOut(RoundResult),
}

/// A single player's game.
///
/// The session owns the resolved artifacts, the round clock and the
/// append-only round history. Every operation checks the current
/// [`GamePhase`] and fails with [`GameError::WrongPhase`] when called out of
/// turn; the session is left untouched in that case.
///
/// # Examples
///
/// ```
/// use atlas_core::{ArtifactRecord, Guess};
/// use atlas_game::{GameConfig, GamePhase, GameSession};
///
/// let records = (0..5).map(|id| {
///     ArtifactRecord::new(id)
///         .with_title("Robe à la française")
///         .with_image_url("https://images.example/robe.jpg")
///         .with_culture("French")
/// });
/// let mut session = GameSession::standard(GameConfig::default());
/// session.load(records)?;
///
/// let result = session.make_guess(Guess::country("france"))?;
/// assert_eq!(result.score, 1000);
/// assert_eq!(session.phase(), GamePhase::Feedback);
/// # Ok::<(), atlas_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<'g, S> {
    config: GameConfig,
    scorer: S,
    resolver: LocationResolver<'g>,
    phase: GamePhase,
    artifacts: Vec<ResolvedArtifact>,
    round_index: usize,
    time_remaining: u32,
    total_score: u32,
    history: Vec<RoundResult>,
    last_guess: Option<Guess>,
}

impl GameSession<'static, ScoringEngine> {
    /// Session using the embedded tables and the default scoring policy.
    #[must_use]
    pub fn standard(config: GameConfig) -> Self {
        Self::new(config, ScoringEngine::default(), LocationResolver::embedded())
    }
}

impl<'g, S: GuessScorer> GameSession<'g, S> {
    /// Create a session in the [`GamePhase::Loading`] phase.
    #[must_use]
    pub const fn new(config: GameConfig, scorer: S, resolver: LocationResolver<'g>) -> Self {
        Self {
            config,
            scorer,
            resolver,
            phase: GamePhase::Loading,
            artifacts: Vec::new(),
            round_index: 0,
            time_remaining: config.round_seconds,
            total_score: 0,
            history: Vec::new(),
            last_guess: None,
        }
    }

    /// Resolve the playable records and open the first round.
    ///
    /// Records without a title or image are skipped. Extra records beyond the
    /// configured round count are kept but never shown.
    ///
    /// # Errors
    /// Returns [`GameError::WrongPhase`] outside [`GamePhase::Loading`],
    /// [`GameError::NoRounds`] when the configuration asks for zero rounds,
    /// and [`GameError::NotEnoughArtifacts`] when fewer playable records than
    /// rounds are supplied.
    pub fn load<I>(&mut self, records: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = ArtifactRecord>,
    {
        self.expect_phase("load artifacts", GamePhase::Loading)?;
        if self.config.total_rounds == 0 {
            return Err(GameError::NoRounds);
        }

        let artifacts: Vec<ResolvedArtifact> = records
            .into_iter()
            .filter(ArtifactRecord::is_playable)
            .map(|record| self.resolver.resolve_artifact(record))
            .collect();
        if artifacts.len() < self.rounds() {
            return Err(GameError::NotEnoughArtifacts {
                needed: self.config.total_rounds,
                available: artifacts.len(),
            });
        }

        info!("loaded {} playable artifacts", artifacts.len());
        self.artifacts = artifacts;
        self.round_index = 0;
        self.open_round();
        Ok(())
    }

    /// Score `guess` against the current artifact and close the round.
    ///
    /// # Errors
    /// Returns [`GameError::WrongPhase`] outside [`GamePhase::Playing`].
    pub fn make_guess(&mut self, guess: Guess) -> Result<&RoundResult, GameError> {
        self.expect_phase("make a guess", GamePhase::Playing)?;
        let artifact = self
            .artifacts
            .get(self.round_index)
            .cloned()
            .ok_or(GameError::NotEnoughArtifacts {
                needed: self.config.total_rounds,
                available: self.artifacts.len(),
            })?;

        let outcome = self.scorer.score(&artifact.location, &guess);
        debug!(
            "round {} scored {} points against {}",
            self.current_round(),
            outcome.score,
            artifact.location.country
        );
        self.total_score = self.total_score.saturating_add(outcome.score);
        self.last_guess = Some(guess.clone());
        self.history.push(RoundResult::new(artifact, guess, outcome));
        self.phase = GamePhase::Feedback;

        self.history.last().ok_or(GameError::WrongPhase {
            action: "make a guess",
            expected: GamePhase::Feedback,
            actual: self.phase,
        })
    }

    /// Advance the round clock by one second.
    ///
    /// When the clock reaches zero the session submits [`TIMEOUT_GUESS`].
    ///
    /// # Errors
    /// Returns [`GameError::WrongPhase`] outside [`GamePhase::Playing`].
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        self.expect_phase("advance the clock", GamePhase::Playing)?;
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return Ok(TickOutcome::Running {
                remaining: self.time_remaining,
            });
        }

        info!("round {} timed out", self.current_round());
        let result = self.make_guess(TIMEOUT_GUESS)?.clone();
        Ok(TickOutcome::TimedOut(result))
    }

    /// Leave the feedback screen.
    ///
    /// Opens the next round, or ends the game after the last one. Returns the
    /// phase entered.
    ///
    /// # Errors
    /// Returns [`GameError::WrongPhase`] outside [`GamePhase::Feedback`].
    pub fn next_round(&mut self) -> Result<GamePhase, GameError> {
        self.expect_phase("advance the round", GamePhase::Feedback)?;
        if self.round_index.saturating_add(1) >= self.rounds() {
            info!("game over with {} points", self.total_score);
            self.phase = GamePhase::GameOver;
        } else {
            self.round_index = self.round_index.saturating_add(1);
            self.open_round();
        }
        Ok(self.phase)
    }

    /// Discard all progress and return to [`GamePhase::Loading`].
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.phase = GamePhase::Loading;
        self.artifacts.clear();
        self.history.clear();
        self.round_index = 0;
        self.total_score = 0;
        self.time_remaining = self.config.round_seconds;
        self.last_guess = None;
    }

    /// Snapshot of the score so far.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let average_score = average(self.total_score, self.config.total_rounds);
        GameSummary {
            total_score: self.total_score,
            max_score: self
                .scorer
                .max_score()
                .saturating_mul(self.config.total_rounds),
            rounds_played: self.history.len(),
            total_rounds: self.config.total_rounds,
            average_score,
            rank: PlayerRank::from_average(average_score),
            history: self.history.clone(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Configuration in force.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// One-based number of the current round.
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.round_index.saturating_add(1)
    }

    /// Artifact on show, if a round is open or awaiting feedback.
    #[must_use]
    pub fn current_artifact(&self) -> Option<&ResolvedArtifact> {
        match self.phase {
            GamePhase::Playing | GamePhase::Feedback => self.artifacts.get(self.round_index),
            GamePhase::Loading | GamePhase::GameOver => None,
        }
    }

    /// Seconds left in the current round.
    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Sum of round scores so far.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Scored rounds in play order.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// Guess submitted in the current round, cleared when the next opens.
    #[must_use]
    pub const fn last_guess(&self) -> Option<&Guess> {
        self.last_guess.as_ref()
    }

    fn open_round(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_remaining = self.config.round_seconds;
        self.last_guess = None;
        debug!("round {} of {} open", self.current_round(), self.config.total_rounds);
    }

    fn rounds(&self) -> usize {
        usize::try_from(self.config.total_rounds).unwrap_or(usize::MAX)
    }

    fn expect_phase(&self, action: &'static str, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                action,
                expected,
                actual: self.phase,
            })
        }
    }
}
