//! `play` command: replay a scripted game.

use std::io::Write;

use atlas_core::{ArtifactRecord, Gazetteer, Guess};
use atlas_game::{GameConfig, GamePhase, GameSession, GameSummary, TickOutcome};
use atlas_scorer::ScoringEngine;
use camino::Utf8PathBuf;
use clap::Parser;
use log::{debug, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_gazetteer, read_json, require_existing};
use crate::{
    ARG_GAZETTEER, ARG_ROUND_SECONDS, ARG_ROUNDS, ARG_SCRIPT, CliError, ENV_PLAY_SCRIPT,
    resolver_for, write_json,
};

/// Longest round the replay clock will run out, in seconds.
pub(crate) const MAX_ROUND_SECONDS: u32 = 3600;

/// CLI arguments for the `play` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Replay a game from a JSON script holding collection \
                 records and one guess per round. Rounds without a guess \
                 run out the clock and score the timeout guess.",
    about = "Replay a scripted game"
)]
#[ortho_config(prefix = "ATLAS")]
pub(crate) struct PlayArgs {
    /// Path to a JSON script: `{"records": [...], "guesses": [...]}`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) script: Option<Utf8PathBuf>,
    /// Rounds per game.
    #[arg(long = ARG_ROUNDS, value_name = "count")]
    #[serde(default)]
    pub(crate) rounds: Option<u32>,
    /// Seconds per round, at most one hour.
    #[arg(long = ARG_ROUND_SECONDS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) round_seconds: Option<u32>,
    /// Replacement reference tables in JSON.
    #[arg(long = ARG_GAZETTEER, value_name = "path")]
    #[serde(default)]
    pub(crate) gazetteer: Option<Utf8PathBuf>,
}

impl PlayArgs {
    pub(crate) fn into_config(self) -> Result<PlayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlayConfig::try_from(merged)
    }
}

/// Resolved `play` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayConfig {
    /// Path to the script file.
    pub(crate) script: Utf8PathBuf,
    /// Game length and clock.
    pub(crate) game: GameConfig,
    /// Optional replacement tables.
    pub(crate) gazetteer: Option<Utf8PathBuf>,
}

impl TryFrom<PlayArgs> for PlayConfig {
    type Error = CliError;

    fn try_from(args: PlayArgs) -> Result<Self, Self::Error> {
        let script = args.script.ok_or(CliError::MissingArgument {
            field: ARG_SCRIPT,
            env: ENV_PLAY_SCRIPT,
        })?;
        let defaults = GameConfig::default();
        let round_seconds = args.round_seconds.unwrap_or(defaults.round_seconds);
        if round_seconds > MAX_ROUND_SECONDS {
            return Err(CliError::ArgumentOutOfRange {
                field: ARG_ROUND_SECONDS,
                value: round_seconds,
                max: MAX_ROUND_SECONDS,
            });
        }
        let game = defaults
            .with_total_rounds(args.rounds.unwrap_or(defaults.total_rounds))
            .with_round_seconds(round_seconds);
        Ok(Self {
            script,
            game,
            gazetteer: args.gazetteer,
        })
    }
}

/// A recorded game: the records on offer and the player's answers in order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub(crate) struct PlayScript {
    /// Candidate records; unplayable ones are skipped.
    pub(crate) records: Vec<ArtifactRecord>,
    /// One guess per round; missing guesses time out.
    #[serde(default)]
    pub(crate) guesses: Vec<Guess>,
}

pub(crate) fn run_play_with(args: PlayArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_play(&config, writer)
}

pub(crate) fn execute_play(config: &PlayConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.script, ARG_SCRIPT)?;
    let script: PlayScript = read_json(&config.script, ARG_SCRIPT)?;
    let custom = load_gazetteer(config.gazetteer.as_deref())?;
    let summary = replay(config, script, custom.as_ref())?;
    write_json(writer, &summary)
}

pub(crate) fn replay(
    config: &PlayConfig,
    script: PlayScript,
    custom: Option<&Gazetteer>,
) -> Result<GameSummary, CliError> {
    let mut session = GameSession::new(
        config.game,
        ScoringEngine::default(),
        resolver_for(custom),
    );
    session.load(script.records)?;

    let mut guesses = script.guesses.into_iter();
    while session.phase() == GamePhase::Playing {
        match guesses.next() {
            Some(guess) => {
                session.make_guess(guess)?;
            }
            None => run_out_clock(&mut session)?,
        }
        session.next_round()?;
    }

    let unused = guesses.count();
    if unused > 0 {
        warn!("ignored {unused} guesses beyond the last round");
    }
    Ok(session.summary())
}

fn run_out_clock(session: &mut GameSession<'_, ScoringEngine>) -> Result<(), CliError> {
    loop {
        if let TickOutcome::TimedOut(result) = session.tick()? {
            debug!("round timed out scoring {}", result.score);
            return Ok(());
        }
    }
}
