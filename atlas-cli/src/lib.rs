//! Command-line interface for the costume atlas.
#![forbid(unsafe_code)]

use std::io::Write;

use atlas_core::{Gazetteer, LocationResolver};
use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod gazetteer;
mod input;
mod play;
mod resolve;
mod score;

pub use error::CliError;

use play::PlayArgs;
use resolve::ResolveArgs;
use score::ScoreArgs;

pub(crate) const ARG_RECORDS: &str = "records";
pub(crate) const ARG_ARTIFACT: &str = "artifact";
pub(crate) const ARG_GUESS: &str = "guess";
pub(crate) const ARG_SCRIPT: &str = "script";
pub(crate) const ARG_GAZETTEER: &str = "gazetteer";
pub(crate) const ARG_ROUNDS: &str = "rounds";
pub(crate) const ARG_ROUND_SECONDS: &str = "round-seconds";
pub(crate) const ENV_RESOLVE_RECORDS: &str = "ATLAS_CMDS_RESOLVE_RECORDS";
pub(crate) const ENV_SCORE_ARTIFACT: &str = "ATLAS_CMDS_SCORE_ARTIFACT";
pub(crate) const ENV_SCORE_GUESS: &str = "ATLAS_CMDS_SCORE_GUESS";
pub(crate) const ENV_PLAY_SCRIPT: &str = "ATLAS_CMDS_PLAY_SCRIPT";

/// Run the atlas CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Resolve(args) => resolve::run_resolve_with(args, &mut stdout),
        Command::Score(args) => score::run_score_with(args, &mut stdout),
        Command::Play(args) => play::run_play_with(args, &mut stdout),
        Command::Gazetteer => gazetteer::run_gazetteer_with(&mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    about = "Resolve, score and replay costume atlas games",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve collection records to ground-truth locations.
    Resolve(ResolveArgs),
    /// Score a single guess against a record.
    Score(ScoreArgs),
    /// Replay a scripted game and print its summary.
    Play(PlayArgs),
    /// Print the embedded reference tables as JSON.
    Gazetteer,
}

/// Resolver over the replacement tables when present, else the embedded ones.
pub(crate) fn resolver_for(custom: Option<&Gazetteer>) -> LocationResolver<'_> {
    match custom {
        Some(gazetteer) => LocationResolver::new(gazetteer),
        None => LocationResolver::embedded(),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
