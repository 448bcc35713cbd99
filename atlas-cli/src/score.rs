//! `score` command: one record, one guess.

use std::io::Write;

use atlas_core::{ArtifactRecord, Guess, GuessScorer, ResolvedLocation};
use atlas_scorer::{ScoreBand, ScoringEngine, format_distance};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_gazetteer, read_json, require_existing};
use crate::{
    ARG_ARTIFACT, ARG_GAZETTEER, ARG_GUESS, CliError, ENV_SCORE_ARTIFACT, ENV_SCORE_GUESS,
    resolver_for, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve a single collection record and score a guess \
                 against it. A guess of the form \"lat,lng\" is scored by \
                 distance; anything else is treated as a country name.",
    about = "Score a guess against a record"
)]
#[ortho_config(prefix = "ATLAS")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON collection record.
    #[arg(long = ARG_ARTIFACT, value_name = "path")]
    #[serde(default)]
    pub(crate) artifact: Option<Utf8PathBuf>,
    /// Country name or "lat,lng" pair.
    #[arg(long = ARG_GUESS, value_name = "text", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) guess: Option<String>,
    /// Replacement reference tables in JSON.
    #[arg(long = ARG_GAZETTEER, value_name = "path")]
    #[serde(default)]
    pub(crate) gazetteer: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the record file.
    pub(crate) artifact: Utf8PathBuf,
    /// Parsed guess.
    pub(crate) guess: Guess,
    /// Optional replacement tables.
    pub(crate) gazetteer: Option<Utf8PathBuf>,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let artifact = args.artifact.ok_or(CliError::MissingArgument {
            field: ARG_ARTIFACT,
            env: ENV_SCORE_ARTIFACT,
        })?;
        let text = args
            .guess
            .filter(|text| !text.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_GUESS,
                env: ENV_SCORE_GUESS,
            })?;
        let guess = text
            .parse::<Guess>()
            .map_err(|source| CliError::InvalidGuess {
                field: ARG_GUESS,
                value: text.clone(),
                source,
            })?;
        Ok(Self {
            artifact,
            guess,
            gazetteer: args.gazetteer,
        })
    }
}

/// Printed result of the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScoreReport {
    /// Ground truth the guess was scored against.
    pub(crate) location: ResolvedLocation,
    /// The guess as parsed.
    pub(crate) guess: Guess,
    /// Points awarded.
    pub(crate) score: u32,
    /// Great-circle distance for pin guesses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) distance_km: Option<f64>,
    /// Distance formatted for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) distance: Option<String>,
    /// Feedback tier for the score.
    pub(crate) band: ScoreBand,
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_score(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    require_existing(&config.artifact, ARG_ARTIFACT)?;
    let record: ArtifactRecord = read_json(&config.artifact, ARG_ARTIFACT)?;
    let custom = load_gazetteer(config.gazetteer.as_deref())?;
    let location = resolver_for(custom.as_ref()).resolve(&record);

    let outcome = ScoringEngine::default().score(&location, &config.guess);
    Ok(ScoreReport {
        location,
        guess: config.guess.clone(),
        score: outcome.score,
        distance_km: outcome.distance_km,
        distance: outcome.distance_km.map(format_distance),
        band: ScoreBand::from_score(outcome.score),
    })
}
