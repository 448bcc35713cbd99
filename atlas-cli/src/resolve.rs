//! `resolve` command: records in, resolved artifacts out.

use std::io::Write;

use atlas_core::{ArtifactRecord, ResolvedArtifact};
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_gazetteer, read_json, require_existing};
use crate::{
    ARG_GAZETTEER, ARG_RECORDS, CliError, ENV_RESOLVE_RECORDS, resolver_for, write_json,
};

/// CLI arguments for the `resolve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve a JSON array of collection records to the country \
                 and coordinates used as ground truth. Each record walks the \
                 fallback chain: explicit country, culture, date and medium, \
                 title, then the collection's home location.",
    about = "Resolve collection records to locations"
)]
#[ortho_config(prefix = "ATLAS")]
pub(crate) struct ResolveArgs {
    /// Path to a JSON array of collection records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) records: Option<Utf8PathBuf>,
    /// Replacement reference tables in JSON.
    #[arg(long = ARG_GAZETTEER, value_name = "path")]
    #[serde(default)]
    pub(crate) gazetteer: Option<Utf8PathBuf>,
}

impl ResolveArgs {
    pub(crate) fn into_config(self) -> Result<ResolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ResolveConfig::try_from(merged)
    }
}

/// Resolved `resolve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolveConfig {
    /// Path to the records file.
    pub(crate) records: Utf8PathBuf,
    /// Optional replacement tables.
    pub(crate) gazetteer: Option<Utf8PathBuf>,
}

impl TryFrom<ResolveArgs> for ResolveConfig {
    type Error = CliError;

    fn try_from(args: ResolveArgs) -> Result<Self, Self::Error> {
        let records = args.records.ok_or(CliError::MissingArgument {
            field: ARG_RECORDS,
            env: ENV_RESOLVE_RECORDS,
        })?;
        Ok(Self {
            records,
            gazetteer: args.gazetteer,
        })
    }
}

pub(crate) fn run_resolve_with(args: ResolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_resolve(&config, writer)
}

pub(crate) fn execute_resolve(
    config: &ResolveConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.records, ARG_RECORDS)?;
    let records: Vec<ArtifactRecord> = read_json(&config.records, ARG_RECORDS)?;
    let custom = load_gazetteer(config.gazetteer.as_deref())?;
    let resolver = resolver_for(custom.as_ref());

    let resolved: Vec<ResolvedArtifact> = records
        .into_iter()
        .map(|record| resolver.resolve_artifact(record))
        .collect();
    info!("resolved {} records from {}", resolved.len(), config.records);
    write_json(writer, &resolved)
}
