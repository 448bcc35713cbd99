//! Unit tests covering the `resolve` and `gazetteer` commands.

use super::helpers::{CUSTOM_GAZETTEER_JSON, RECORDS_JSON, Workspace, output_json};
use super::*;
use crate::resolve::{ResolveArgs, ResolveConfig, execute_resolve};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config(records: Utf8PathBuf, gazetteer: Option<Utf8PathBuf>) -> ResolveConfig {
    ResolveConfig { records, gazetteer }
}

#[rstest]
fn converting_without_records_errors() {
    let err = ResolveConfig::try_from(ResolveArgs::default()).expect_err("records are required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECORDS);
            assert_eq!(env, ENV_RESOLVE_RECORDS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn resolves_every_record_in_order(workspace: Workspace) {
    let records = workspace.write("records.json", RECORDS_JSON);
    let mut out = Vec::new();

    execute_resolve(&config(records, None), &mut out).expect("resolve succeeds");

    let json = output_json(&out);
    let resolved = json.as_array().expect("array output");
    let summary: Vec<(u64, &str, &str)> = resolved
        .iter()
        .map(|entry| {
            (
                entry["record"]["objectID"].as_u64().unwrap_or_default(),
                entry["location"]["country"].as_str().unwrap_or_default(),
                entry["location"]["source"].as_str().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "France", "culture"),
            (2, "Japan", "country"),
            (3, "Turkey", "title"),
            (4, "United States", "default"),
        ]
    );
}

#[rstest]
fn missing_records_file_is_reported(workspace: Workspace) {
    let path = workspace.root().join("absent.json");
    let err = execute_resolve(&config(path, None), &mut Vec::new()).expect_err("missing input");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RECORDS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directories_are_rejected(workspace: Workspace) {
    let dir = workspace.root().to_path_buf();
    let err = execute_resolve(&config(dir, None), &mut Vec::new()).expect_err("not a file");
    assert!(matches!(err, CliError::SourcePathNotFile { .. }), "{err:?}");
}

#[rstest]
fn malformed_records_are_reported(workspace: Workspace) {
    let records = workspace.write("records.json", "{not json");
    let err = execute_resolve(&config(records, None), &mut Vec::new()).expect_err("bad JSON");
    match err {
        CliError::ParseInput { field, .. } => assert_eq!(field, ARG_RECORDS),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn replacement_tables_drive_resolution(workspace: Workspace) {
    let records = workspace.write(
        "records.json",
        r#"[{"objectID": 1, "culture": "Lilliputian"}, {"objectID": 2, "title": "Coat from Mildendo"}]"#,
    );
    let tables = workspace.write("gazetteer.json", CUSTOM_GAZETTEER_JSON);
    let mut out = Vec::new();

    execute_resolve(&config(records, Some(tables)), &mut out).expect("resolve succeeds");

    let json = output_json(&out);
    assert_eq!(json[0]["location"]["country"], "Lilliput");
    assert_eq!(json[1]["location"]["country"], "Lilliput");
    assert_eq!(json[1]["location"]["source"], "title");
}

#[rstest]
fn invalid_replacement_tables_are_rejected(workspace: Workspace) {
    let records = workspace.write("records.json", "[]");
    let tables = workspace.write(
        "gazetteer.json",
        r#"{"version": "bad", "countries": [], "cultures": [], "historical_names": []}"#,
    );
    let err = execute_resolve(&config(records, Some(tables)), &mut Vec::new())
        .expect_err("empty tables");
    assert!(matches!(err, CliError::LoadGazetteer { .. }), "{err:?}");
}

#[rstest]
fn gazetteer_command_exports_embedded_tables() {
    let mut out = Vec::new();

    gazetteer::run_gazetteer_with(&mut out).expect("export succeeds");

    let json = output_json(&out);
    assert_eq!(json["version"], atlas_core::gazetteer::GAZETTEER_VERSION);
    let exported = atlas_core::Gazetteer::from_json_str(&String::from_utf8_lossy(&out))
        .expect("exported tables load back");
    assert_eq!(exported.data(), atlas_core::Gazetteer::embedded().data());
}
