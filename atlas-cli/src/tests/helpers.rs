//! Temporary workspaces and canned inputs for CLI tests.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory addressed by UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(path.as_std_path(), contents).expect("write fixture file");
        path
    }
}

/// Decode bytes written by a command into JSON.
pub(super) fn output_json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("command output is JSON")
}

pub(super) const RECORDS_JSON: &str = r#"[
  {"objectID": 1, "title": "Court gown", "culture": "French", "primaryImage": "https://images.example/1.jpg"},
  {"objectID": 2, "title": "Kimono", "country": "japan", "primaryImage": "https://images.example/2.jpg"},
  {"objectID": 3, "title": "Caftan from the Ottoman Empire", "primaryImage": "https://images.example/3.jpg"},
  {"objectID": 4, "title": "Evening dress", "primaryImage": ""}
]"#;

pub(super) const CUSTOM_GAZETTEER_JSON: &str = r#"{
  "version": "test",
  "countries": [
    {"name": "Lilliput", "lat": 10.0, "lng": 20.0},
    {"name": "Blefuscu", "lat": 11.0, "lng": 21.0}
  ],
  "cultures": [{"adjective": "Lilliputian", "country": "Lilliput"}],
  "historical_names": [{"name": "Mildendo", "country": "Lilliput"}]
}"#;
