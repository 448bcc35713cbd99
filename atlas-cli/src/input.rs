//! Capability-based file access for CLI inputs.

use std::io::{self, BufReader};

use atlas_core::Gazetteer;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use serde::de::DeserializeOwned;

use crate::{ARG_GAZETTEER, CliError};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("input path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON document from `path`.
pub(crate) fn read_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load replacement reference tables when a path is configured.
pub(crate) fn load_gazetteer(
    configured: Option<&Utf8Path>,
) -> Result<Option<Gazetteer>, CliError> {
    let Some(path) = configured else {
        return Ok(None);
    };
    require_existing(path, ARG_GAZETTEER)?;
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_GAZETTEER,
        path: path.to_path_buf(),
        source,
    })?;
    let gazetteer = Gazetteer::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadGazetteer {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("loaded gazetteer {} from {path}", gazetteer.version());
    Ok(Some(gazetteer))
}
