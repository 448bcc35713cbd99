//! `gazetteer` command: export the embedded reference tables.

use std::io::Write;

use atlas_core::Gazetteer;

use crate::{CliError, write_json};

pub(crate) fn run_gazetteer_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, Gazetteer::embedded().data())
}
