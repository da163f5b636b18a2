//! Handlers for the `locations` and `paths` listing commands.

use std::io;
use std::path::Path;

use anyhow::Result;

use crate::commands::load_campus_for;
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Handle the locations subcommand.
pub fn handle_locations(
    dataset: Option<&Path>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let campus = load_campus_for(dataset)?;
    format.render_locations(&mut io::stdout().lock(), &campus, palette)
}

/// Handle the paths subcommand.
pub fn handle_paths(
    dataset: Option<&Path>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let campus = load_campus_for(dataset)?;
    format.render_paths(&mut io::stdout().lock(), &campus, palette)
}
