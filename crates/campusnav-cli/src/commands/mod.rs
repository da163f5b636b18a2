// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs only parses arguments and
// dispatches here.

pub mod export;
pub mod listing;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use campusnav_lib::{ensure_campus, CampusMap};

/// Resolve and load the campus map shared by every subcommand.
pub(crate) fn load_campus_for(dataset: Option<&Path>) -> Result<CampusMap> {
    let campus = ensure_campus(dataset).context("failed to load the campus dataset")?;
    debug!(
        locations = campus.location_count(),
        paths = campus.path_count(),
        "campus ready"
    );
    Ok(campus)
}
