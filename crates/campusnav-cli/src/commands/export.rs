//! Export command handler for writing GeoJSON maps.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use campusnav_lib::{
    campus_feature_collection, describe_no_path, find_route, route_feature_collection,
    write_feature_collection, RouteOutcome, RouteSummary,
};

use crate::commands::load_campus_for;
use crate::commands::route::route_failure;
use crate::output::OutputFormat;

/// Arguments for the export command.
#[derive(Debug, Clone)]
pub struct ExportCommandArgs {
    /// Destination GeoJSON file.
    pub output: PathBuf,
    /// Optional route endpoints; both are set or neither.
    pub route: Option<(String, String)>,
}

/// Handle the export subcommand.
///
/// Writes the full campus map, or the campus with a highlighted route when
/// endpoints are given.
pub fn handle_export_command(
    dataset: Option<&Path>,
    format: OutputFormat,
    args: &ExportCommandArgs,
) -> Result<()> {
    let campus = load_campus_for(dataset)?;

    let (collection, summary) = match &args.route {
        None => (campus_feature_collection(&campus)?, None),
        Some((from, to)) => {
            let outcome = find_route(&campus, from, to).map_err(route_failure)?;
            let RouteOutcome::Found(route) = outcome else {
                anyhow::bail!(describe_no_path(from, to));
            };
            let summary = RouteSummary::from_route(&campus, &route)?;
            (route_feature_collection(&campus, &route)?, Some(summary))
        }
    };

    write_feature_collection(&args.output, &collection)
        .with_context(|| format!("failed to write map to {}", args.output.display()))?;

    format.render_export(
        &mut io::stdout().lock(),
        &args.output,
        collection.features.len(),
        summary.as_ref(),
    )
}
