//! Route command handler for computing shortest paths between locations.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use campusnav_lib::{
    plan_route, suggestion_hint, Error as RouteError, RouteOutcome, RouteRequest,
};

use crate::commands::load_campus_for;
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Exit code used when both locations exist but are not connected.
pub const NO_PATH_EXIT_CODE: u8 = 2;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
    }
}

/// Handle the route subcommand.
///
/// Prints the route (or the no-path notice) on stdout. Returns a non-zero
/// exit code when the locations are not connected.
pub fn handle_route_command(
    dataset: Option<&Path>,
    format: OutputFormat,
    palette: &ColorPalette,
    args: &RouteCommandArgs,
) -> Result<ExitCode> {
    let campus = load_campus_for(dataset)?;
    let request = args.to_request();

    let outcome = plan_route(&campus, &request).map_err(route_failure)?;
    if let RouteOutcome::Found(route) = &outcome {
        info!(
            from = %request.start,
            to = %request.goal,
            hops = route.hop_count(),
            distance = route.total_distance,
            "route computed"
        );
    }

    format.render_route(&mut io::stdout().lock(), &campus, &outcome, palette)?;

    if outcome.is_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(NO_PATH_EXIT_CODE))
    }
}

/// Turn library errors into messages suited for a terminal user.
pub(crate) fn route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestions } => {
            let hint = suggestion_hint(&suggestions)
                .map(|hint| format!(" {hint}"))
                .unwrap_or_default();
            anyhow::anyhow!(
                "Unknown location '{}'.{} Run `campusnav locations` to list known names.",
                name,
                hint
            )
        }
        other => anyhow::Error::new(other),
    }
}
