//! Output formatting for CLI commands.
//!
//! Every renderer writes to a caller-supplied [`Write`] so commands print to
//! stdout while tests capture into a buffer.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{
    render_outcome, CampusMap, Location, RouteOutcome, RouteRenderMode, RouteSummary,
};

use crate::terminal::{format_meters, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text with optional color.
    #[default]
    Plain,
    /// Markdown suitable for chat or notes.
    Rich,
    /// Minimal one-line route.
    Note,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct PathEntry<'a> {
    from: &'a str,
    to: &'a str,
    distance: f64,
}

#[derive(Debug, Serialize)]
struct ExportOutput<'a> {
    path: String,
    features: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a RouteSummary>,
}

impl OutputFormat {
    fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Rich => RouteRenderMode::RichText,
            OutputFormat::Note => RouteRenderMode::Note,
            OutputFormat::Plain | OutputFormat::Json => RouteRenderMode::PlainText,
        }
    }

    /// Render every location of the campus.
    pub fn render_locations<W: Write>(
        self,
        out: &mut W,
        campus: &CampusMap,
        palette: &ColorPalette,
    ) -> Result<()> {
        if self == OutputFormat::Json {
            let locations: Vec<&Location> = campus.locations().collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&locations)?)?;
            return Ok(());
        }

        if let Some(name) = campus.name() {
            writeln!(out, "{}{}{}", palette.white_bold, name, palette.reset)?;
        }
        for location in campus.locations() {
            match self {
                OutputFormat::Rich => writeln!(
                    out,
                    "* **{}** (`{:.6}, {:.6}`) {}",
                    location.name,
                    location.coordinate.latitude,
                    location.coordinate.longitude,
                    location.description
                )?,
                OutputFormat::Note => writeln!(out, "{}", location.name)?,
                _ => writeln!(
                    out,
                    "{}{}{} ({:.6}, {:.6}) {}{}{}",
                    palette.white_bold,
                    location.name,
                    palette.reset,
                    location.coordinate.latitude,
                    location.coordinate.longitude,
                    palette.gray,
                    location.description,
                    palette.reset
                )?,
            }
        }
        Ok(())
    }

    /// Render every path of the campus.
    pub fn render_paths<W: Write>(
        self,
        out: &mut W,
        campus: &CampusMap,
        palette: &ColorPalette,
    ) -> Result<()> {
        if self == OutputFormat::Json {
            let paths: Vec<PathEntry<'_>> = campus
                .paths()
                .map(|path| PathEntry {
                    from: &path.from.name,
                    to: &path.to.name,
                    distance: path.distance,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&paths)?)?;
            return Ok(());
        }

        for path in campus.paths() {
            writeln!(
                out,
                "{} <-> {}: {}{}{}",
                path.from.name,
                path.to.name,
                palette.green,
                format_meters(path.distance),
                palette.reset
            )?;
        }
        Ok(())
    }

    /// Render the result of a route query.
    pub fn render_route<W: Write>(
        self,
        out: &mut W,
        campus: &CampusMap,
        outcome: &RouteOutcome,
        palette: &ColorPalette,
    ) -> Result<()> {
        match (self, outcome) {
            (OutputFormat::Json, RouteOutcome::Found(route)) => {
                let summary = RouteSummary::from_route(campus, route)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            }
            (OutputFormat::Json, RouteOutcome::NoPathFound { .. }) => {
                writeln!(out, "{}", serde_json::to_string_pretty(outcome)?)?;
            }
            (OutputFormat::Plain, RouteOutcome::Found(route)) => {
                let summary = RouteSummary::from_route(campus, route)?;
                render_plain_route(out, &summary, palette)?;
            }
            _ => write!(out, "{}", render_outcome(campus, outcome, self.render_mode())?)?,
        }
        Ok(())
    }

    /// Report a written export file.
    pub fn render_export<W: Write>(
        self,
        out: &mut W,
        path: &Path,
        features: usize,
        route: Option<&RouteSummary>,
    ) -> Result<()> {
        if self == OutputFormat::Json {
            let output = ExportOutput {
                path: path.display().to_string(),
                features,
                route,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            return Ok(());
        }

        let subject = match route {
            Some(route) => format!("Route map {} -> {}", route.start, route.goal),
            None => "Campus map".to_string(),
        };
        writeln!(
            out,
            "{} saved as '{}' ({} features)",
            subject,
            path.display(),
            features
        )?;
        Ok(())
    }
}

fn render_plain_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    palette: &ColorPalette,
) -> Result<()> {
    writeln!(
        out,
        "Shortest path from {} to {} ({} hops):",
        summary.start, summary.goal, summary.hops
    )?;

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let (tag_color, tag) = if step.index == 0 {
            (palette.tag_start, "START")
        } else if step.index == last {
            (palette.tag_goal, "GOAL ")
        } else {
            (palette.tag_walk, "WALK ")
        };
        let leg = step
            .distance
            .map(|distance| format!(" {}+{}{}", palette.gray, format_meters(distance), palette.reset))
            .unwrap_or_default();
        writeln!(
            out,
            " {}{}{} {}{}{}{}",
            tag_color, tag, palette.reset, palette.white_bold, step.name, palette.reset, leg
        )?;
    }

    writeln!(
        out,
        "\nTotal distance: {}{:.2} meters{}",
        palette.green, summary.total_distance, palette.reset
    )?;
    Ok(())
}
