use std::fmt::Write;

use serde::Serialize;

use crate::campus::{CampusMap, Coordinate};
use crate::error::{Error, Result};
use crate::routing::{Route, RouteOutcome};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Note,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    pub coordinate: Coordinate,
    /// Distance walked from the previous step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub cumulative_distance: f64,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_distance: f64,
    /// Great-circle distance between the endpoints, for comparison with the walk.
    pub straight_line_distance: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with resolved coordinates and leg distances.
    pub fn from_route(campus: &CampusMap, route: &Route) -> Result<Self> {
        let legs = route.legs(campus).ok_or_else(|| Error::RouteMismatch {
            start: route.steps.first().cloned().unwrap_or_default(),
            goal: route.steps.last().cloned().unwrap_or_default(),
        })?;
        let mut cumulative = 0.0;
        let mut steps = Vec::with_capacity(route.steps.len());

        for (index, name) in route.steps.iter().enumerate() {
            let location = campus.get_location(name)?;
            let distance = if index == 0 { None } else { legs.get(index - 1).copied() };
            cumulative += distance.unwrap_or(0.0);
            steps.push(RouteStep {
                index,
                name: location.name.clone(),
                coordinate: location.coordinate,
                distance,
                cumulative_distance: cumulative,
            });
        }

        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoute);
        };

        Ok(Self {
            start: first.name.clone(),
            goal: last.name.clone(),
            hops: route.hop_count(),
            total_distance: route.total_distance,
            straight_line_distance: first.coordinate.distance_to(&last.coordinate),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Note => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.2} m)",
            self.start, self.goal, self.hops, self.total_distance
        );
        for step in &self.steps {
            match step.distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} (+{:.0} m, {:.0} m total)",
                        step.index, step.name, distance, step.cumulative_distance
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.name);
                }
            }
        }
        let _ = writeln!(buffer, "Total distance: {:.2} meters", self.total_distance);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, `{:.2} m`, `{:.0} m` straight line)",
            self.start, self.goal, self.hops, self.total_distance, self.straight_line_distance
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{:.6}, {:.6}`)",
                step.index, step.name, step.coordinate.latitude, step.coordinate.longitude
            );
        }
        buffer
    }

    fn render_note(&self) -> String {
        let names = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{names}\n{:.2} m\n", self.total_distance)
    }
}

/// Human-readable line for a route query that found nothing.
pub fn describe_no_path(start: &str, goal: &str) -> String {
    format!("No path found between {start} and {goal}.")
}

/// Render any [`RouteOutcome`] as text.
pub fn render_outcome(
    campus: &CampusMap,
    outcome: &RouteOutcome,
    mode: RouteRenderMode,
) -> Result<String> {
    match outcome {
        RouteOutcome::Found(route) => Ok(RouteSummary::from_route(campus, route)?.render(mode)),
        RouteOutcome::NoPathFound { start, goal } => Ok(format!("{}\n", describe_no_path(start, goal))),
    }
}
