use serde::Serialize;

use crate::campus::CampusMap;
use crate::error::Result;
use crate::graph::LocationId;
use crate::path::find_route_dijkstra;

/// Route planning request between two named locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Minimum-weight walk between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Location names from start to goal, inclusive.
    pub steps: Vec<String>,
    /// Sum of the path distances between consecutive steps.
    pub total_distance: f64,
    #[serde(skip)]
    ids: Vec<LocationId>,
}

impl Route {
    /// Number of paths walked.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> &str {
        &self.steps[0]
    }

    pub fn goal(&self) -> &str {
        &self.steps[self.steps.len() - 1]
    }

    /// Distance of each hop, in route order.
    ///
    /// Returns `None` when `campus` is not the map this route was planned on.
    pub fn legs(&self, campus: &CampusMap) -> Option<Vec<f64>> {
        let same_campus = self.ids.len() == self.steps.len()
            && self
                .ids
                .iter()
                .zip(&self.steps)
                .all(|(id, name)| campus.location(*id).is_some_and(|l| &l.name == name));
        if !same_campus {
            return None;
        }

        self.ids
            .windows(2)
            .map(|pair| {
                campus
                    .graph()
                    .neighbours(pair[0])
                    .iter()
                    .find(|edge| edge.target == pair[1])
                    .map(|edge| edge.distance)
            })
            .collect()
    }
}

/// Result of a route query: either a route or a well-defined absence of one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(Route),
    NoPathFound { start: String, goal: String },
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPathFound { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPathFound { .. } => None,
        }
    }
}

/// Compute the shortest route between two named locations.
///
/// Unknown names fail with [`Error::UnknownLocation`](crate::Error::UnknownLocation);
/// disconnected locations yield [`RouteOutcome::NoPathFound`].
pub fn find_route(campus: &CampusMap, start: &str, goal: &str) -> Result<RouteOutcome> {
    let start_id = campus.resolve(start)?;
    let goal_id = campus.resolve(goal)?;

    let Some(path) = find_route_dijkstra(campus.graph(), start_id, goal_id) else {
        return Ok(RouteOutcome::NoPathFound {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    };

    let steps = path
        .nodes
        .iter()
        .filter_map(|id| campus.location(*id))
        .map(|location| location.name.clone())
        .collect();

    Ok(RouteOutcome::Found(Route {
        steps,
        total_distance: path.distance,
        ids: path.nodes,
    }))
}

/// Compute a route for a [`RouteRequest`].
pub fn plan_route(campus: &CampusMap, request: &RouteRequest) -> Result<RouteOutcome> {
    find_route(campus, &request.start, &request.goal)
}
