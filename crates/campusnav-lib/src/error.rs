use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// A missing route is not represented here; see
/// [`RouteOutcome::NoPathFound`](crate::routing::RouteOutcome::NoPathFound).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the campus map.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location is added twice under the same name.
    #[error("duplicate location: {name}")]
    DuplicateLocation { name: String },

    /// Raised when a path weight is zero, negative, or not finite.
    #[error("invalid weight {weight} for path {from} <-> {to}; weights must be positive and finite")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Raised when a path would connect a location to itself.
    #[error("path endpoints must be distinct, got {name} <-> {name}")]
    SelfLoop { name: String },

    /// Raised when a coordinate lies outside the valid latitude/longitude range.
    #[error("invalid coordinate ({latitude}, {longitude}) for location {name}")]
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    /// Raised when a route summary is requested for a route without steps.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when a route is summarised against a map it was not planned on.
    #[error("route {start} -> {goal} does not belong to this campus map")]
    RouteMismatch { start: String, goal: String },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a dataset file parses but describes an unusable campus.
    #[error("invalid dataset {path}: {message}")]
    InvalidDataset { path: PathBuf, message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the campus dataset")]
    ProjectDirsUnavailable,

    /// Raised when building a GeoJSON feature fails.
    #[error("failed to build GeoJSON feature: {message}")]
    GeoJson { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// "Did you mean ..." sentence for a list of suggested names, if there are any.
pub fn suggestion_hint(suggestions: &[String]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{}'?", only)),
        many => Some(format!(
            "Did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    suggestion_hint(suggestions)
        .map(|hint| format!(". {hint}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_without_suggestions() {
        let err = Error::UnknownLocation {
            name: "Gym".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown location: Gym");
    }

    #[test]
    fn suggestion_hint_handles_one_or_many() {
        assert_eq!(suggestion_hint(&[]), None);
        assert_eq!(
            suggestion_hint(&["Main Gate".to_string()]).as_deref(),
            Some("Did you mean 'Main Gate'?")
        );
    }

    #[test]
    fn unknown_location_lists_suggestions() {
        let err = Error::UnknownLocation {
            name: "Main Gat".to_string(),
            suggestions: vec!["Main Gate".to_string(), "Main Canteen".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown location: Main Gat. Did you mean one of: 'Main Gate', 'Main Canteen'?"
        );
    }
}
