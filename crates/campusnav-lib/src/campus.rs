use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, LocationId};

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Number of suggestions attached to [`Error::UnknownLocation`].
const MAX_SUGGESTIONS: usize = 3;

/// Geographic position of a location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `true` when both components are finite and within the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate in meters (haversine).
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
    }

    /// Arithmetic midpoint, adequate for campus-scale spans.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}

/// Named point of interest on the campus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
    pub description: String,
}

/// Borrowed view of a walkable path between two locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampusPath<'a> {
    pub from: &'a Location,
    pub to: &'a Location,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PathRecord {
    from: LocationId,
    to: LocationId,
    distance: f64,
}

impl PathRecord {
    fn joins(&self, a: LocationId, b: LocationId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// In-memory campus map: locations plus the undirected path graph between
/// them.
///
/// The map is populated once through [`CampusMap::add_location`] and
/// [`CampusMap::add_path`]; every query afterwards takes `&self`, so a built map
/// can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    name: Option<String>,
    center: Option<LocationId>,
    locations: Vec<Location>,
    name_to_id: HashMap<String, LocationId>,
    paths: Vec<PathRecord>,
    graph: Graph,
}

impl CampusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Register a new location.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        coordinate: Coordinate,
        description: impl Into<String>,
    ) -> Result<LocationId> {
        let name = name.into();
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateLocation { name });
        }
        if !coordinate.is_valid() {
            return Err(Error::InvalidCoordinate {
                name,
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            });
        }

        let id = self.graph.add_node();
        self.name_to_id.insert(name.clone(), id);
        self.locations.push(Location {
            name,
            coordinate,
            description: description.into(),
        });
        Ok(id)
    }

    /// Add an undirected path between two existing locations.
    ///
    /// Adding a path for a pair that is already connected replaces its
    /// distance.
    pub fn add_path(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        if a == b {
            return Err(Error::SelfLoop {
                name: from.to_string(),
            });
        }
        if !(distance.is_finite() && distance > 0.0) {
            return Err(Error::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: distance,
            });
        }

        if self.graph.connect(a, b, distance) {
            debug!(from, to, distance, "replacing existing path distance");
            if let Some(record) = self.paths.iter_mut().find(|record| record.joins(a, b)) {
                record.distance = distance;
            }
        } else {
            self.paths.push(PathRecord {
                from: a,
                to: b,
                distance,
            });
        }
        Ok(())
    }

    /// Mark a location as the default map center.
    pub fn set_center(&mut self, name: &str) -> Result<()> {
        self.center = Some(self.resolve(name)?);
        Ok(())
    }

    /// Location the full map should be centred on, when one was configured.
    pub fn center(&self) -> Option<&Location> {
        self.center.and_then(|id| self.locations.get(id))
    }

    /// Configured center, falling back to the centroid of all locations.
    pub fn map_center(&self) -> Option<Coordinate> {
        if let Some(center) = self.center() {
            return Some(center.coordinate);
        }
        if self.locations.is_empty() {
            return None;
        }
        let count = self.locations.len() as f64;
        let (lat, lon) = self.locations.iter().fold((0.0, 0.0), |(lat, lon), loc| {
            (lat + loc.coordinate.latitude, lon + loc.coordinate.longitude)
        });
        Some(Coordinate::new(lat / count, lon / count))
    }

    /// Lookup a location by its case-sensitive name.
    pub fn get_location(&self, name: &str) -> Result<&Location> {
        let id = self.resolve(name)?;
        Ok(&self.locations[id])
    }

    /// Adjacent location names and path distances, in path insertion order.
    pub fn neighbours(&self, name: &str) -> Result<Vec<(&str, f64)>> {
        let id = self.resolve(name)?;
        Ok(self
            .graph
            .neighbours(id)
            .iter()
            .map(|edge| (self.locations[edge.target].name.as_str(), edge.distance))
            .collect())
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// All paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = CampusPath<'_>> {
        self.paths.iter().map(move |record| CampusPath {
            from: &self.locations[record.from],
            to: &self.locations[record.to],
            distance: record.distance,
        })
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location by identifier.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Resolve a name to its identifier, attaching suggestions on failure.
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.location_id(name)
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.fuzzy_location_matches(name, MAX_SUGGESTIONS),
            })
    }

    /// Location names similar to `query`, most similar first.
    pub fn fuzzy_location_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|loc| {
                let score = strsim::jaro_winkler(&needle, &loc.name.to_lowercase());
                (score, loc.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Routing graph backing this map.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CampusMap {
        let mut campus = CampusMap::named("triangle");
        campus
            .add_location("A", Coordinate::new(25.0, 85.0), "first")
            .unwrap();
        campus
            .add_location("B", Coordinate::new(25.001, 85.0), "second")
            .unwrap();
        campus
            .add_location("C", Coordinate::new(25.001, 85.001), "third")
            .unwrap();
        campus.add_path("A", "B", 10.0).unwrap();
        campus.add_path("B", "C", 5.0).unwrap();
        campus.add_path("A", "C", 20.0).unwrap();
        campus
    }

    #[test]
    fn duplicate_location_is_rejected() {
        let mut campus = triangle();
        let err = campus
            .add_location("A", Coordinate::new(0.0, 0.0), "again")
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateLocation { name } if name == "A"));
        assert_eq!(campus.location_count(), 3);
    }

    #[test]
    fn invalid_coordinate_is_rejected() {
        let mut campus = CampusMap::new();
        let err = campus
            .add_location("North", Coordinate::new(91.0, 0.0), "")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));
        let err = campus
            .add_location("Nowhere", Coordinate::new(f64::NAN, 0.0), "")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));
    }

    #[test]
    fn path_requires_known_endpoints() {
        let mut campus = triangle();
        let err = campus.add_path("A", "Z", 1.0).unwrap_err();
        assert!(matches!(err, Error::UnknownLocation { name, .. } if name == "Z"));
    }

    #[test]
    fn path_rejects_non_positive_and_non_finite_weights() {
        let mut campus = triangle();
        for weight in [0.0, -3.0, f64::INFINITY, f64::NAN] {
            let err = campus.add_path("A", "B", weight).unwrap_err();
            assert!(matches!(err, Error::InvalidWeight { .. }), "weight {weight}");
        }
        assert_eq!(campus.neighbours("A").unwrap(), vec![("B", 10.0), ("C", 20.0)]);
    }

    #[test]
    fn path_rejects_self_loop() {
        let mut campus = triangle();
        let err = campus.add_path("B", "B", 1.0).unwrap_err();
        assert!(matches!(err, Error::SelfLoop { name } if name == "B"));
    }

    #[test]
    fn re_adding_path_replaces_distance() {
        let mut campus = triangle();
        campus.add_path("C", "A", 12.0).unwrap();
        assert_eq!(campus.path_count(), 3);
        let path = campus
            .paths()
            .find(|p| p.from.name == "A" && p.to.name == "C")
            .unwrap();
        assert_eq!(path.distance, 12.0);
        assert!(campus.neighbours("C").unwrap().contains(&("A", 12.0)));
    }

    #[test]
    fn neighbours_are_symmetric() {
        let campus = triangle();
        for path in campus.paths() {
            let forward = campus.neighbours(&path.from.name).unwrap();
            let backward = campus.neighbours(&path.to.name).unwrap();
            assert!(forward.contains(&(path.to.name.as_str(), path.distance)));
            assert!(backward.contains(&(path.from.name.as_str(), path.distance)));
        }
    }

    #[test]
    fn get_location_returns_stored_location() {
        let campus = triangle();
        for location in campus.locations() {
            assert_eq!(campus.get_location(&location.name).unwrap(), location);
        }
        assert!(matches!(
            campus.get_location("Q"),
            Err(Error::UnknownLocation { .. })
        ));
    }

    #[test]
    fn map_center_prefers_configured_location() {
        let mut campus = triangle();
        let centroid = campus.map_center().unwrap();
        assert!((centroid.latitude - 25.000_666_666).abs() < 1e-6);

        campus.set_center("B").unwrap();
        assert_eq!(campus.map_center(), Some(Coordinate::new(25.001, 85.0)));
        assert!(CampusMap::new().map_center().is_none());
    }

    #[test]
    fn haversine_distance_is_reasonable() {
        let a = Coordinate::new(25.6205, 85.1718);
        let b = Coordinate::new(25.6211, 85.1722);
        let d = a.distance_to(&b);
        assert!(d > 70.0 && d < 80.0, "got {d}");
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_matches_rank_closest_first() {
        let mut campus = CampusMap::new();
        for name in ["Main Gate", "Main Canteen", "Sports Ground"] {
            campus
                .add_location(name, Coordinate::new(0.0, 0.0), "")
                .unwrap();
        }
        let matches = campus.fuzzy_location_matches("main gat", 3);
        assert_eq!(matches.first().map(String::as_str), Some("Main Gate"));
        assert!(!matches.contains(&"Sports Ground".to_string()));
        assert!(campus.fuzzy_location_matches("main", 1).len() <= 1);
    }
}
