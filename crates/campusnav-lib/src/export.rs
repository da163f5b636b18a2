//! GeoJSON artifacts for map viewers.
//!
//! Coordinates follow RFC 7946 ordering (`[longitude, latitude]`). Every
//! feature carries a `kind` property (`location`, `path`, `start`, `end` or
//! `route`) so viewers can style them without inspecting geometry.

use std::fs;
use std::path::Path;

use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::{json, Value};
use tracing::info;

use crate::campus::{CampusMap, Coordinate};
use crate::error::{Error, Result};
use crate::routing::Route;

/// Feature collection with one point per location and one line per path.
pub fn campus_feature_collection(campus: &CampusMap) -> Result<FeatureCollection> {
    let features = campus_features(campus)?;
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: collection_members(campus.name(), campus.map_center()),
    })
}

/// Campus features plus highlighted start/end markers and the route line.
pub fn route_feature_collection(campus: &CampusMap, route: &Route) -> Result<FeatureCollection> {
    let mut features = campus_features(campus)?;

    let coordinates = route
        .steps
        .iter()
        .map(|name| campus.get_location(name).map(|location| location.coordinate))
        .collect::<Result<Vec<_>>>()?;
    let (Some(start), Some(end)) = (coordinates.first(), coordinates.last()) else {
        return Err(Error::EmptyRoute);
    };

    features.push(point_feature(
        *start,
        json!({ "kind": "start", "name": route.start() }),
    )?);
    features.push(point_feature(*end, json!({ "kind": "end", "name": route.goal() }))?);
    features.push(line_feature(
        &coordinates,
        json!({
            "kind": "route",
            "steps": route.steps,
            "hops": route.hop_count(),
            "total_distance": route.total_distance,
        }),
    )?);

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: collection_members(campus.name(), Some(start.midpoint(end))),
    })
}

/// Write a feature collection as pretty-printed GeoJSON.
pub fn write_feature_collection(path: &Path, collection: &FeatureCollection) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(collection)?)?;
    info!(
        path = %path.display(),
        features = collection.features.len(),
        "wrote GeoJSON map"
    );
    Ok(())
}

fn campus_features(campus: &CampusMap) -> Result<Vec<Feature>> {
    let mut features = Vec::with_capacity(campus.location_count() + campus.path_count());
    for location in campus.locations() {
        features.push(point_feature(
            location.coordinate,
            json!({
                "kind": "location",
                "name": location.name,
                "description": location.description,
            }),
        )?);
    }
    for path in campus.paths() {
        features.push(line_feature(
            &[path.from.coordinate, path.to.coordinate],
            json!({
                "kind": "path",
                "from": path.from.name,
                "to": path.to.name,
                "distance": path.distance,
            }),
        )?);
    }
    Ok(features)
}

fn position(coordinate: &Coordinate) -> Value {
    json!([coordinate.longitude, coordinate.latitude])
}

fn point_feature(coordinate: Coordinate, properties: Value) -> Result<Feature> {
    feature(
        json!({ "type": "Point", "coordinates": position(&coordinate) }),
        properties,
    )
}

fn line_feature(coordinates: &[Coordinate], properties: Value) -> Result<Feature> {
    let positions: Vec<Value> = coordinates.iter().map(position).collect();
    feature(
        json!({ "type": "LineString", "coordinates": positions }),
        properties,
    )
}

fn feature(geometry: Value, properties: Value) -> Result<Feature> {
    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": properties,
    });
    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJson {
        message: e.to_string(),
    })
}

fn collection_members(name: Option<&str>, center: Option<Coordinate>) -> Option<JsonObject> {
    let mut members = JsonObject::new();
    if let Some(name) = name {
        members.insert("name".to_string(), json!(name));
    }
    if let Some(center) = center {
        members.insert("center".to_string(), position(&center));
    }
    if members.is_empty() {
        None
    } else {
        Some(members)
    }
}
