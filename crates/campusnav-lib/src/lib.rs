//! Campus navigation library entry points.
//!
//! This crate holds the campus map (named locations joined by weighted,
//! undirected walking paths), loads it from the built-in table or a JSON
//! dataset, and computes shortest routes between locations. Higher-level
//! consumers (the CLI, map exporters) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!
//! A built [`CampusMap`] is never mutated by queries, so it can be shared
//! across threads by reference or behind an `Arc`.

#![deny(warnings)]

pub mod campus;
pub mod dataset;
pub mod error;
pub mod export;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use campus::{CampusMap, CampusPath, Coordinate, Location};
pub use dataset::{
    builtin_campus, default_dataset_path, ensure_campus, load_campus, resolve_dataset,
    save_dataset, CampusDataset, DatasetSource,
};
pub use error::{suggestion_hint, Error, Result};
pub use export::{campus_feature_collection, route_feature_collection, write_feature_collection};
pub use graph::{Edge, Graph, LocationId};
pub use output::{describe_no_path, render_outcome, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_dijkstra, ShortestPath};
pub use routing::{find_route, plan_route, Route, RouteOutcome, RouteRequest};
