use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::campus::{CampusMap, Coordinate};
use crate::error::{Error, Result};

/// Default filename for a user-provided campus dataset.
const DATASET_FILENAME: &str = "campus.json";

/// Environment variable that overrides the dataset location.
pub const DATASET_ENV_VAR: &str = "CAMPUSNAV_DATASET";

/// Display name of the built-in campus.
pub const BUILTIN_CAMPUS_NAME: &str = "NIT Patna (Ashok Rajpath)";

/// Built-in locations: name, latitude, longitude, description.
const BUILTIN_LOCATIONS: &[(&str, f64, f64, &str)] = &[
    (
        "Main Gate",
        25.620500,
        85.171800,
        "Main entrance to the campus (Ashok Rajpath).",
    ),
    (
        "Admin Building",
        25.621100,
        85.172200,
        "Administrative offices and Director's office.",
    ),
    (
        "CSE Department",
        25.620900,
        85.172200,
        "Computer Science and Engineering building.",
    ),
    (
        "Central Library",
        25.621250,
        85.172300,
        "The central library of NIT Patna.",
    ),
    (
        "Main Canteen",
        25.620700,
        85.172100,
        "Main food court for students.",
    ),
    (
        "Sone Hostel",
        25.620400,
        85.172000,
        "Boys' Hostel block (Sone Hostel).",
    ),
    (
        "Sports Ground",
        25.621000,
        85.172550,
        "The main sports and athletics field.",
    ),
];

/// Built-in walkable paths with approximate distances in meters.
const BUILTIN_PATHS: &[(&str, &str, f64)] = &[
    ("Main Gate", "Admin Building", 100.0),
    ("Admin Building", "CSE Department", 50.0),
    ("Admin Building", "Sports Ground", 150.0),
    ("CSE Department", "Central Library", 70.0),
    ("Central Library", "Main Canteen", 100.0),
    ("Main Canteen", "Sone Hostel", 80.0),
    ("Sports Ground", "Central Library", 120.0),
    ("Sports Ground", "Main Gate", 180.0),
];

const BUILTIN_CENTER: &str = "Admin Building";

/// Serialized campus dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub paths: Vec<PathRecord>,
}

/// Location entry within a [`CampusDataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
}

/// Path entry within a [`CampusDataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl CampusDataset {
    /// Dataset describing the built-in campus.
    pub fn builtin() -> Self {
        Self {
            name: Some(BUILTIN_CAMPUS_NAME.to_string()),
            center: Some(BUILTIN_CENTER.to_string()),
            locations: BUILTIN_LOCATIONS
                .iter()
                .map(|&(name, latitude, longitude, description)| LocationRecord {
                    name: name.to_string(),
                    latitude,
                    longitude,
                    description: description.to_string(),
                })
                .collect(),
            paths: BUILTIN_PATHS
                .iter()
                .map(|&(from, to, distance)| PathRecord {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
                .collect(),
        }
    }

    /// Build a validated [`CampusMap`] from this dataset.
    pub fn build(&self) -> Result<CampusMap> {
        let mut campus = match &self.name {
            Some(name) => CampusMap::named(name.clone()),
            None => CampusMap::new(),
        };
        for location in &self.locations {
            campus.add_location(
                location.name.clone(),
                Coordinate::new(location.latitude, location.longitude),
                location.description.clone(),
            )?;
        }
        for path in &self.paths {
            campus.add_path(&path.from, &path.to, path.distance)?;
        }
        if let Some(center) = &self.center {
            campus.set_center(center)?;
        }
        Ok(campus)
    }
}

/// Build the built-in campus map.
pub fn builtin_campus() -> Result<CampusMap> {
    CampusDataset::builtin().build()
}

/// Load and validate a campus dataset from a JSON file.
pub fn load_campus(path: &Path) -> Result<CampusMap> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let dataset: CampusDataset = serde_json::from_str(&contents)?;
    if dataset.locations.is_empty() {
        return Err(Error::InvalidDataset {
            path: path.to_path_buf(),
            message: "dataset contains no locations".to_string(),
        });
    }

    let campus = dataset.build()?;
    debug!(
        path = %path.display(),
        locations = campus.location_count(),
        paths = campus.path_count(),
        "loaded campus dataset"
    );
    Ok(campus)
}

/// Write a dataset as pretty-printed JSON.
pub fn save_dataset(path: &Path, dataset: &CampusDataset) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(dataset)?)?;
    Ok(())
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.config_dir().join(DATASET_FILENAME))
}

/// Where a campus map was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Builtin,
}

/// Resolve which dataset to use.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CAMPUSNAV_DATASET` environment variable.
/// 3. `campus.json` in the platform config directory, when present.
/// 4. The built-in campus.
///
/// Explicit and environment paths must exist; the config directory file is
/// optional.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetSource> {
    if let Some(explicit) = target {
        return Ok(DatasetSource::File(canonical_dataset_path(explicit)));
    }

    if let Some(env_path) = env::var_os(DATASET_ENV_VAR) {
        return Ok(DatasetSource::File(canonical_dataset_path(Path::new(
            &env_path,
        ))));
    }

    match default_dataset_path() {
        Ok(default) if default.exists() => Ok(DatasetSource::File(default)),
        Ok(_) => Ok(DatasetSource::Builtin),
        Err(error) => {
            debug!(%error, "no config directory available; using built-in campus");
            Ok(DatasetSource::Builtin)
        }
    }
}

/// Resolve and load the campus map for `target`.
pub fn ensure_campus(target: Option<&Path>) -> Result<CampusMap> {
    match resolve_dataset(target)? {
        DatasetSource::File(path) => load_campus(&path),
        DatasetSource::Builtin => {
            debug!("using built-in campus dataset");
            builtin_campus()
        }
    }
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DATASET_FILENAME);
    }
    path.to_path_buf()
}
