//! Shared fixtures for integration tests.

use campusnav_lib::{CampusMap, Coordinate};

/// Three locations where the two-hop route beats the direct path:
/// A-B (10), B-C (5), A-C (20).
#[allow(dead_code)]
pub fn triangle_campus() -> CampusMap {
    campus_from(
        &["A", "B", "C"],
        &[("A", "B", 10.0), ("B", "C", 5.0), ("A", "C", 20.0)],
    )
}

/// Two connected components: {North, Quad} and {Annex, Depot}.
#[allow(dead_code)]
pub fn split_campus() -> CampusMap {
    campus_from(
        &["North", "Quad", "Annex", "Depot"],
        &[("North", "Quad", 40.0), ("Annex", "Depot", 25.0)],
    )
}

/// Connected `side` x `side` grid with uneven path weights.
#[allow(dead_code)]
pub fn grid_campus(side: usize) -> CampusMap {
    let mut campus = CampusMap::named("grid");
    for row in 0..side {
        for col in 0..side {
            campus
                .add_location(
                    grid_name(row, col),
                    Coordinate::new(row as f64 * 0.001, col as f64 * 0.001),
                    format!("cell {row},{col}"),
                )
                .expect("grid location");
        }
    }
    for row in 0..side {
        for col in 0..side {
            // Weights vary per cell so shortest paths are not trivially straight lines.
            let weight = 1.0 + ((row * 7 + col * 13) % 5) as f64;
            if col + 1 < side {
                campus
                    .add_path(&grid_name(row, col), &grid_name(row, col + 1), weight)
                    .expect("grid path");
            }
            if row + 1 < side {
                campus
                    .add_path(&grid_name(row, col), &grid_name(row + 1, col), weight + 0.5)
                    .expect("grid path");
            }
        }
    }
    campus
}

#[allow(dead_code)]
pub fn grid_name(row: usize, col: usize) -> String {
    format!("R{row}C{col}")
}

#[allow(dead_code)]
pub fn campus_from(names: &[&str], paths: &[(&str, &str, f64)]) -> CampusMap {
    let mut campus = CampusMap::new();
    for (index, name) in names.iter().enumerate() {
        campus
            .add_location(
                *name,
                Coordinate::new(25.62, 85.17 + index as f64 * 0.0005),
                format!("{name} building"),
            )
            .expect("fixture location");
    }
    for &(from, to, distance) in paths {
        campus.add_path(from, to, distance).expect("fixture path");
    }
    campus
}
