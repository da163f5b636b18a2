mod common;

use std::sync::Arc;
use std::thread;

use campusnav_lib::{builtin_campus, find_route, Error, RouteOutcome};

use common::{campus_from, grid_campus, grid_name, split_campus, triangle_campus};

fn distance(campus: &campusnav_lib::CampusMap, from: &str, to: &str) -> f64 {
    find_route(campus, from, to)
        .expect("known locations")
        .route()
        .map(|route| route.total_distance)
        .expect("connected locations")
}

#[test]
fn two_hop_route_beats_direct_path() {
    let campus = triangle_campus();
    let route = find_route(&campus, "A", "C")
        .expect("route query")
        .into_route()
        .expect("route exists");
    assert_eq!(route.steps, vec!["A", "B", "C"]);
    assert_eq!(route.total_distance, 15.0);
}

#[test]
fn route_to_self_is_single_step() {
    let campus = builtin_campus().expect("built-in campus");
    for location in campus.locations() {
        let route = find_route(&campus, &location.name, &location.name)
            .expect("route query")
            .into_route()
            .expect("self route");
        assert_eq!(route.steps, vec![location.name.clone()]);
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.hop_count(), 0);
    }
}

#[test]
fn disconnected_locations_report_no_path() {
    let campus = split_campus();
    let outcome = find_route(&campus, "North", "Depot").expect("not an error");
    match outcome {
        RouteOutcome::NoPathFound { start, goal } => {
            assert_eq!(start, "North");
            assert_eq!(goal, "Depot");
        }
        RouteOutcome::Found(route) => panic!("unexpected route {route:?}"),
    }
}

#[test]
fn huge_weights_do_not_hide_connected_route() {
    let campus = campus_from(
        &["A", "B", "C"],
        &[("A", "B", f64::MAX), ("B", "C", f64::MAX)],
    );
    let route = find_route(&campus, "A", "C")
        .expect("route query")
        .into_route()
        .expect("A and C are connected through B");
    assert_eq!(route.steps, vec!["A", "B", "C"]);
    assert_eq!(route.total_distance, f64::INFINITY);
}

#[test]
fn unknown_locations_are_errors() {
    let campus = triangle_campus();
    assert!(matches!(
        find_route(&campus, "Z", "A"),
        Err(Error::UnknownLocation { name, .. }) if name == "Z"
    ));
    assert!(matches!(
        campus.get_location("Z"),
        Err(Error::UnknownLocation { .. })
    ));
}

#[test]
fn unknown_location_error_suggests_similar_names() {
    let campus = builtin_campus().expect("built-in campus");
    let err = find_route(&campus, "Main Gat", "Sone Hostel").expect_err("typo");
    let message = err.to_string();
    assert!(message.contains("unknown location: Main Gat"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("'Main Gate'"));
}

#[test]
fn builtin_gate_to_canteen_route() {
    let campus = builtin_campus().expect("built-in campus");
    let route = find_route(&campus, "Main Gate", "Main Canteen")
        .expect("route query")
        .into_route()
        .expect("route exists");
    assert_eq!(
        route.steps,
        vec![
            "Main Gate",
            "Admin Building",
            "CSE Department",
            "Central Library",
            "Main Canteen"
        ]
    );
    assert_eq!(route.total_distance, 320.0);
}

#[test]
fn route_weights_are_symmetric() {
    let campus = builtin_campus().expect("built-in campus");
    let names: Vec<String> = campus.locations().map(|l| l.name.clone()).collect();
    for a in &names {
        for b in &names {
            assert_eq!(distance(&campus, a, b), distance(&campus, b, a), "{a} <-> {b}");
        }
    }
}

#[test]
fn route_weights_respect_triangle_inequality() {
    let campus = grid_campus(4);
    let names: Vec<String> = campus.locations().map(|l| l.name.clone()).collect();
    for a in &names {
        for b in &names {
            let ab = distance(&campus, a, b);
            for c in &names {
                let ac = distance(&campus, a, c);
                let bc = distance(&campus, b, c);
                assert!(ac <= ab + bc + 1e-9, "{a} -> {c} via {b}");
            }
        }
    }
}

#[test]
fn route_total_matches_sum_of_legs() {
    let campus = grid_campus(5);
    let route = find_route(&campus, &grid_name(0, 0), &grid_name(4, 4))
        .expect("route query")
        .into_route()
        .expect("grid is connected");
    let legs = route.legs(&campus).expect("route planned on this campus");
    assert_eq!(legs.len(), route.hop_count());
    assert!((legs.iter().sum::<f64>() - route.total_distance).abs() < 1e-9);

    for pair in route.steps.windows(2) {
        let neighbours = campus.neighbours(&pair[0]).expect("known location");
        assert!(neighbours.iter().any(|(name, _)| *name == pair[1]));
    }
}

#[test]
fn repeated_queries_return_identical_routes() {
    let campus = grid_campus(5);
    let first = find_route(&campus, &grid_name(0, 4), &grid_name(4, 0)).expect("route query");
    for _ in 0..20 {
        assert_eq!(
            find_route(&campus, &grid_name(0, 4), &grid_name(4, 0)).expect("route query"),
            first
        );
    }
}

#[test]
fn concurrent_queries_share_one_campus() {
    let campus = Arc::new(builtin_campus().expect("built-in campus"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let campus = Arc::clone(&campus);
            thread::spawn(move || distance(&campus, "Sone Hostel", "Sports Ground"))
        })
        .collect();

    for handle in handles {
        // Sone Hostel -> Main Canteen -> Central Library -> Sports Ground
        assert_eq!(handle.join().expect("thread completes"), 300.0);
    }
}
