use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::graph::{Graph, LocationId};

/// Lowest-cost path found by [`find_route_dijkstra`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<LocationId>,
    pub distance: f64,
}

/// Run Dijkstra's algorithm to find the lowest-cost path between `start` and
/// `goal`.
///
/// Returns `None` when `goal` cannot be reached. Frontier entries with equal
/// cost are expanded in ascending identifier order, and a node's predecessor
/// only changes on a strictly shorter candidate, so equal-cost alternatives
/// always resolve the same way.
pub fn find_route_dijkstra(graph: &Graph, start: LocationId, goal: LocationId) -> Option<ShortestPath> {
    let node_count = graph.node_count();
    if start >= node_count || goal >= node_count {
        return None;
    }
    if start == goal {
        return Some(ShortestPath {
            nodes: vec![start],
            distance: 0.0,
        });
    }

    // `None` marks unreached nodes; sums that overflow to infinity still count as reached.
    let mut distances: Vec<Option<f64>> = vec![None; node_count];
    let mut parents: Vec<Option<LocationId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = Some(0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;
        let current_distance = entry.cost.0;

        if entry.node == goal {
            debug!(
                start,
                goal,
                distance = current_distance,
                settled = visited.iter().filter(|v| **v).count(),
                "dijkstra reached goal"
            );
            return Some(ShortestPath {
                nodes: reconstruct_path(&parents, start, goal),
                distance: current_distance,
            });
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if visited[next] {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            let improves = match distances[next] {
                None => true,
                Some(known) => next_cost < known,
            };
            if improves {
                distances[next] = Some(next_cost);
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(start, goal, "dijkstra exhausted frontier without reaching goal");
    None
}

fn reconstruct_path(
    parents: &[Option<LocationId>],
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: LocationId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: LocationId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
