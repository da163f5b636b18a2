/// Dense identifier for a location, assigned in insertion order.
pub type LocationId = usize;

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: LocationId,
    pub distance: f64,
}

/// Undirected adjacency structure used by pathfinding algorithms.
///
/// Neighbour lists keep the order in which paths were added so that traversal
/// (and therefore tie-breaking) is reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Number of nodes tracked by the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Return the neighbours for a given location identifier.
    pub fn neighbours(&self, node: LocationId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn add_node(&mut self) -> LocationId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Connect `a` and `b` in both directions. Returns `true` when an existing
    /// edge between the pair had its distance replaced.
    pub(crate) fn connect(&mut self, a: LocationId, b: LocationId, distance: f64) -> bool {
        let replaced = upsert(&mut self.adjacency[a], b, distance);
        upsert(&mut self.adjacency[b], a, distance);
        replaced
    }
}

fn upsert(edges: &mut Vec<Edge>, target: LocationId, distance: f64) -> bool {
    if let Some(existing) = edges.iter_mut().find(|edge| edge.target == target) {
        existing.distance = distance;
        return true;
    }
    edges.push(Edge { target, distance });
    false
}
