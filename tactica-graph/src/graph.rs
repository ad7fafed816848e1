//! Weighted multigraph with mirrored bidirectional edges
//!
//! Every node owns an ordered list of outgoing edges. A bidirectional edge
//! `a -> b` is stored twice: the canonical copy under `a` and a mirror copy
//! under `b`. Edge totals only ever count canonical copies.

use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

// ============================================================================
// EDGES
// ============================================================================

/// Whether an edge can be walked in one or both directions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    Unidirectional,
    #[default]
    Bidirectional,
}

/// An outgoing edge stored in a node's adjacency list
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    pub destination: N,
    pub weight: f32,
    pub direction: EdgeDirection,
    /// Set on the reverse copy inserted for a bidirectional edge
    pub is_mirror: bool,
}

impl<N> Edge<N> {
    fn canonical(destination: N, weight: f32, direction: EdgeDirection) -> Self {
        Self {
            destination,
            weight,
            direction,
            is_mirror: false,
        }
    }

    fn mirror(destination: N, weight: f32) -> Self {
        Self {
            destination,
            weight,
            direction: EdgeDirection::Bidirectional,
            is_mirror: true,
        }
    }
}

// ============================================================================
// WEIGHTED GRAPH
// ============================================================================

/// Generic weighted multigraph keyed by client-supplied node values
///
/// Duplicate `add_edge` calls store duplicate edges; nothing is deduplicated.
#[derive(Clone, Debug)]
pub struct WeightedGraph<N> {
    edges: FxHashMap<N, Vec<Edge<N>>>,
}

impl<N> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self {
            edges: FxHashMap::default(),
        }
    }
}

impl<N> WeightedGraph<N>
where
    N: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add an edge, inserting either endpoint if it is missing.
    ///
    /// Bidirectional edges also store a mirror `destination -> source`.
    pub fn add_edge(&mut self, source: N, destination: N, weight: f32, direction: EdgeDirection) {
        self.edges
            .entry(source.clone())
            .or_default()
            .push(Edge::canonical(destination.clone(), weight, direction));

        let reverse = self.edges.entry(destination).or_default();
        if direction == EdgeDirection::Bidirectional {
            reverse.push(Edge::mirror(source, weight));
        }
    }

    /// Add a bidirectional edge of weight 1.0
    pub fn connect(&mut self, source: N, destination: N) {
        self.add_edge(source, destination, 1.0, EdgeDirection::Bidirectional);
    }

    /// Insert a node with no edges. No-op if it already exists.
    pub fn add_edgeless_node(&mut self, node: N) {
        self.edges.entry(node).or_default();
    }

    /// Remove every edge between `source` and `destination`.
    ///
    /// Each removed bidirectional edge takes its partner copy under
    /// `destination` with it. Separately added unidirectional edges
    /// `destination -> source` are left alone. Returns the number of edges
    /// removed from `source`.
    pub fn remove_edges(&mut self, source: &N, destination: &N) -> usize {
        let Some(source_edges) = self.edges.get_mut(source) else {
            return 0;
        };

        let mut removed = Vec::new();
        source_edges.retain(|edge| {
            if edge.destination == *destination {
                removed.push((edge.weight, edge.direction, edge.is_mirror));
                false
            } else {
                true
            }
        });

        // A self-loop keeps both copies in the list just drained.
        if source == destination {
            return removed.len();
        }

        if let Some(destination_edges) = self.edges.get_mut(destination) {
            for &(weight, direction, is_mirror) in &removed {
                if direction != EdgeDirection::Bidirectional {
                    continue;
                }
                let partner = destination_edges.iter().position(|edge| {
                    edge.destination == *source
                        && edge.direction == EdgeDirection::Bidirectional
                        && edge.is_mirror != is_mirror
                        && edge.weight == weight
                });
                if let Some(idx) = partner {
                    destination_edges.remove(idx);
                }
            }
        }

        removed.len()
    }

    /// Delete a node and every edge that points at it.
    ///
    /// Returns false if the node was not in the graph.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if self.edges.remove(node).is_none() {
            return false;
        }
        for edges in self.edges.values_mut() {
            edges.retain(|edge| edge.destination != *node);
        }
        true
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True if any edge (canonical or mirror) leads from `source` to `destination`
    pub fn do_nodes_connect(&self, source: &N, destination: &N) -> bool {
        self.edges(source)
            .iter()
            .any(|edge| edge.destination == *destination)
    }

    /// All nodes, in no particular order
    pub fn nodes(&self) -> FxHashSet<N> {
        self.edges.keys().cloned().collect()
    }

    /// Every outgoing edge of `node` as `(destination, weight)` pairs.
    ///
    /// Destinations repeat when parallel edges exist. Allocates; prefer
    /// [`WeightedGraph::neighbours`] in hot loops.
    pub fn adjacent_nodes(&self, node: &N) -> Vec<(N, f32)> {
        self.neighbours(node)
            .map(|(destination, weight)| (destination.clone(), weight))
            .collect()
    }

    /// Borrowing view of every outgoing edge of `node`, in insertion order
    pub fn neighbours<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, f32)> + 'a {
        self.edges(node)
            .iter()
            .map(|edge| (&edge.destination, edge.weight))
    }

    /// Raw adjacency list of `node`; empty if the node is absent
    pub fn edges(&self, node: &N) -> &[Edge<N>] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lowest weight among the edges `source -> destination`
    pub fn edge_weight(&self, source: &N, destination: &N) -> Option<f32> {
        self.edges(source)
            .iter()
            .filter(|edge| edge.destination == *destination)
            .map(|edge| edge.weight)
            .min_by(f32::total_cmp)
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of distinct nodes
    pub fn order(&self) -> usize {
        self.edges.len()
    }

    /// Number of canonical edges; mirrors are not counted
    pub fn size(&self) -> usize {
        self.edges
            .values()
            .flat_map(|edges| edges.iter())
            .filter(|edge| !edge.is_mirror)
            .count()
    }

    /// Number of edges stored under `node`, mirrors included
    pub fn degree(&self, node: &N) -> usize {
        self.edges(node).len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
