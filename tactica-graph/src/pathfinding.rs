//! Dijkstra shortest paths
//!
//! Weights are expected to be non-negative. The heap holds one entry per
//! improvement; outdated entries are skipped when popped.

use crate::graph::WeightedGraph;
use core::cmp::Ordering;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BinaryHeap;
use std::hash::Hash;

// ============================================================================
// OPEN SET
// ============================================================================

#[derive(Debug)]
struct OpenNode<'a, N> {
    distance: f32,
    tie: u64,
    node: &'a N,
}

impl<N> PartialEq for OpenNode<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for OpenNode<'_, N> {}

impl<N> PartialOrd for OpenNode<'_, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for OpenNode<'_, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

/// Distance and predecessor tables built by a Dijkstra run
struct Relaxation<'a, N> {
    distances: FxHashMap<&'a N, f32>,
    predecessors: FxHashMap<&'a N, &'a N>,
}

impl<'a, N> Relaxation<'a, N>
where
    N: Eq + Hash + Clone,
{
    /// Settle nodes in distance order from `root` until `goal` is settled or
    /// the frontier runs dry. Unreached nodes have no distance entry, which
    /// stands in for infinity.
    fn run(graph: &'a WeightedGraph<N>, root: &'a N, goal: Option<&N>) -> Self {
        let mut distances = FxHashMap::default();
        let mut predecessors = FxHashMap::default();
        let mut settled = FxHashSet::default();
        let mut open = BinaryHeap::new();
        let mut tie: u64 = 0;

        distances.insert(root, 0.0_f32);
        open.push(OpenNode {
            distance: 0.0,
            tie,
            node: root,
        });

        while let Some(OpenNode { distance, node, .. }) = open.pop() {
            if !settled.insert(node) {
                // Stale heap entry.
                continue;
            }

            if goal == Some(node) {
                break;
            }

            for (next, weight) in graph.neighbours(node) {
                if settled.contains(next) {
                    continue;
                }
                let candidate = distance + weight;
                let improves = distances
                    .get(next)
                    .map_or(true, |&known| candidate < known);
                if !improves {
                    continue;
                }

                tracing::trace!(distance = candidate, "relaxed edge");
                distances.insert(next, candidate);
                predecessors.insert(next, node);
                tie += 1;
                open.push(OpenNode {
                    distance: candidate,
                    tie,
                    node: next,
                });
            }
        }

        Self {
            distances,
            predecessors,
        }
    }

    /// Walk predecessors back from `target`; empty if `target` was never reached
    fn path_to(&self, root: &N, target: &'a N) -> Vec<&'a N> {
        if !self.distances.contains_key(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while current != root {
            match self.predecessors.get(current) {
                Some(&previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

// ============================================================================
// GOAL-DIRECTED SEARCH
// ============================================================================

/// Minimum-weight path from `root` to `goal`, both ends included.
///
/// Returns `[root]` when `root == goal`, and an empty vector when either end
/// is missing from the graph or the goal cannot be reached.
pub fn dijkstra<N>(graph: &WeightedGraph<N>, root: &N, goal: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    if !graph.has_node(root) || !graph.has_node(goal) {
        return Vec::new();
    }
    if root == goal {
        return vec![root.clone()];
    }

    let relaxation = Relaxation::run(graph, root, Some(goal));
    let path: Vec<N> = relaxation
        .path_to(root, goal)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        settled = relaxation.distances.len(),
        hops = path.len(),
        "dijkstra search finished"
    );
    path
}

// ============================================================================
// SINGLE-SOURCE SHORTEST PATHS
// ============================================================================

/// Every shortest path out of a single root
#[derive(Clone, Debug)]
pub struct ShortestPaths<N> {
    root: Option<N>,
    distances: FxHashMap<N, f32>,
    predecessors: FxHashMap<N, N>,
}

impl<N> ShortestPaths<N>
where
    N: Eq + Hash + Clone,
{
    /// Root the paths were computed from; `None` if it was not in the graph
    pub fn root(&self) -> Option<&N> {
        self.root.as_ref()
    }

    /// Total weight of the shortest path to `node`
    pub fn distance_to(&self, node: &N) -> Option<f32> {
        self.distances.get(node).copied()
    }

    /// Shortest path from the root to `node`; empty if unreachable
    pub fn path_to(&self, node: &N) -> Vec<N> {
        let Some(root) = &self.root else {
            return Vec::new();
        };
        if !self.distances.contains_key(node) {
            return Vec::new();
        }

        let mut path = vec![node.clone()];
        let mut current = node;
        while current != root {
            let Some(previous) = self.predecessors.get(current) else {
                return Vec::new();
            };
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        path
    }

    /// Reachable nodes with their distances, in no particular order
    pub fn reachable(&self) -> impl Iterator<Item = (&N, f32)> {
        self.distances.iter().map(|(node, &distance)| (node, distance))
    }

    /// Number of reachable nodes, root included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Run Dijkstra from `root` over the whole reachable graph
pub fn shortest_paths<N>(graph: &WeightedGraph<N>, root: &N) -> ShortestPaths<N>
where
    N: Eq + Hash + Clone,
{
    if !graph.has_node(root) {
        return ShortestPaths {
            root: None,
            distances: FxHashMap::default(),
            predecessors: FxHashMap::default(),
        };
    }

    let relaxation = Relaxation::run(graph, root, None);
    tracing::debug!(
        reachable = relaxation.distances.len(),
        "single-source dijkstra finished"
    );

    ShortestPaths {
        root: Some(root.clone()),
        distances: relaxation
            .distances
            .into_iter()
            .map(|(node, distance)| (node.clone(), distance))
            .collect(),
        predecessors: relaxation
            .predecessors
            .into_iter()
            .map(|(node, previous)| (node.clone(), previous.clone()))
            .collect(),
    }
}

/// Total weight of walking `path`, taking the lightest edge for each hop
pub fn path_cost<N>(graph: &WeightedGraph<N>, path: &[N]) -> Option<f32>
where
    N: Eq + Hash + Clone,
{
    match path {
        [] => None,
        [only] => graph.has_node(only).then_some(0.0),
        _ => path
            .windows(2)
            .map(|hop| graph.edge_weight(&hop[0], &hop[1]))
            .sum(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
