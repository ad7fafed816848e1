//! Uninformed graph traversals
//!
//! All traversals start at `root` and return nodes in the order they were
//! visited. An absent root yields an empty vector. When a goal is given the
//! traversal stops as soon as the goal is taken off the frontier, and the goal
//! is the last node in the output.

use crate::graph::WeightedGraph;
use core::cmp::Ordering;
use rustc_hash::FxHashSet;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

// ============================================================================
// DEPTH-FIRST
// ============================================================================

/// Stack-driven depth-first traversal.
///
/// Nodes are recorded when popped, so a node may sit on the stack more than
/// once but is only ever emitted once.
pub fn depth_first<N>(graph: &WeightedGraph<N>, root: &N, goal: Option<&N>) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    if !graph.has_node(root) {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        if goal == Some(current) {
            break;
        }

        stack.extend(graph.neighbours(current).map(|(node, _)| node));
    }

    tracing::debug!(visited = order.len(), "depth-first traversal finished");
    order
}

// ============================================================================
// BREADTH-FIRST
// ============================================================================

/// Queue-driven breadth-first traversal.
///
/// Nodes are marked when enqueued, so each node enters the queue at most once
/// and the output is ordered by hop count from `root`.
pub fn breadth_first<N>(graph: &WeightedGraph<N>, root: &N, goal: Option<&N>) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    if !graph.has_node(root) {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    visited.insert(root);

    let mut queue = VecDeque::from([root]);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        if goal == Some(current) {
            break;
        }

        for (node, _) in graph.neighbours(current) {
            if visited.insert(node) {
                queue.push_back(node);
            }
        }
    }

    tracing::debug!(visited = order.len(), "breadth-first traversal finished");
    order
}

// ============================================================================
// BEST-FIRST
// ============================================================================

/// Frontier entry for the greedy traversal
#[derive(Debug)]
struct FrontierEntry<'a, N> {
    weight: f32,
    tie: u64,
    node: &'a N,
}

impl<N> FrontierEntry<'_, N> {
    fn key(&self) -> (f32, u64) {
        (self.weight, self.tie)
    }
}

impl<N> PartialEq for FrontierEntry<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<'_, N> {}

impl<N> PartialOrd for FrontierEntry<'_, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<'_, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        let (weight, tie) = self.key();
        let (other_weight, other_tie) = other.key();
        other_weight
            .total_cmp(&weight)
            .then_with(|| other_tie.cmp(&tie))
    }
}

/// Greedy traversal that always expands the frontier node reached through the
/// lightest edge.
///
/// A node's priority is the weight of the edge it was discovered through and
/// is never revised, so this is not a shortest-path search. Equal weights are
/// expanded in discovery order.
pub fn best_first<N>(graph: &WeightedGraph<N>, root: &N, goal: Option<&N>) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    if !graph.has_node(root) {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    visited.insert(root);

    let mut frontier = BinaryHeap::new();
    let mut tie: u64 = 0;
    frontier.push(FrontierEntry {
        weight: 0.0,
        tie,
        node: root,
    });

    while let Some(FrontierEntry { node: current, .. }) = frontier.pop() {
        order.push(current.clone());

        if goal == Some(current) {
            break;
        }

        for (node, weight) in graph.neighbours(current) {
            if visited.insert(node) {
                tie += 1;
                frontier.push(FrontierEntry { weight, tie, node });
            }
        }
    }

    tracing::debug!(visited = order.len(), "best-first traversal finished");
    order
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeDirection::{Bidirectional, Unidirectional};

    /// Small binary tree: 1 -> {2, 3}, 2 -> {4, 5}, 3 -> {6}
    fn tree() -> WeightedGraph<u32> {
        let mut graph = WeightedGraph::new();
        graph.add_edge(1, 2, 1.0, Unidirectional);
        graph.add_edge(1, 3, 1.0, Unidirectional);
        graph.add_edge(2, 4, 1.0, Unidirectional);
        graph.add_edge(2, 5, 1.0, Unidirectional);
        graph.add_edge(3, 6, 1.0, Unidirectional);
        graph
    }

    #[test]
    fn test_depth_first_is_lifo() {
        let order = depth_first(&tree(), &1, None);
        // Last pushed neighbour is explored first
        assert_eq!(order, vec![1, 3, 6, 2, 5, 4]);
    }

    #[test]
    fn test_depth_first_stops_at_goal() {
        let order = depth_first(&tree(), &1, Some(&6));
        assert_eq!(order, vec![1, 3, 6]);
    }

    #[test]
    fn test_breadth_first_levels() {
        let order = breadth_first(&tree(), &1, None);
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_breadth_first_stops_at_goal() {
        let order = breadth_first(&tree(), &1, Some(&4));
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_absent_root_yields_nothing() {
        let graph = tree();
        assert!(depth_first(&graph, &99, None).is_empty());
        assert!(breadth_first(&graph, &99, None).is_empty());
        assert!(best_first(&graph, &99, None).is_empty());
    }

    #[test]
    fn test_edgeless_root_yields_itself() {
        let mut graph = tree();
        graph.add_edgeless_node(42);
        assert_eq!(depth_first(&graph, &42, None), vec![42]);
        assert_eq!(breadth_first(&graph, &42, None), vec![42]);
        assert_eq!(best_first(&graph, &42, None), vec![42]);
    }

    #[test]
    fn test_cycles_do_not_repeat_nodes() {
        let mut graph = WeightedGraph::new();
        graph.connect('a', 'b');
        graph.connect('b', 'c');
        graph.connect('c', 'a');

        for order in [
            depth_first(&graph, &'a', None),
            breadth_first(&graph, &'a', None),
            best_first(&graph, &'a', None),
        ] {
            assert_eq!(order.len(), 3);
            assert_eq!(order[0], 'a');
        }
    }

    #[test]
    fn test_best_first_prefers_light_edges() {
        let mut graph = WeightedGraph::new();
        graph.add_edge('s', 'a', 5.0, Bidirectional);
        graph.add_edge('s', 'b', 1.0, Bidirectional);
        graph.add_edge('b', 'c', 9.0, Bidirectional);
        graph.add_edge('a', 'd', 0.5, Bidirectional);

        let order = best_first(&graph, &'s', None);
        assert_eq!(order, vec!['s', 'b', 'a', 'd', 'c']);
    }

    #[test]
    fn test_best_first_never_revises_priority() {
        // 'x' is discovered first through a heavy edge; the later light edge
        // from 'y' does not move it forward.
        let mut graph = WeightedGraph::new();
        graph.add_edge('s', 'x', 10.0, Unidirectional);
        graph.add_edge('s', 'y', 1.0, Unidirectional);
        graph.add_edge('y', 'x', 0.1, Unidirectional);
        graph.add_edge('y', 'z', 2.0, Unidirectional);

        let order = best_first(&graph, &'s', None);
        assert_eq!(order, vec!['s', 'y', 'z', 'x']);
    }

    #[test]
    fn test_best_first_ties_follow_discovery_order() {
        let mut graph = WeightedGraph::new();
        for node in ['p', 'q', 'r'] {
            graph.add_edge('s', node, 1.0, Unidirectional);
        }
        assert_eq!(best_first(&graph, &'s', None), vec!['s', 'p', 'q', 'r']);
    }
}
