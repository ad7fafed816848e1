//! Tactica Graph - Weighted graphs and traversals for game logic
//!
//! This crate provides:
//! - A weighted multigraph with unidirectional and mirrored bidirectional edges
//! - Depth-first, breadth-first and greedy best-first traversals
//! - Dijkstra shortest paths, goal-directed and single-source
//!
//! Everything is synchronous and fail-soft: queries about missing nodes return
//! empty results instead of errors.

pub mod graph;
pub mod pathfinding;
pub mod traversal;

// Re-exports for convenient access
pub use graph::{Edge, EdgeDirection, WeightedGraph};
pub use pathfinding::{dijkstra, path_cost, shortest_paths, ShortestPaths};
pub use traversal::{best_first, breadth_first, depth_first};
