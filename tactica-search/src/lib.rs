//! Tactica Search - Adversarial game-tree search
//!
//! This crate provides:
//! - The `GameState` capability trait (score, terminal test, lazy expansion)
//! - `GameTree`, an owner for the root position of one search session
//! - Depth-bounded minimax and alpha-beta search
//! - `SearchConfig` (code or JSON) and a `SearchPlayer` that plays games out
//!
//! Searches are synchronous and recursive; recursion depth equals the
//! requested ply count.

pub mod config;
pub mod error;
pub mod minimax;
pub mod player;
pub mod state;
pub mod tree;

// Re-exports for convenient access
pub use config::{Algorithm, SearchConfig, MAX_DEPTH};
pub use error::SearchError;
pub use minimax::{
    alpha_beta, alpha_beta_search, minimax, minimax_search, search, SearchOutcome, SearchStats,
};
pub use player::SearchPlayer;
pub use state::GameState;
pub use tree::GameTree;
