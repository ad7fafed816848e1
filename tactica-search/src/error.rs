//! Error types for adversarial search

/// Failures that stop a search from producing a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A non-terminal state produced no successors while plies remained
    #[error("non-terminal state has no successors with {depth} plies remaining")]
    NoContinuation { depth: u32 },

    #[error("invalid search config: {0}")]
    InvalidConfig(String),
}
