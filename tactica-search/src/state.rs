//! Capability interface for searchable game positions

/// A position the search can score and expand.
///
/// Implementations are plain values: the search clones a state only when it
/// has to hand one back to the caller. Every non-terminal state is expected
/// to have at least one successor; a search that reaches a non-terminal state
/// with none fails with [`SearchError::NoContinuation`].
///
/// [`SearchError::NoContinuation`]: crate::SearchError::NoContinuation
pub trait GameState: Clone {
    /// Static evaluation, from the maximising player's point of view
    fn score(&self) -> f32;

    /// True for won, lost or drawn positions
    fn is_terminal(&self) -> bool;

    /// Successor positions, in the order the search should try them.
    ///
    /// The iterator is consumed lazily, so children after an alpha-beta
    /// cutoff are never built.
    fn expand(&self) -> impl Iterator<Item = Self>;
}
