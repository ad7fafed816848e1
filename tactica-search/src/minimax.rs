//! Depth-bounded minimax and alpha-beta search
//!
//! Both searches return the best immediate successor of the root, not the
//! leaf that produced its value. Ties keep the first successor tried, and
//! alpha-beta always picks the same successor as plain minimax; pruning only
//! skips work.
//!
//! ## Architecture
//! - Level 1: `search` (dispatch on config)
//! - Level 2: root selection (`minimax_search`, `alpha_beta_search`)
//! - Level 3: recursive value functions

use crate::config::{Algorithm, SearchConfig};
use crate::error::SearchError;
use crate::state::GameState;

// ============================================================================
// RESULTS
// ============================================================================

/// Work done by one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States entered, root included
    pub nodes_visited: u64,
    /// States scored statically (depth exhausted or terminal)
    pub leaves_evaluated: u64,
    /// Sibling lists abandoned by alpha-beta
    pub cutoffs: u64,
}

/// Chosen successor with its backed-up value
#[derive(Clone, Debug)]
pub struct SearchOutcome<S> {
    pub best: S,
    pub score: f32,
    pub stats: SearchStats,
}

// ============================================================================
// ENTRY POINTS (Level 1)
// ============================================================================

/// Best successor of `state` by plain minimax.
///
/// Returns `state` itself when `depth` is zero or the state is terminal.
pub fn minimax<S: GameState>(state: &S, depth: u32, maximising: bool) -> Result<S, SearchError> {
    minimax_search(state, depth, maximising).map(|outcome| outcome.best)
}

/// Best successor of `state` by alpha-beta search.
///
/// Always agrees with [`minimax`] on the chosen successor.
pub fn alpha_beta<S: GameState>(
    state: &S,
    depth: u32,
    maximising: bool,
) -> Result<S, SearchError> {
    alpha_beta_search(state, depth, maximising).map(|outcome| outcome.best)
}

/// Run the search described by `config`
pub fn search<S: GameState>(
    state: &S,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>, SearchError> {
    config.validate()?;
    match config.algorithm {
        Algorithm::Minimax => minimax_search(state, config.depth, config.maximising),
        Algorithm::AlphaBeta => alpha_beta_search(state, config.depth, config.maximising),
    }
}

// ============================================================================
// ROOT SELECTION (Level 2)
// ============================================================================

/// Minimax with the chosen successor's value and search statistics
pub fn minimax_search<S: GameState>(
    state: &S,
    depth: u32,
    maximising: bool,
) -> Result<SearchOutcome<S>, SearchError> {
    let mut stats = SearchStats::default();
    if let Some(outcome) = leaf_outcome(state, depth, &mut stats) {
        return Ok(outcome);
    }

    let mut best: Option<(f32, S)> = None;
    for child in state.expand() {
        let value = minimax_value(&child, depth - 1, !maximising, &mut stats)
            .inspect_err(|err| log_failure(err, "minimax"))?;
        if best
            .as_ref()
            .map_or(true, |(best_value, _)| improves(value, *best_value, maximising))
        {
            best = Some((value, child));
        }
    }

    finish(best, depth, stats, "minimax")
}

/// Alpha-beta with the chosen successor's value and search statistics
pub fn alpha_beta_search<S: GameState>(
    state: &S,
    depth: u32,
    maximising: bool,
) -> Result<SearchOutcome<S>, SearchError> {
    let mut stats = SearchStats::default();
    if let Some(outcome) = leaf_outcome(state, depth, &mut stats) {
        return Ok(outcome);
    }

    let mut window = Window::full();
    let mut best: Option<(f32, S)> = None;
    for child in state.expand() {
        let value = alpha_beta_value(&child, depth - 1, !maximising, window, &mut stats)
            .inspect_err(|err| log_failure(err, "alpha-beta"))?;
        let cutoff = window.tighten(value, maximising);
        if best
            .as_ref()
            .map_or(true, |(best_value, _)| improves(value, *best_value, maximising))
        {
            best = Some((value, child));
        }
        if cutoff {
            stats.cutoffs += 1;
            break;
        }
    }

    finish(best, depth, stats, "alpha-beta")
}

/// Short-circuit for a root that is already a leaf
fn leaf_outcome<S: GameState>(
    state: &S,
    depth: u32,
    stats: &mut SearchStats,
) -> Option<SearchOutcome<S>> {
    stats.nodes_visited += 1;
    if depth > 0 && !state.is_terminal() {
        return None;
    }

    stats.leaves_evaluated += 1;
    Some(SearchOutcome {
        best: state.clone(),
        score: state.score(),
        stats: *stats,
    })
}

fn finish<S>(
    best: Option<(f32, S)>,
    depth: u32,
    stats: SearchStats,
    algorithm: &'static str,
) -> Result<SearchOutcome<S>, SearchError> {
    let Some((score, best)) = best else {
        let err = SearchError::NoContinuation { depth };
        log_failure(&err, algorithm);
        return Err(err);
    };

    tracing::debug!(
        algorithm,
        depth,
        score,
        nodes = stats.nodes_visited,
        leaves = stats.leaves_evaluated,
        cutoffs = stats.cutoffs,
        "search finished"
    );
    Ok(SearchOutcome { best, score, stats })
}

fn log_failure(err: &SearchError, algorithm: &'static str) {
    tracing::warn!(algorithm, %err, "search failed");
}

// ============================================================================
// VALUE FUNCTIONS (Level 3)
// ============================================================================

fn minimax_value<S: GameState>(
    state: &S,
    depth: u32,
    maximising: bool,
    stats: &mut SearchStats,
) -> Result<f32, SearchError> {
    stats.nodes_visited += 1;
    if depth == 0 || state.is_terminal() {
        stats.leaves_evaluated += 1;
        return Ok(state.score());
    }

    let mut best = worst_case(maximising);
    let mut expanded = false;
    for child in state.expand() {
        expanded = true;
        let value = minimax_value(&child, depth - 1, !maximising, stats)?;
        if improves(value, best, maximising) {
            best = value;
        }
    }

    if !expanded {
        return Err(SearchError::NoContinuation { depth });
    }
    Ok(best)
}

fn alpha_beta_value<S: GameState>(
    state: &S,
    depth: u32,
    maximising: bool,
    mut window: Window,
    stats: &mut SearchStats,
) -> Result<f32, SearchError> {
    stats.nodes_visited += 1;
    if depth == 0 || state.is_terminal() {
        stats.leaves_evaluated += 1;
        return Ok(state.score());
    }

    let mut best = worst_case(maximising);
    let mut expanded = false;
    for child in state.expand() {
        expanded = true;
        let value = alpha_beta_value(&child, depth - 1, !maximising, window, stats)?;
        if improves(value, best, maximising) {
            best = value;
        }
        if window.tighten(value, maximising) {
            stats.cutoffs += 1;
            break;
        }
    }

    if !expanded {
        return Err(SearchError::NoContinuation { depth });
    }
    Ok(best)
}

// ============================================================================
// UTILITIES (Level 4)
// ============================================================================

/// Alpha-beta bounds: the maximiser is assured at least `alpha`, the
/// minimiser at most `beta`
#[derive(Clone, Copy, Debug, PartialEq)]
struct Window {
    alpha: f32,
    beta: f32,
}

impl Window {
    fn full() -> Self {
        Self {
            alpha: f32::NEG_INFINITY,
            beta: f32::INFINITY,
        }
    }

    /// Fold a child's value into the bound owned by the side to move.
    /// Returns true when the remaining siblings can be skipped.
    fn tighten(&mut self, value: f32, maximising: bool) -> bool {
        if maximising {
            self.alpha = self.alpha.max(value);
        } else {
            self.beta = self.beta.min(value);
        }
        self.beta <= self.alpha
    }
}

fn worst_case(maximising: bool) -> f32 {
    if maximising {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    }
}

/// Strict comparison so that ties keep the earlier candidate
fn improves(value: f32, best: f32, maximising: bool) -> bool {
    if maximising {
        value > best
    } else {
        value < best
    }
}

// ============================================================================
// TESTS
// ============================================================================
