//! Game tree rooted at a single owned position

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::minimax::{self, SearchOutcome};
use crate::state::GameState;

/// Owns the root position for one search session.
///
/// The tree never stores expanded children; every search regenerates them
/// from the root.
#[derive(Clone, Debug)]
pub struct GameTree<S> {
    root: S,
}

impl<S: GameState> GameTree<S> {
    pub fn new(root: S) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &S {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut S {
        &mut self.root
    }

    /// Give up the tree and keep the root position
    pub fn into_root(self) -> S {
        self.root
    }

    /// Best successor of the root by plain minimax
    pub fn minimax(&self, depth: u32, maximising: bool) -> Result<S, SearchError> {
        minimax::minimax(&self.root, depth, maximising)
    }

    /// Best successor of the root by alpha-beta search
    pub fn alpha_beta(&self, depth: u32, maximising: bool) -> Result<S, SearchError> {
        minimax::alpha_beta(&self.root, depth, maximising)
    }

    pub fn search(&self, config: &SearchConfig) -> Result<SearchOutcome<S>, SearchError> {
        minimax::search(&self.root, config)
    }
}

impl<S: GameState> From<S> for GameTree<S> {
    fn from(root: S) -> Self {
        Self::new(root)
    }
}
