//! Search-driven player

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::minimax::{self, SearchOutcome};
use crate::state::GameState;

/// Plays positions by running the configured search each ply
#[derive(Clone, Debug)]
pub struct SearchPlayer {
    config: SearchConfig,
}

impl SearchPlayer {
    /// Create a player; searches must look at least one ply ahead
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        if config.depth == 0 {
            return Err(SearchError::InvalidConfig(
                "a player needs a depth of at least one ply".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for the side the config says is to move
    pub fn best_successor<S: GameState>(&self, state: &S) -> Result<SearchOutcome<S>, SearchError> {
        minimax::search(state, &self.config)
    }

    /// Play both sides from `initial`, alternating who maximises each ply.
    ///
    /// Stops at a terminal position, after `max_plies`, or when a search
    /// fails. Returns the final position and every position played.
    pub fn play_out<S: GameState>(&self, initial: S, max_plies: usize) -> (S, Vec<S>) {
        let mut state = initial;
        let mut history = Vec::new();
        let mut config = self.config.clone();

        while !state.is_terminal() && history.len() < max_plies {
            match minimax::search(&state, &config) {
                Ok(outcome) => {
                    history.push(outcome.best.clone());
                    state = outcome.best;
                    config.maximising = !config.maximising;
                }
                Err(err) => {
                    tracing::warn!(ply = history.len(), %err, "play-out stopped early");
                    break;
                }
            }
        }

        tracing::debug!(plies = history.len(), "play-out finished");
        (state, history)
    }
}
