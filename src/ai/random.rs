use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{Agent, Candidate};
use crate::game::GameState;

/// An agent that selects uniformly at random from legal turns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible matches
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_turn(&mut self, _state: &GameState, candidates: &[Candidate]) -> usize {
        assert!(!candidates.is_empty(), "No legal turns available");
        self.rng.random_range(0..candidates.len())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
