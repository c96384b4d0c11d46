use super::agent::{Agent, Candidate};
use crate::game::{Board, GameState, Player, NUM_POINTS};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Race-plus-safety evaluation: pip lead, minus exposed blots, plus made points.
#[derive(Debug, Clone, Copy)]
pub struct PipHeuristic {
    pub blot_penalty: f64,
    pub point_bonus: f64,
}

impl Default for PipHeuristic {
    fn default() -> Self {
        PipHeuristic {
            blot_penalty: 4.0,
            point_bonus: 2.0,
        }
    }
}

impl Heuristic for PipHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let pips = board.pip_counts();
        let mut score = pips.get(player.other()) as f64 - pips.get(player) as f64;

        for index in 0..NUM_POINTS {
            let point = board.point(index);
            if !point.is_owned_by(player) {
                continue;
            }
            if point.is_blot() {
                score -= self.blot_penalty;
            } else {
                score += self.point_bonus;
            }
        }

        score
    }
}

/// Agent that plays the turn whose resulting board scores best.
pub struct GreedyAgent {
    heuristic: Box<dyn Heuristic>,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            heuristic: Box::new(PipHeuristic::default()),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        GreedyAgent { heuristic }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_turn(&mut self, state: &GameState, candidates: &[Candidate]) -> usize {
        assert!(!candidates.is_empty(), "No legal turns available");
        let player = state.current_player();

        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = self.heuristic.evaluate(&candidate.board, player);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        best_index
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
