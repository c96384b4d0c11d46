//! Self-play between two agents: single games and match statistics.

pub mod episode;
pub mod metrics;

pub use episode::{play_from, play_game, GameRecord, Ply};
pub use metrics::{GameResult, MatchMetrics};
