//! Core backgammon rules: board, players, moves, rolls, turns, the exhaustive
//! turn generator, and a game state machine with immutable transitions.

mod board;
mod moves;
mod player;
mod roll;
mod state;
mod turn;
mod turn_generator;

pub use board::{Board, BoardPoint, PipCounts, BAR_PIPS, CHECKERS_PER_PLAYER, NUM_POINTS};
pub use moves::{Address, Move};
pub use player::Player;
pub use roll::Roll;
pub use state::{GameOutcome, GameState, WinKind};
pub use turn::{Turn, MAX_MOVES_PER_TURN};
pub use turn_generator::{LegalTurns, TurnGenerator};
