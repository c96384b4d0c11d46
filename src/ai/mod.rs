//! Agents that choose among legal turns, plus board feature encoding.

mod agent;
mod greedy;
mod random;
pub mod state_encoding;

pub use agent::{Agent, AgentKind, Candidate};
pub use greedy::{GreedyAgent, Heuristic, PipHeuristic};
pub use random::RandomAgent;
