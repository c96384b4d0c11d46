use super::{GreedyAgent, RandomAgent};
use crate::game::{Board, GameState, Turn};

/// A legal turn offered to an agent, with the board it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub turn: Turn,
    pub board: Board,
}

/// Universal interface for all agents.
pub trait Agent {
    /// Pick one of `candidates` (never empty) for the side on move in `state`.
    /// Returns an index into `candidates`.
    fn select_turn(&mut self, state: &GameState, candidates: &[Candidate]) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agents selectable from configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Greedy,
}

impl AgentKind {
    /// Build the agent; `seed` makes random choices reproducible.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::new()),
            },
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
        }
    }
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(AgentKind::Random),
            "greedy" => Ok(AgentKind::Greedy),
            other => Err(format!(
                "unknown agent '{other}' (expected 'random' or 'greedy')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_kind_parses() {
        assert_eq!("random".parse::<AgentKind>(), Ok(AgentKind::Random));
        assert_eq!("greedy".parse::<AgentKind>(), Ok(AgentKind::Greedy));
        assert!("negamax".parse::<AgentKind>().is_err());
    }

    #[test]
    fn test_agent_kind_builds() {
        assert_eq!(AgentKind::Random.build(Some(1)).name(), "Random");
        assert_eq!(AgentKind::Greedy.build(None).name(), "Greedy");
    }
}
