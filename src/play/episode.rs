use rand::Rng;

use crate::ai::{Agent, Candidate};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, Roll, Turn, TurnGenerator};

/// One player's roll and the turn played with it (empty on a forced pass).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ply {
    pub player: Player,
    pub roll: Roll,
    pub turn: Turn,
}

/// Everything that happened in one game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub plies: Vec<Ply>,
    pub outcome: Option<GameOutcome>,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn game_length(&self) -> usize {
        self.plies.len()
    }
}

/// Play one game from the opening position. `agents` are indexed by
/// [`Player::index`]. Stops after `max_plies` if nobody has won by then.
pub fn play_game<R: Rng + ?Sized>(
    agents: &mut [Box<dyn Agent>; 2],
    rng: &mut R,
    max_plies: usize,
) -> Result<GameRecord, MoveError> {
    play_from(GameState::initial(), agents, rng, max_plies)
}

/// Play on from an arbitrary state.
pub fn play_from<R: Rng + ?Sized>(
    mut state: GameState,
    agents: &mut [Box<dyn Agent>; 2],
    rng: &mut R,
    max_plies: usize,
) -> Result<GameRecord, MoveError> {
    let mut plies = Vec::new();

    while !state.is_terminal() && plies.len() < max_plies {
        let player = state.current_player();
        let roll = Roll::roll(rng);
        let candidates: Vec<Candidate> = TurnGenerator::new(*state.board(), roll, player)
            .generate_with_boards()
            .into_iter()
            .map(|(turn, board)| Candidate { turn, board })
            .collect();

        let agent = &mut agents[player.index()];
        let turn = if candidates.is_empty() {
            Turn::new(player)
        } else {
            let index = agent.select_turn(&state, &candidates);
            candidates[index].turn.clone()
        };
        log::debug!(
            "ply {}: {} ({}) rolls {} and plays {}",
            plies.len() + 1,
            player,
            agent.name(),
            roll,
            turn
        );

        state = state.apply_turn(roll, &turn)?;
        plies.push(Ply { player, roll, turn });
    }

    match state.outcome() {
        Some(outcome) => log::info!(
            "{} wins a {:?} ({} points) after {} plies",
            outcome.winner,
            outcome.kind,
            outcome.kind.points(),
            plies.len()
        ),
        None => log::warn!("game stopped unfinished after {} plies", plies.len()),
    }

    Ok(GameRecord {
        plies,
        outcome: state.outcome(),
        final_state: state,
    })
}
