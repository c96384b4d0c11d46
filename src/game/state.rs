use super::board::CHECKERS_PER_PLAYER;
use super::{Board, LegalTurns, Player, Roll, Turn, TurnGenerator};
use crate::error::MoveError;

/// How decisively a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinKind {
    Single,
    Gammon,
    Backgammon,
}

impl WinKind {
    pub fn points(self) -> u32 {
        match self {
            WinKind::Single => 1,
            WinKind::Gammon => 2,
            WinKind::Backgammon => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Player,
    pub kind: WinKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState::with_board(Board::starting(), Player::CounterClockwise)
    }

    /// Start from an arbitrary position with `player` on move.
    pub fn with_board(board: Board, player: Player) -> Self {
        GameState {
            board,
            current_player: player,
            outcome: Self::outcome_of(&board),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Maximal turns the side on move may play with `roll`
    pub fn legal_turns(&self, roll: Roll) -> LegalTurns {
        if self.is_terminal() {
            return LegalTurns::new();
        }
        TurnGenerator::new(self.board, roll, self.current_player).generate()
    }

    /// Apply a turn and return new state (immutable).
    ///
    /// An empty turn is only accepted when the roll leaves no legal turn.
    pub fn apply_turn(&self, roll: Roll, turn: &Turn) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if turn.player() != self.current_player {
            return Err(MoveError::WrongPlayer {
                expected: self.current_player.symbol(),
                got: turn.player().symbol(),
            });
        }

        let mut options =
            TurnGenerator::new(self.board, roll, self.current_player).generate_with_boards();
        let board = if options.is_empty() && turn.is_empty() {
            self.board
        } else {
            options.remove(turn).ok_or_else(|| MoveError::IllegalTurn {
                turn: turn.to_string(),
                roll: roll.to_string(),
            })?
        };

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            outcome: Self::outcome_of(&board),
        })
    }

    fn outcome_of(board: &Board) -> Option<GameOutcome> {
        let winner = Player::ALL
            .into_iter()
            .find(|&p| board.off_count(p) == CHECKERS_PER_PLAYER)?;
        let loser = winner.other();

        let kind = if board.off_count(loser) > 0 {
            WinKind::Single
        } else {
            let winner_home = winner.home_board();
            let stuck_deep = board.bar_count(loser) > 0
                || winner_home
                    .into_iter()
                    .any(|index| board.point(index).is_owned_by(loser));
            if stuck_deep {
                WinKind::Backgammon
            } else {
                WinKind::Gammon
            }
        };
        Some(GameOutcome { winner, kind })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
