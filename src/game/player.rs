use std::ops::RangeInclusive;

/// One of the two sides. `CounterClockwise` ("X") moves towards higher point
/// indices, `Clockwise` ("O") towards lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Clockwise,
    CounterClockwise,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Clockwise, Player::CounterClockwise];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Clockwise => Player::CounterClockwise,
            Player::CounterClockwise => Player::Clockwise,
        }
    }

    /// Slot of this player in per-player arrays
    pub fn index(self) -> usize {
        match self {
            Player::Clockwise => 0,
            Player::CounterClockwise => 1,
        }
    }

    /// +1 when moving towards point 23, -1 when moving towards point 0
    pub fn direction(self) -> isize {
        match self {
            Player::Clockwise => -1,
            Player::CounterClockwise => 1,
        }
    }

    /// The six points nearest this player's exit.
    pub fn home_board(self) -> RangeInclusive<usize> {
        match self {
            Player::Clockwise => 0..=5,
            Player::CounterClockwise => 18..=23,
        }
    }

    /// Distance a checker on `index` still has to travel to leave the board.
    pub fn pips_from(self, index: usize) -> u32 {
        match self {
            Player::Clockwise => index as u32 + 1,
            Player::CounterClockwise => 24 - index as u32,
        }
    }

    /// Single-character symbol used in turn text
    pub fn symbol(self) -> char {
        match self {
            Player::Clockwise => 'O',
            Player::CounterClockwise => 'X',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Player> {
        match symbol {
            'O' => Some(Player::Clockwise),
            'X' => Some(Player::CounterClockwise),
            _ => None,
        }
    }

    /// Address letter of this player's bar
    pub fn bar_letter(self) -> char {
        match self {
            Player::Clockwise => 'z',
            Player::CounterClockwise => 'y',
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Clockwise => "Clockwise",
            Player::CounterClockwise => "CounterClockwise",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
