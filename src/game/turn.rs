use std::collections::BTreeMap;
use std::str::FromStr;

use super::moves::{Address, Move};
use super::Player;
use crate::error::ParseTurnError;

pub const MAX_MOVES_PER_TURN: u32 = 4;
const DELIMITER: char = ';';

/// Everything one player moves with a single roll, as a multiset of moves.
///
/// Moves are kept in a sorted map so iteration, equality and the text form are
/// independent of the order in which the moves were played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Turn {
    player: Player,
    moves: BTreeMap<Move, u8>,
}

impl Turn {
    /// Create an empty turn
    pub fn new(player: Player) -> Self {
        Turn {
            player,
            moves: BTreeMap::new(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Record one more play of `mv`. The count saturates; such a turn is
    /// already invalid.
    pub fn update(&mut self, mv: Move) {
        let count = self.moves.entry(mv).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Repetitions of a given move
    pub fn count_of(&self, mv: &Move) -> u8 {
        self.moves.get(mv).copied().unwrap_or(0)
    }

    /// Number of atomic moves, counting repetitions.
    pub fn move_count(&self) -> u32 {
        self.moves.values().map(|&n| n as u32).sum()
    }

    pub fn total_distance(&self) -> u32 {
        self.moves
            .iter()
            .map(|(mv, &n)| mv.distance as u32 * n as u32)
            .sum()
    }

    /// Moves in canonical order, repeated per their count.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves
            .iter()
            .flat_map(|(mv, &n)| std::iter::repeat(*mv).take(n as usize))
    }

    pub fn is_valid(&self) -> bool {
        self.moves
            .keys()
            .all(|mv| mv.is_valid() && mv.requestor == self.player)
            && self.move_count() <= MAX_MOVES_PER_TURN
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.player.symbol())?;
        for mv in self.moves() {
            write!(f, "{DELIMITER}{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Turn {
    type Err = ParseTurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTurnError::Empty);
        }
        let mut tokens = s.split(DELIMITER);

        let symbol = tokens.next().unwrap_or_default().trim();
        let mut symbol_chars = symbol.chars();
        let player = match (symbol_chars.next(), symbol_chars.next()) {
            (Some(c), None) => Player::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| ParseTurnError::UnknownPlayer(symbol.to_string()))?;

        let mut turn = Turn::new(player);
        for token in tokens {
            let token = token.trim();
            let mut chars = token.chars();
            let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
                (Some(letter), Some(digit), None) => (letter, digit),
                _ => return Err(ParseTurnError::MalformedToken(token.to_string())),
            };
            let source =
                Address::from_letter(letter).ok_or(ParseTurnError::UnknownSource(letter))?;
            let distance = digit
                .to_digit(10)
                .filter(|d| (1..=6).contains(d))
                .ok_or(ParseTurnError::BadDistance(digit))? as u8;
            if turn.move_count() >= MAX_MOVES_PER_TURN {
                return Err(ParseTurnError::TooManyMoves {
                    max: MAX_MOVES_PER_TURN,
                });
            }
            turn.update(Move::new(player, source, distance));
        }
        Ok(turn)
    }
}
