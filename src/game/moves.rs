use std::cmp::Ordering;

use super::board::NUM_POINTS;
use super::Player;

/// Where a checker starts a move from: one of the 24 points or a player's bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Point(u8),
    Bar(Player),
}

impl Address {
    /// Every address in letter order: points `a`..`x`, then `y` and `z`.
    pub fn all() -> impl Iterator<Item = Address> {
        (0..NUM_POINTS as u8)
            .map(Address::Point)
            .chain([
                Address::Bar(Player::CounterClockwise),
                Address::Bar(Player::Clockwise),
            ])
    }

    pub fn letter(self) -> char {
        match self {
            Address::Point(index) => (b'a' + index) as char,
            Address::Bar(player) => player.bar_letter(),
        }
    }

    pub fn from_letter(letter: char) -> Option<Address> {
        match letter {
            'a'..='x' => Some(Address::Point(letter as u8 - b'a')),
            'y' => Some(Address::Bar(Player::CounterClockwise)),
            'z' => Some(Address::Bar(Player::Clockwise)),
            _ => None,
        }
    }

    pub fn is_known(self) -> bool {
        match self {
            Address::Point(index) => (index as usize) < NUM_POINTS,
            Address::Bar(_) => true,
        }
    }
}

// Letter order: points a..x, then y, then z.
impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.letter().cmp(&other.letter())
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single checker movement of `distance` pips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub requestor: Player,
    pub source: Address,
    pub distance: u8,
}

impl Move {
    pub fn new(requestor: Player, source: Address, distance: u8) -> Self {
        Move {
            requestor,
            source,
            distance,
        }
    }

    pub fn from_point(requestor: Player, index: usize, distance: u8) -> Self {
        Move::new(requestor, Address::Point(index as u8), distance)
    }

    pub fn from_bar(requestor: Player, distance: u8) -> Self {
        Move::new(requestor, Address::Bar(requestor), distance)
    }

    /// Source is a real address and the distance is a die face.
    pub fn is_valid(&self) -> bool {
        self.source.is_known() && (1..=6).contains(&self.distance)
    }

    pub fn is_from_bar(&self) -> bool {
        matches!(self.source, Address::Bar(_))
    }

    /// Index of the source point.
    ///
    /// # Panics
    ///
    /// Panics when the move starts from a bar.
    pub fn point_index(&self) -> usize {
        match self.source {
            Address::Point(index) => index as usize,
            Address::Bar(_) => panic!("point_index called on bar move {self:?}"),
        }
    }

    /// Destination index and whether it lies on the board. An out-of-range
    /// destination means the checker would be borne off.
    pub fn next_point_index(&self) -> (isize, bool) {
        let distance = self.distance as isize;
        let destination = match self.source {
            Address::Bar(_) => match self.requestor {
                Player::CounterClockwise => distance - 1,
                Player::Clockwise => NUM_POINTS as isize - distance,
            },
            Address::Point(index) => index as isize + self.requestor.direction() * distance,
        };
        (
            destination,
            (0..NUM_POINTS as isize).contains(&destination),
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.source.letter(), self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_roundtrip() {
        for address in Address::all() {
            assert_eq!(Address::from_letter(address.letter()), Some(address));
        }
        assert_eq!(Address::all().count(), 26);
        assert_eq!(Address::from_letter('A'), None);
    }

    #[test]
    fn test_address_orders_by_letter() {
        let letters: Vec<char> = Address::all().map(Address::letter).collect();
        let mut sorted = letters.clone();
        sorted.sort();
        assert_eq!(letters, sorted);
        assert!(Address::Point(23) < Address::Bar(Player::CounterClockwise));
        assert!(Address::Bar(Player::CounterClockwise) < Address::Bar(Player::Clockwise));
    }

    #[test]
    fn test_validity() {
        assert!(Move::from_point(Player::Clockwise, 5, 6).is_valid());
        assert!(!Move::from_point(Player::Clockwise, 5, 0).is_valid());
        assert!(!Move::from_point(Player::Clockwise, 5, 7).is_valid());
        assert!(!Move::new(Player::Clockwise, Address::Point(24), 3).is_valid());
        assert!(Move::from_bar(Player::CounterClockwise, 1).is_valid());
    }

    #[test]
    fn test_next_point_from_points() {
        assert_eq!(
            Move::from_point(Player::CounterClockwise, 0, 4).next_point_index(),
            (4, true)
        );
        assert_eq!(
            Move::from_point(Player::Clockwise, 12, 5).next_point_index(),
            (7, true)
        );
        assert_eq!(
            Move::from_point(Player::CounterClockwise, 20, 6).next_point_index(),
            (26, false)
        );
        assert_eq!(
            Move::from_point(Player::Clockwise, 2, 3).next_point_index(),
            (-1, false)
        );
    }

    #[test]
    fn test_next_point_from_bar() {
        assert_eq!(
            Move::from_bar(Player::CounterClockwise, 1).next_point_index(),
            (0, true)
        );
        assert_eq!(
            Move::from_bar(Player::CounterClockwise, 6).next_point_index(),
            (5, true)
        );
        assert_eq!(
            Move::from_bar(Player::Clockwise, 1).next_point_index(),
            (23, true)
        );
        assert_eq!(
            Move::from_bar(Player::Clockwise, 6).next_point_index(),
            (18, true)
        );
    }

    #[test]
    fn test_point_index() {
        assert_eq!(Move::from_point(Player::Clockwise, 9, 2).point_index(), 9);
        assert!(Move::from_bar(Player::Clockwise, 2).is_from_bar());
    }

    #[test]
    #[should_panic(expected = "point_index called on bar move")]
    fn test_point_index_on_bar_move_panics() {
        Move::from_bar(Player::Clockwise, 2).point_index();
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::from_point(Player::CounterClockwise, 0, 4).to_string(), "a4");
        assert_eq!(Move::from_bar(Player::Clockwise, 3).to_string(), "z3");
    }
}
