use rand::Rng;

use crate::error::RollError;

/// The two dice thrown at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    first: u8,
    second: u8,
}

impl Roll {
    pub fn new(first: u8, second: u8) -> Result<Self, RollError> {
        for die in [first, second] {
            if !(1..=6).contains(&die) {
                return Err(RollError::InvalidDie(die));
            }
        }
        Ok(Roll { first, second })
    }

    /// Throw both dice with the given random source.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Roll {
            first: rng.random_range(1..=6),
            second: rng.random_range(1..=6),
        }
    }

    pub fn dice(&self) -> (u8, u8) {
        (self.first, self.second)
    }

    pub fn is_doubles(&self) -> bool {
        self.first == self.second
    }

    /// Distances available to the turn: four of a kind on doubles.
    pub fn distances(&self) -> Vec<u8> {
        if self.is_doubles() {
            vec![self.first; 4]
        } else {
            vec![self.first, self.second]
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
