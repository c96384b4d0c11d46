use std::collections::BTreeMap;

use super::{Board, Player, Roll, Turn};

/// Legal turns, sorted by their canonical text.
pub type LegalTurns = Vec<Turn>;

/// Exhaustive search for every turn a player may play with a roll.
///
/// Each branch of the search works on its own copy of the board and its own
/// copy of the turn built so far. Turns reaching the same multiset of moves in
/// different orders are recorded once. Only turns that use the largest total
/// number of pips found anywhere in the search are kept.
pub struct TurnGenerator {
    board: Board,
    roll: Roll,
    player: Player,
}

impl TurnGenerator {
    pub fn new(board: Board, roll: Roll, player: Player) -> Self {
        TurnGenerator {
            board,
            roll,
            player,
        }
    }

    /// All maximal turns. Empty when the player cannot move at all.
    pub fn generate(&self) -> LegalTurns {
        self.generate_with_boards().into_keys().collect()
    }

    /// All maximal turns together with the board each one leads to.
    pub fn generate_with_boards(&self) -> BTreeMap<Turn, Board> {
        let mut found = BTreeMap::new();
        self.search(
            &self.board,
            &self.roll.distances(),
            &Turn::new(self.player),
            &mut found,
        );

        let best = found.keys().map(Turn::total_distance).max().unwrap_or(0);
        found.retain(|turn, _| turn.total_distance() == best);

        log::trace!(
            "{} with {}: {} maximal turns of {} pips",
            self.player,
            self.roll,
            found.len(),
            best
        );
        found
    }

    fn search(
        &self,
        board: &Board,
        remaining: &[u8],
        turn: &Turn,
        found: &mut BTreeMap<Turn, Board>,
    ) {
        for (i, &distance) in remaining.iter().enumerate() {
            // Equal dice lead to identical subtrees
            if remaining[..i].contains(&distance) {
                continue;
            }
            let mut rest = remaining.to_vec();
            rest.remove(i);

            for mv in board.legal_moves(self.player, distance) {
                let mut next_board = *board;
                next_board.execute_move_unchecked(&mv);

                let mut next_turn = turn.clone();
                next_turn.update(mv);

                if next_turn.is_valid() && !found.contains_key(&next_turn) {
                    found.insert(next_turn.clone(), next_board);
                }
                self.search(&next_board, &rest, &next_turn, found);
            }
        }
    }
}
