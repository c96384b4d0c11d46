use super::moves::{Address, Move};
use super::Player;

pub const NUM_POINTS: usize = 24;
pub const CHECKERS_PER_PLAYER: u8 = 15;
/// Pip value of a checker waiting on the bar
pub const BAR_PIPS: u32 = 25;

/// A stack of checkers belonging to at most one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardPoint {
    owner: Option<Player>,
    count: u8,
}

impl BoardPoint {
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// A single checker, open to being hit
    pub fn is_blot(&self) -> bool {
        self.count == 1
    }
}

/// Pip counts of both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipCounts {
    pub clockwise: u32,
    pub counter_clockwise: u32,
}

impl PipCounts {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Clockwise => self.clockwise,
            Player::CounterClockwise => self.counter_clockwise,
        }
    }
}

/// Board position. A plain value: copying it gives an independent board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [BoardPoint; NUM_POINTS],
    bar: [u8; 2],
    off: [u8; 2],
}

impl Board {
    /// Create a board with no checkers anywhere
    pub fn empty() -> Self {
        Board {
            points: [BoardPoint::default(); NUM_POINTS],
            bar: [0; 2],
            off: [0; 2],
        }
    }

    /// Standard opening layout
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (index, count) in [(0, 2), (11, 5), (16, 3), (18, 5)] {
            board.set_point(index, Player::CounterClockwise, count);
        }
        for (index, count) in [(23, 2), (12, 5), (7, 3), (5, 5)] {
            board.set_point(index, Player::Clockwise, count);
        }
        board
    }

    pub fn point(&self, index: usize) -> BoardPoint {
        self.points[index]
    }

    pub fn bar_count(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn off_count(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// Put `count` checkers of `player` on a point, replacing whatever was there.
    pub fn set_point(&mut self, index: usize, player: Player, count: u8) {
        self.points[index] = BoardPoint {
            owner: (count > 0).then_some(player),
            count,
        };
    }

    pub fn clear_point(&mut self, index: usize) {
        self.points[index] = BoardPoint::default();
    }

    pub fn set_bar(&mut self, player: Player, count: u8) {
        self.bar[player.index()] = count;
    }

    pub fn set_off(&mut self, player: Player, count: u8) {
        self.off[player.index()] = count;
    }

    /// Checkers of `player` on the points, bar and off the board combined.
    pub fn checker_count(&self, player: Player) -> u32 {
        let on_points: u32 = self
            .points
            .iter()
            .filter(|p| p.is_owned_by(player))
            .map(|p| p.count as u32)
            .sum();
        on_points + self.bar_count(player) as u32 + self.off_count(player) as u32
    }

    /// True when no checker of `player` stands on a point outside its home board.
    pub fn all_home(&self, player: Player) -> bool {
        let home = player.home_board();
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_owned_by(player))
            .all(|(index, _)| home.contains(&index))
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        if !mv.is_valid() {
            return false;
        }
        let player = mv.requestor;

        // Checkers on the bar must come in first
        if self.bar_count(player) > 0 && !mv.is_from_bar() {
            return false;
        }

        match mv.source {
            Address::Bar(owner) => {
                if owner != player || self.bar_count(player) == 0 {
                    return false;
                }
            }
            Address::Point(index) => {
                let source = self.points[index as usize];
                if !source.is_owned_by(player) || source.count == 0 {
                    return false;
                }
            }
        }

        let (destination, in_range) = mv.next_point_index();
        if !in_range {
            let past_own_exit = match player {
                Player::CounterClockwise => destination >= NUM_POINTS as isize,
                Player::Clockwise => destination < 0,
            };
            return past_own_exit && self.all_home(player);
        }

        let target = self.points[destination as usize];
        !(target.is_owned_by(player.other()) && target.count >= 2)
    }

    /// Every legal move of `player` using one die of `distance`.
    pub fn legal_moves(&self, player: Player, distance: u8) -> Vec<Move> {
        Address::all()
            .map(|source| Move::new(player, source, distance))
            .filter(|mv| self.is_legal_move(mv))
            .collect()
    }

    /// Execute the move if it is legal; returns whether the board changed.
    pub fn execute_move_if_legal(&mut self, mv: &Move) -> bool {
        if !self.is_legal_move(mv) {
            return false;
        }
        self.execute_move_unchecked(mv);
        true
    }

    /// Execute a move already known to be legal.
    ///
    /// # Panics
    ///
    /// Panics if the source holds no checker of the requestor or the move lands
    /// on a secured point.
    pub fn execute_move_unchecked(&mut self, mv: &Move) {
        let player = mv.requestor;

        match mv.source {
            Address::Bar(owner) => {
                let slot = &mut self.bar[owner.index()];
                assert!(*slot > 0, "no checker on the bar for {mv:?}");
                *slot -= 1;
            }
            Address::Point(index) => {
                let source = &mut self.points[index as usize];
                assert!(
                    source.is_owned_by(player) && source.count > 0,
                    "no checker to move for {mv:?}"
                );
                source.count -= 1;
                if source.count == 0 {
                    source.owner = None;
                }
            }
        }

        let (destination, in_range) = mv.next_point_index();
        if !in_range {
            self.off[player.index()] += 1;
            return;
        }

        let enemy = player.other();
        let target = &mut self.points[destination as usize];
        if target.is_owned_by(enemy) {
            assert_eq!(target.count, 1, "landed on a secured point with {mv:?}");
            target.count = 0;
            self.bar[enemy.index()] += 1;
        }
        target.owner = Some(player);
        target.count += 1;
    }

    pub fn pip_counts(&self) -> PipCounts {
        let pips = |player: Player| -> u32 {
            let on_points: u32 = self
                .points
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_owned_by(player))
                .map(|(index, p)| p.count as u32 * player.pips_from(index))
                .sum();
            on_points + self.bar_count(player) as u32 * BAR_PIPS
        };
        PipCounts {
            clockwise: pips(Player::Clockwise),
            counter_clockwise: pips(Player::CounterClockwise),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Player = Player::CounterClockwise;
    const O: Player = Player::Clockwise;

    /// X has five checkers left, all in its home board; O sits far away.
    fn bear_off_board() -> Board {
        let mut board = Board::empty();
        board.set_point(19, X, 3);
        board.set_point(20, X, 2);
        board.set_off(X, 10);
        board.set_point(0, O, 15);
        board
    }

    #[test]
    fn test_starting_position_conserves_checkers() {
        let board = Board::starting();
        for player in Player::ALL {
            assert_eq!(board.checker_count(player), CHECKERS_PER_PLAYER as u32);
            assert_eq!(board.bar_count(player), 0);
            assert_eq!(board.off_count(player), 0);
        }
        assert_eq!(board.point(0).owner(), Some(X));
        assert_eq!(board.point(5).count(), 5);
    }

    #[test]
    fn test_starting_pip_counts() {
        let pips = Board::starting().pip_counts();
        assert_eq!(pips.clockwise, 167);
        assert_eq!(pips.counter_clockwise, 167);
    }

    #[test]
    fn test_bar_pips() {
        let mut board = Board::starting();
        board.set_point(0, X, 1);
        board.set_bar(X, 1);
        assert_eq!(board.pip_counts().get(X), 167 - 24 + 25);
    }

    #[test]
    fn test_empty_point_is_not_a_source() {
        let board = Board::starting();
        assert!(!board.is_legal_move(&Move::from_point(X, 1, 3)));
    }

    #[test]
    fn test_enemy_point_is_not_a_source() {
        let board = Board::starting();
        assert!(!board.is_legal_move(&Move::from_point(X, 5, 1)));
        assert!(board.is_legal_move(&Move::from_point(O, 5, 1)));
    }

    #[test]
    fn test_secured_point_blocks() {
        let board = Board::starting();
        // a5 lands on O's five-stack
        assert!(!board.is_legal_move(&Move::from_point(X, 0, 5)));
        assert!(board.is_legal_move(&Move::from_point(X, 0, 4)));
    }

    #[test]
    fn test_hitting_a_blot() {
        let mut board = Board::starting();
        board.set_point(7, O, 2);
        board.set_point(4, O, 1);
        assert!(board.execute_move_if_legal(&Move::from_point(X, 0, 4)));
        assert_eq!(board.point(4).owner(), Some(X));
        assert_eq!(board.point(4).count(), 1);
        assert_eq!(board.bar_count(O), 1);
        assert_eq!(board.point(0).count(), 1);
        assert_eq!(board.checker_count(O), 15);
        assert_eq!(board.checker_count(X), 15);
    }

    #[test]
    fn test_source_owner_cleared_when_empty() {
        let mut board = Board::starting();
        board.execute_move_unchecked(&Move::from_point(X, 0, 3));
        board.execute_move_unchecked(&Move::from_point(X, 0, 3));
        assert_eq!(board.point(0).owner(), None);
        assert_eq!(board.point(3).count(), 2);
    }

    #[test]
    fn test_bar_must_be_cleared_first() {
        let mut board = Board::starting();
        board.set_point(0, X, 1);
        board.set_bar(X, 1);
        for distance in 1..=6 {
            for mv in board.legal_moves(X, distance) {
                assert!(mv.is_from_bar(), "{mv} is not a bar move");
            }
        }
        assert_eq!(board.legal_moves(X, 2), vec![Move::from_bar(X, 2)]);
        // entry on O's five-stack is blocked
        assert!(board.legal_moves(X, 6).is_empty());
    }

    #[test]
    fn test_only_own_bar_is_usable() {
        let mut board = Board::starting();
        board.set_point(23, O, 1);
        board.set_bar(O, 1);
        assert!(!board.is_legal_move(&Move::new(X, Address::Bar(O), 2)));
        assert!(board.is_legal_move(&Move::from_bar(O, 2)));
        assert!(!board.is_legal_move(&Move::from_bar(X, 2)));
    }

    #[test]
    fn test_bar_entry_hits() {
        let mut board = Board::starting();
        board.set_point(0, X, 1);
        board.set_bar(X, 1);
        board.set_point(2, O, 1);
        board.set_point(5, O, 4);
        assert!(board.execute_move_if_legal(&Move::from_bar(X, 3)));
        assert_eq!(board.bar_count(X), 0);
        assert_eq!(board.bar_count(O), 1);
        assert_eq!(board.point(2).owner(), Some(X));
    }

    #[test]
    fn test_bear_off_when_all_home() {
        let mut board = bear_off_board();
        // nothing on point 18, furthest-back checker is on 19
        let mv = Move::from_point(X, 19, 6);
        assert!(board.is_legal_move(&mv));
        assert!(board.execute_move_if_legal(&mv));
        assert_eq!(board.off_count(X), 11);
        assert_eq!(board.point(19).count(), 2);
        assert_eq!(board.checker_count(X), 15);
    }

    #[test]
    fn test_bear_off_blocked_by_straggler() {
        let mut board = bear_off_board();
        board.set_point(19, X, 2);
        board.set_point(10, X, 1);
        assert!(!board.is_legal_move(&Move::from_point(X, 19, 6)));
        assert!(board.is_legal_move(&Move::from_point(X, 10, 6)));
    }

    #[test]
    fn test_bear_off_clockwise() {
        let mut board = Board::empty();
        board.set_point(3, O, 1);
        board.set_off(O, 14);
        board.set_point(20, X, 15);
        assert!(board.is_legal_move(&Move::from_point(O, 3, 4)));
        assert!(board.is_legal_move(&Move::from_point(O, 3, 6)));
        assert!(board.is_legal_move(&Move::from_point(O, 3, 2)));
    }

    #[test]
    fn test_invalid_distance_is_illegal() {
        let board = Board::starting();
        assert!(!board.is_legal_move(&Move::from_point(X, 0, 0)));
        assert!(!board.is_legal_move(&Move::from_point(X, 0, 7)));
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::starting();
        let before = board;
        assert!(!board.execute_move_if_legal(&Move::from_point(X, 0, 5)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_copy_is_independent() {
        let board = Board::starting();
        let mut copy = board;
        copy.execute_move_unchecked(&Move::from_point(X, 0, 4));
        assert_eq!(board.point(0).count(), 2);
        assert_eq!(copy.point(0).count(), 1);
        assert_eq!(board, Board::starting());
    }

    #[test]
    #[should_panic(expected = "no checker to move")]
    fn test_unchecked_from_empty_point_panics() {
        let mut board = Board::starting();
        board.execute_move_unchecked(&Move::from_point(X, 1, 2));
    }

    #[test]
    #[should_panic(expected = "landed on a secured point")]
    fn test_unchecked_onto_secured_point_panics() {
        let mut board = Board::starting();
        board.execute_move_unchecked(&Move::from_point(X, 0, 5));
    }
}
