use crate::game::{Board, Player, CHECKERS_PER_PLAYER, NUM_POINTS};

/// Units describing one player's checkers on a single point.
const UNITS_PER_POINT: usize = 4;

/// Length of the vector produced by [`encode_board`].
pub const FEATURE_COUNT: usize = 2 * (NUM_POINTS * UNITS_PER_POINT + 2) + 2;

/// Encode a board as a flat feature vector (player-relative).
///
/// Layout, first for `player` then for the opponent:
/// - 4 units per point, walked from that side's farthest point towards its exit:
///   1.0 for one or more checkers, 1.0 for two or more, 1.0 for three or more,
///   and `(n - 3) / 2` above three
/// - bar checkers / 2
/// - borne-off checkers / 15
///
/// The last two entries flag which colour `player` is.
pub fn encode_board(board: &Board, player: Player) -> Vec<f32> {
    let mut data = Vec::with_capacity(FEATURE_COUNT);
    for side in [player, player.other()] {
        encode_side(board, side, &mut data);
    }
    data.push(if player == Player::CounterClockwise { 1.0 } else { 0.0 });
    data.push(if player == Player::Clockwise { 1.0 } else { 0.0 });
    data
}

fn encode_side(board: &Board, side: Player, data: &mut Vec<f32>) {
    for step in 0..NUM_POINTS {
        let index = match side {
            Player::CounterClockwise => step,
            Player::Clockwise => NUM_POINTS - 1 - step,
        };
        let point = board.point(index);
        let n = if point.is_owned_by(side) { point.count() } else { 0 };
        data.push(if n >= 1 { 1.0 } else { 0.0 });
        data.push(if n >= 2 { 1.0 } else { 0.0 });
        data.push(if n >= 3 { 1.0 } else { 0.0 });
        data.push(if n > 3 { (n - 3) as f32 / 2.0 } else { 0.0 });
    }
    data.push(board.bar_count(side) as f32 / 2.0);
    data.push(board.off_count(side) as f32 / CHECKERS_PER_PLAYER as f32);
}
