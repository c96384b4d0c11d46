use std::collections::VecDeque;

use crate::game::{GameOutcome, Player};

/// Result of a single game.
#[derive(Debug, Clone, Copy)]
pub struct GameResult {
    pub outcome: Option<GameOutcome>,
    pub game_length: usize,
}

/// Match statistics with rolling window computations.
pub struct MatchMetrics {
    results: VecDeque<GameResult>,
    capacity: usize,
    total_games: usize, // lifetime count, never capped
    points: [u32; 2],
    wins: [usize; 2],
    unfinished: usize,
}

impl MatchMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchMetrics {
            results: VecDeque::with_capacity(capacity),
            capacity,
            total_games: 0,
            points: [0; 2],
            wins: [0; 2],
            unfinished: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_game(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome {
            Some(outcome) => {
                self.wins[outcome.winner.index()] += 1;
                self.points[outcome.winner.index()] += outcome.kind.points();
            }
            None => self.unfinished += 1,
        }
        self.results.push_back(result);
        if self.results.len() > self.capacity {
            self.results.pop_front();
        }
    }

    /// Win rate for `player` in the last N games.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let wins = self
            .results
            .iter()
            .rev()
            .take(n)
            .filter(|r| r.outcome.map(|o| o.winner) == Some(player))
            .count();
        wins as f32 / n as f32
    }

    /// Average game length (plies) over the last N games.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    /// Lifetime wins of `player`
    pub fn wins(&self, player: Player) -> usize {
        self.wins[player.index()]
    }

    /// Lifetime points of `player`, counting gammons and backgammons
    pub fn points(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    pub fn unfinished(&self) -> usize {
        self.unfinished
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WinKind;

    fn won(winner: Player, kind: WinKind, game_length: usize) -> GameResult {
        GameResult {
            outcome: Some(GameOutcome { winner, kind }),
            game_length,
        }
    }

    #[test]
    fn test_win_rate() {
        let mut m = MatchMetrics::new();
        for _ in 0..7 {
            m.record_game(won(Player::CounterClockwise, WinKind::Single, 10));
        }
        for _ in 0..3 {
            m.record_game(won(Player::Clockwise, WinKind::Single, 10));
        }
        assert!((m.win_rate(Player::CounterClockwise, 10) - 0.7).abs() < 1e-6);
        assert!((m.win_rate(Player::Clockwise, 10) - 0.3).abs() < 1e-6);
        // only the last three
        assert!((m.win_rate(Player::Clockwise, 3) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_points_count_gammons() {
        let mut m = MatchMetrics::new();
        m.record_game(won(Player::Clockwise, WinKind::Gammon, 40));
        m.record_game(won(Player::Clockwise, WinKind::Backgammon, 40));
        m.record_game(won(Player::CounterClockwise, WinKind::Single, 40));
        assert_eq!(m.points(Player::Clockwise), 5);
        assert_eq!(m.points(Player::CounterClockwise), 1);
        assert_eq!(m.wins(Player::Clockwise), 2);
    }

    #[test]
    fn test_unfinished_games() {
        let mut m = MatchMetrics::new();
        m.record_game(GameResult {
            outcome: None,
            game_length: 500,
        });
        assert_eq!(m.unfinished(), 1);
        assert_eq!(m.win_rate(Player::Clockwise, 10), 0.0);
    }

    #[test]
    fn test_average_game_length() {
        let mut m = MatchMetrics::new();
        m.record_game(won(Player::Clockwise, WinKind::Single, 20));
        m.record_game(won(Player::Clockwise, WinKind::Single, 30));
        assert!((m.average_game_length(10) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_window_is_capped_but_totals_are_not() {
        let mut m = MatchMetrics::with_capacity(2);
        m.record_game(won(Player::Clockwise, WinKind::Single, 10));
        m.record_game(won(Player::CounterClockwise, WinKind::Single, 10));
        m.record_game(won(Player::CounterClockwise, WinKind::Single, 10));
        assert_eq!(m.total_games(), 3);
        assert_eq!(m.wins(Player::Clockwise), 1);
        assert!((m.win_rate(Player::Clockwise, 10) - 0.0).abs() < 1e-6);
    }
}
