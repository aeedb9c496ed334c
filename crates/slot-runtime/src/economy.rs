//! Score, spin cost and the game-over latch

use slot_core::{EconomyConfig, Millis, WinningRows};

/// Wager state of the cabinet.
///
/// `game_over` is a latch: once set it stays set until `reset`, whatever the
/// score does in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: i64,
    pub spin_cost: i64,
    pub winning_rows: WinningRows,
    pub game_over: bool,
    pub game_over_at: Option<Millis>,
    /// Banner text shown over the reels
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            score: config.initial_score,
            spin_cost: config.base_spin_cost,
            winning_rows: WinningRows::new(),
            game_over: false,
            game_over_at: None,
            message: None,
        }
    }

    pub fn can_afford(&self) -> bool {
        self.score >= self.spin_cost
    }

    /// Take the wager and clear the previous result. Returns false if the
    /// debit drove the score negative, in which case the game is over.
    pub fn debit_spin(&mut self, now: Millis) -> bool {
        self.score -= self.spin_cost;
        self.winning_rows.clear();
        self.message = None;
        if self.score < 0 {
            self.end_game(now);
            return false;
        }
        true
    }

    /// Pay out a winning board: every row earns `score_per_win`, and the spin
    /// cost doubles once per winning settle. Returns the payout.
    pub fn credit_win(&mut self, rows: WinningRows, config: &EconomyConfig) -> i64 {
        if rows.is_empty() {
            return 0;
        }
        let payout = rows.len() as i64 * config.score_per_win;
        self.score += payout;
        self.spin_cost = self.spin_cost.saturating_mul(2);
        self.winning_rows = rows;
        self.message = Some("You win!".to_string());
        payout
    }

    /// Latch game over when the player can no longer play.
    /// Returns true only on the frame the latch is first set.
    pub fn check_game_over(&mut self, now: Millis) -> bool {
        if self.game_over {
            return false;
        }
        if self.score <= 0 || self.spin_cost > self.score {
            self.end_game(now);
            return true;
        }
        false
    }

    /// Whether the game-over display has run its full duration
    pub fn reset_due(&self, now: Millis, display_ms: Millis) -> bool {
        match (self.game_over, self.game_over_at) {
            (true, Some(at)) => now >= at.saturating_add(display_ms),
            _ => false,
        }
    }

    /// Back to the opening values
    pub fn reset(&mut self, config: &EconomyConfig) {
        *self = Self::new(config);
    }

    fn end_game(&mut self, now: Millis) {
        if !self.game_over {
            self.game_over = true;
            self.game_over_at = Some(now);
        }
    }
}
