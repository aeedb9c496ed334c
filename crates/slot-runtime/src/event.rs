//! Side effects produced by a frame

/// Something the audio and presentation layers react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotEvent {
    /// A wager was taken and the reels were started
    SpinStarted { cost: i64 },
    /// A reel came to rest on new symbols
    ReelSettled { reel: usize },
    /// A settled board paid out
    Win { rows: Vec<usize>, payout: i64 },
    /// The game-over latch was set
    GameOver { score: i64 },
    /// Score and cost were restored after the game-over display
    Reset,
    GamepadConnected(usize),
    GamepadDisconnected(usize),
}
