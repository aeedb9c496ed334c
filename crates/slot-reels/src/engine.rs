//! The three reels and the symbol source that re-rolls them

use crate::phase::{PhaseKind, ReelPhase};
use slot_core::{Grid, Millis, Reel, SymbolSource, TimingConfig, REEL_COUNT};

/// One column: its motion state and the symbols it shows
#[derive(Debug, Clone, Copy)]
struct ReelState {
    phase: ReelPhase,
    symbols: Reel,
}

/// Drives every reel's phase each tick and owns the board.
///
/// Symbols change in exactly two places: when a reel settles from Stopping to
/// Idle, and on `reset_all`.
pub struct ReelEngine<S: SymbolSource> {
    reels: [ReelState; REEL_COUNT],
    source: S,
}

impl<S: SymbolSource> ReelEngine<S> {
    /// All reels idle, showing a freshly drawn board
    pub fn new(mut source: S) -> Self {
        let grid = source.roll_grid();
        Self {
            reels: grid.map(|symbols| ReelState {
                phase: ReelPhase::Idle,
                symbols,
            }),
            source,
        }
    }

    /// Start one reel. Returns false for an unknown index or a reel that is
    /// still moving.
    pub fn start_spin(&mut self, reel: usize, start_delay: Millis, now: Millis) -> bool {
        let Some(state) = self.reels.get_mut(reel) else {
            return false;
        };
        if !state.phase.is_idle() {
            return false;
        }
        state.phase = ReelPhase::spin(now, start_delay);
        true
    }

    /// Start every reel, each one `start_stagger_ms` after the one to its left
    pub fn start_all(&mut self, now: Millis, timing: &TimingConfig) {
        for column in 0..REEL_COUNT {
            self.start_spin(column, column as Millis * timing.start_stagger_ms, now);
        }
    }

    /// Advance every reel one frame. Returns the columns that settled this tick,
    /// already re-rolled.
    pub fn tick(&mut self, now: Millis, timing: &TimingConfig) -> Vec<usize> {
        let mut settled = Vec::new();
        for (column, state) in self.reels.iter_mut().enumerate() {
            let was_moving = !state.phase.is_idle();
            state.phase = state.phase.step(column, now, timing);
            if was_moving && state.phase.is_idle() {
                state.symbols = self.source.roll_reel();
                log::debug!("Reel {column} settled on {:?}", state.symbols);
                settled.push(column);
            }
        }
        settled
    }

    /// Every reel idle, every reel re-rolled
    pub fn reset_all(&mut self) {
        for state in &mut self.reels {
            state.phase = ReelPhase::Idle;
            state.symbols = self.source.roll_reel();
        }
    }

    pub fn all_idle(&self) -> bool {
        self.reels.iter().all(|r| r.phase.is_idle())
    }

    pub fn phase(&self, reel: usize) -> PhaseKind {
        self.reels[reel].phase.kind()
    }

    pub fn speed(&self, reel: usize) -> f32 {
        self.reels[reel].phase.speed()
    }

    pub fn symbols(&self, reel: usize) -> Reel {
        self.reels[reel].symbols
    }

    /// The board as `grid[column][row]`
    pub fn grid(&self) -> Grid {
        self.reels.map(|r| r.symbols)
    }

    /// Current visual displacement of a reel, in pixels
    pub fn offset(&self, reel: usize, now: Millis, timing: &TimingConfig, screen_height: f32) -> f32 {
        self.reels[reel]
            .phase
            .offset(now, timing.spin_duration_ms, screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slot_core::{RandomSymbols, Symbol};

    /// Cycles through a fixed list of symbols
    struct Scripted {
        symbols: Vec<Symbol>,
        next: usize,
    }

    impl SymbolSource for Scripted {
        fn draw(&mut self) -> Symbol {
            let s = self.symbols[self.next % self.symbols.len()];
            self.next += 1;
            s
        }
    }

    fn timing() -> TimingConfig {
        TimingConfig::default()
    }

    /// Tick at 60Hz-ish steps until every reel is idle; returns the finish time
    fn run_until_idle<S: SymbolSource>(engine: &mut ReelEngine<S>, mut now: Millis) -> Millis {
        let t = timing();
        for _ in 0..100_000 {
            now += 16;
            engine.tick(now, &t);
            if engine.all_idle() {
                return now;
            }
        }
        panic!("reels never settled");
    }

    #[test]
    fn starts_idle_with_drawn_board() {
        let engine = ReelEngine::new(Scripted {
            symbols: vec![Symbol::Seven],
            next: 0,
        });
        assert!(engine.all_idle());
        assert_eq!(engine.grid(), [[Symbol::Seven; 3]; 3]);
    }

    #[test]
    fn start_spin_rejects_moving_or_unknown_reel() {
        let mut engine = ReelEngine::new(RandomSymbols::seeded(1));
        assert!(engine.start_spin(0, 0, 0));
        assert!(!engine.start_spin(0, 0, 10));
        assert!(!engine.start_spin(7, 0, 0));
        assert_eq!(engine.phase(0), PhaseKind::Spinning);
        assert_eq!(engine.phase(1), PhaseKind::Idle);
    }

    #[test]
    fn symbols_only_change_on_settle() {
        let mut script = vec![Symbol::Seven; 9];
        script.extend([Symbol::Bars; 3]);
        let mut engine = ReelEngine::new(Scripted {
            symbols: script,
            next: 0,
        });
        let t = timing();
        let before = engine.grid();
        engine.start_all(0, &t);

        let mut now = 0;
        while !engine.all_idle() {
            now += 16;
            engine.tick(now, &t);
            for column in 0..REEL_COUNT {
                if engine.phase(column) != PhaseKind::Idle {
                    assert_eq!(engine.symbols(column), before[column]);
                }
            }
        }
        // first reel to settle drew the three Bars
        assert_eq!(engine.symbols(0), [Symbol::Bars; 3]);
    }

    #[test]
    fn reels_stop_left_to_right() {
        let mut engine = ReelEngine::new(RandomSymbols::seeded(3));
        let t = timing();
        engine.start_all(0, &t);

        let mut order = Vec::new();
        let mut now = 0;
        while !engine.all_idle() {
            now += 16;
            order.extend(engine.tick(now, &t));
        }
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn speed_zero_iff_idle_every_tick() {
        let mut engine = ReelEngine::new(RandomSymbols::seeded(9));
        let t = timing();
        let mut now = 0;
        for spin in 0..5 {
            engine.start_all(now, &t);
            loop {
                now += 16;
                engine.tick(now, &t);
                for column in 0..REEL_COUNT {
                    let idle = engine.phase(column) == PhaseKind::Idle;
                    assert_eq!(engine.speed(column) == 0.0, idle, "spin {spin} reel {column}");
                }
                if engine.all_idle() {
                    break;
                }
            }
        }
    }

    #[test]
    fn staggered_start_holds_offset_at_zero() {
        let mut engine = ReelEngine::new(RandomSymbols::seeded(5));
        let t = timing();
        engine.start_all(1000, &t);
        // reel 2 starts at 1000 + 2 × 150
        assert_eq!(engine.offset(2, 1200, &t, 600.0), 0.0);
        assert!(engine.offset(0, 1200, &t, 600.0) > 0.0);
    }

    #[test]
    fn reset_idles_and_rerolls() {
        let mut engine = ReelEngine::new(Scripted {
            symbols: vec![Symbol::Cherries],
            next: 0,
        });
        let t = timing();
        engine.start_all(0, &t);
        engine.tick(16, &t);
        assert!(!engine.all_idle());

        engine.reset_all();
        assert!(engine.all_idle());
        for column in 0..REEL_COUNT {
            assert_eq!(engine.speed(column), 0.0);
        }
    }

    #[test]
    fn settles_within_bounded_time() {
        let mut engine = ReelEngine::new(RandomSymbols::seeded(11));
        let t = timing();
        engine.start_all(0, &t);
        let done = run_until_idle(&mut engine, 0);
        // spin + two stop delays + braking from max speed at 16ms/tick
        let braking = (t.max_spin_speed / t.deceleration) as Millis * 16;
        assert!(done <= t.spin_duration_ms + 2 * t.stop_delay_ms + 2 * t.start_stagger_ms + braking + 64);
    }
}
