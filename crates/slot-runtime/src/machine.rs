//! The cabinet: one owned aggregate, one frame at a time.
//!
//! Every mutation of reels and wager state goes through `frame` (or the
//! operations it calls), in a fixed order: input, animation, settle
//! evaluation, game-over check, reset check.

use crate::economy::GameState;
use crate::event::SlotEvent;
use crate::event_bus::EventBus;
use crate::input::{InputController, InputSource, SpinGate, SpinRejection};
use slot_core::{evaluate, GameConfig, Millis, RandomSymbols, SymbolSource};
use slot_reels::ReelEngine;
use std::sync::Arc;

/// Coarse state derived from the reel phases and the game-over latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachinePhase {
    /// All reels idle, waiting for a trigger
    Ready,
    /// At least one reel moving
    Spinning,
    /// Latched until the display timer expires
    GameOver,
}

pub struct SlotMachine<S: SymbolSource = RandomSymbols> {
    config: Arc<GameConfig>,
    reels: ReelEngine<S>,
    state: GameState,
    input: InputController,
    events: EventBus,
    /// A spin was started and its settle has not been evaluated yet
    awaiting_settle: bool,
}

impl<S: SymbolSource> SlotMachine<S> {
    pub fn new(config: Arc<GameConfig>, source: S) -> Self {
        Self {
            reels: ReelEngine::new(source),
            state: GameState::new(&config.economy),
            input: InputController::new(&config.input),
            events: EventBus::new(),
            awaiting_settle: false,
            config,
        }
    }

    /// Current preconditions for starting a spin
    pub fn gate(&self) -> SpinGate {
        SpinGate {
            all_idle: self.reels.all_idle(),
            game_over: self.state.game_over,
            can_afford: self.state.can_afford(),
        }
    }

    /// Run one frame
    pub fn frame(&mut self, now: Millis, triggers: &[InputSource]) {
        for &source in triggers {
            let gate = self.gate();
            match self.input.on_trigger(source, now, gate) {
                Ok(()) => {
                    if let Err(reason) = self.request_spin(now) {
                        log::debug!("Spin aborted: {reason}");
                    }
                }
                Err(reason) => log::debug!("Trigger from {source:?} ignored: {reason}"),
            }
        }

        for reel in self.reels.tick(now, &self.config.timing) {
            self.events.push(SlotEvent::ReelSettled { reel });
        }

        if self.awaiting_settle && self.reels.all_idle() {
            self.on_reels_settled(now);
        }

        if self.state.check_game_over(now) {
            log::info!("Game over at score {}", self.state.score);
            self.events.push(SlotEvent::GameOver {
                score: self.state.score,
            });
        }

        self.reset(now);
    }

    /// Take the wager and start the reels, staggered left to right
    pub fn request_spin(&mut self, now: Millis) -> Result<(), SpinRejection> {
        self.gate().check()?;

        let cost = self.state.spin_cost;
        if !self.state.debit_spin(now) {
            // unreachable while the gate holds; the reels stay put
            self.events.push(SlotEvent::GameOver {
                score: self.state.score,
            });
            return Err(SpinRejection::GameOver);
        }

        self.reels.start_all(now, &self.config.timing);
        self.awaiting_settle = true;
        self.events.push(SlotEvent::SpinStarted { cost });
        log::debug!("Spin started: cost {cost}, score now {}", self.state.score);
        Ok(())
    }

    /// Evaluate the board once after a spin comes to rest. Returns the payout,
    /// or `None` when there is no unevaluated settle.
    pub fn on_reels_settled(&mut self, now: Millis) -> Option<i64> {
        if !self.awaiting_settle || !self.reels.all_idle() {
            return None;
        }
        self.awaiting_settle = false;

        let rows = evaluate(&self.reels.grid());
        let payout = if rows.is_empty() {
            0
        } else {
            let row_list: Vec<usize> = rows.iter().copied().collect();
            let payout = self.state.credit_win(rows, &self.config.economy);
            log::info!(
                "Win on rows {row_list:?}: +{payout}, score {}, next spin costs {}",
                self.state.score,
                self.state.spin_cost
            );
            self.events.push(SlotEvent::Win {
                rows: row_list,
                payout,
            });
            payout
        };

        if self.state.spin_cost > self.state.score && self.state.check_game_over(now) {
            log::info!("Game over: spin cost {} exceeds score {}", self.state.spin_cost, self.state.score);
            self.events.push(SlotEvent::GameOver {
                score: self.state.score,
            });
        }
        Some(payout)
    }

    /// Restore the opening state once the game-over display has run.
    /// Returns true if a reset happened.
    pub fn reset(&mut self, now: Millis) -> bool {
        if !self
            .state
            .reset_due(now, self.config.timing.game_over_display_ms)
        {
            return false;
        }
        self.state.reset(&self.config.economy);
        self.reels.reset_all();
        self.awaiting_settle = false;
        self.events.push(SlotEvent::Reset);
        log::info!("Cabinet reset: score {}", self.state.score);
        true
    }

    pub fn connect_gamepad(&mut self, id: usize) {
        if self.input.connect(id) {
            log::info!("Gamepad {id} connected");
            self.events.push(SlotEvent::GamepadConnected(id));
        }
    }

    pub fn disconnect_gamepad(&mut self, id: usize) {
        if self.input.disconnect(id) {
            log::info!("Gamepad {id} disconnected");
            self.events.push(SlotEvent::GamepadDisconnected(id));
        }
    }

    pub fn phase(&self) -> MachinePhase {
        if self.state.game_over {
            MachinePhase::GameOver
        } else if self.reels.all_idle() {
            MachinePhase::Ready
        } else {
            MachinePhase::Spinning
        }
    }

    /// Visual offset of a reel at `now`, in pixels
    pub fn reel_offset(&self, reel: usize, now: Millis) -> f32 {
        self.reels.offset(
            reel,
            now,
            &self.config.timing,
            self.config.display.height as f32,
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn reels(&self) -> &ReelEngine<S> {
        &self.reels
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<SlotEvent> {
        self.events.drain()
    }
}
