//! Spin trigger gating.
//!
//! A physical press can show up on several consecutive frames, so accepted
//! triggers are spaced by a cooldown. Triggers from a gamepad that is not
//! connected are dropped; with no pad at all the cabinet simply ignores input.

use slot_core::{InputConfig, Millis};
use std::collections::BTreeSet;
use std::fmt;

/// Where a spin trigger came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// A gamepad, by backend id
    Gamepad(usize),
    Keyboard,
}

/// Game conditions a trigger must satisfy, sampled by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinGate {
    pub all_idle: bool,
    pub game_over: bool,
    pub can_afford: bool,
}

/// Why a trigger or spin request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejection {
    /// The source is not a live input device
    NoDevice,
    /// Inside the cooldown window of the last accepted trigger
    Cooldown,
    ReelsMoving,
    GameOver,
    InsufficientScore,
}

impl fmt::Display for SpinRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SpinRejection::NoDevice => "no input device",
            SpinRejection::Cooldown => "input cooldown",
            SpinRejection::ReelsMoving => "reels still moving",
            SpinRejection::GameOver => "game over",
            SpinRejection::InsufficientScore => "score below spin cost",
        };
        f.write_str(reason)
    }
}

impl SpinGate {
    /// First failing precondition, if any
    pub fn check(&self) -> Result<(), SpinRejection> {
        if !self.all_idle {
            return Err(SpinRejection::ReelsMoving);
        }
        if self.game_over {
            return Err(SpinRejection::GameOver);
        }
        if !self.can_afford {
            return Err(SpinRejection::InsufficientScore);
        }
        Ok(())
    }
}

/// Debounces the spin trigger and tracks connected pads
pub struct InputController {
    cooldown_ms: Millis,
    keyboard_enabled: bool,
    last_accepted: Option<Millis>,
    gamepads: BTreeSet<usize>,
}

impl InputController {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            cooldown_ms: config.cooldown_ms,
            keyboard_enabled: config.keyboard_spin,
            last_accepted: None,
            gamepads: BTreeSet::new(),
        }
    }

    /// Register a pad. Returns false if it was already known.
    pub fn connect(&mut self, gamepad: usize) -> bool {
        self.gamepads.insert(gamepad)
    }

    /// Forget a pad. Returns false if it was not connected.
    pub fn disconnect(&mut self, gamepad: usize) -> bool {
        self.gamepads.remove(&gamepad)
    }

    pub fn connected_gamepads(&self) -> usize {
        self.gamepads.len()
    }

    /// Whether any source could currently deliver a trigger
    pub fn has_input(&self) -> bool {
        self.keyboard_enabled || !self.gamepads.is_empty()
    }

    fn is_live(&self, source: InputSource) -> bool {
        match source {
            InputSource::Gamepad(id) => self.gamepads.contains(&id),
            InputSource::Keyboard => self.keyboard_enabled,
        }
    }

    /// Accept or refuse a trigger. Only an accepted trigger moves the cooldown window.
    pub fn on_trigger(
        &mut self,
        source: InputSource,
        now: Millis,
        gate: SpinGate,
    ) -> Result<(), SpinRejection> {
        if !self.is_live(source) {
            return Err(SpinRejection::NoDevice);
        }
        if let Some(last) = self.last_accepted {
            if now.saturating_sub(last) <= self.cooldown_ms {
                return Err(SpinRejection::Cooldown);
            }
        }
        gate.check()?;

        self.last_accepted = Some(now);
        Ok(())
    }

    pub fn last_accepted(&self) -> Option<Millis> {
        self.last_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: SpinGate = SpinGate {
        all_idle: true,
        game_over: false,
        can_afford: true,
    };

    fn controller() -> InputController {
        let mut input = InputController::new(&InputConfig::default());
        input.connect(0);
        input
    }

    #[test]
    fn first_trigger_is_accepted() {
        let mut input = controller();
        assert_eq!(input.on_trigger(InputSource::Gamepad(0), 5, OPEN), Ok(()));
        assert_eq!(input.last_accepted(), Some(5));
    }

    #[test]
    fn triggers_inside_cooldown_are_dropped() {
        let mut input = controller();
        let mut accepted = 0;
        for now in [1000, 1016, 1100, 1200] {
            if input.on_trigger(InputSource::Gamepad(0), now, OPEN).is_ok() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
        assert_eq!(
            input.on_trigger(InputSource::Gamepad(0), 1200, OPEN),
            Err(SpinRejection::Cooldown)
        );
        assert_eq!(input.on_trigger(InputSource::Gamepad(0), 1201, OPEN), Ok(()));
    }

    #[test]
    fn rejected_trigger_does_not_move_window() {
        let mut input = controller();
        let busy = SpinGate {
            all_idle: false,
            ..OPEN
        };
        assert_eq!(
            input.on_trigger(InputSource::Gamepad(0), 100, busy),
            Err(SpinRejection::ReelsMoving)
        );
        assert_eq!(input.last_accepted(), None);
        assert_eq!(input.on_trigger(InputSource::Gamepad(0), 150, OPEN), Ok(()));
    }

    #[test]
    fn gate_preconditions() {
        let mut input = controller();
        let over = SpinGate {
            game_over: true,
            ..OPEN
        };
        let broke = SpinGate {
            can_afford: false,
            ..OPEN
        };
        assert_eq!(
            input.on_trigger(InputSource::Gamepad(0), 0, over),
            Err(SpinRejection::GameOver)
        );
        assert_eq!(
            input.on_trigger(InputSource::Gamepad(0), 0, broke),
            Err(SpinRejection::InsufficientScore)
        );
    }

    #[test]
    fn disconnected_pad_is_ignored_until_reconnect() {
        let mut input = controller();
        assert!(input.disconnect(0));
        assert!(!input.disconnect(0));
        assert_eq!(
            input.on_trigger(InputSource::Gamepad(0), 10, OPEN),
            Err(SpinRejection::NoDevice)
        );

        assert!(input.connect(0));
        assert_eq!(input.on_trigger(InputSource::Gamepad(0), 20, OPEN), Ok(()));
    }

    #[test]
    fn keyboard_follows_config() {
        let mut config = InputConfig::default();
        config.keyboard_spin = false;
        let mut input = InputController::new(&config);
        assert!(!input.has_input());
        assert_eq!(
            input.on_trigger(InputSource::Keyboard, 0, OPEN),
            Err(SpinRejection::NoDevice)
        );

        let mut input = InputController::new(&InputConfig::default());
        assert!(input.has_input());
        assert_eq!(input.on_trigger(InputSource::Keyboard, 0, OPEN), Ok(()));
    }
}
