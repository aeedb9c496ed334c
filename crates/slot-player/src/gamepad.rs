//! Gamepad polling through gilrs.
//!
//! Missing gamepad support is not fatal: the cabinet keeps running and simply
//! never sees a pad.

use gilrs::{Button, EventType, Gilrs};
use slot_core::{Result, SlotError};

/// What the cabinet cares about from the pad backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadEvent {
    Connected(usize),
    Disconnected(usize),
    SpinPressed(usize),
}

/// Resolve a configured button name
pub fn parse_button(name: &str) -> Result<Button> {
    let button = match name {
        "South" => Button::South,
        "East" => Button::East,
        "North" => Button::North,
        "West" => Button::West,
        "LeftTrigger" => Button::LeftTrigger,
        "LeftTrigger2" => Button::LeftTrigger2,
        "RightTrigger" => Button::RightTrigger,
        "RightTrigger2" => Button::RightTrigger2,
        "Select" => Button::Select,
        "Start" => Button::Start,
        "Mode" => Button::Mode,
        other => {
            return Err(SlotError::InvalidConfig {
                field: "input.spin_button".into(),
                reason: format!("unknown button '{other}'"),
            })
        }
    };
    Ok(button)
}

pub struct Gamepads {
    gilrs: Option<Gilrs>,
    spin_button: Button,
}

impl Gamepads {
    pub fn new(spin_button: Button) -> Self {
        let gilrs = Gilrs::new()
            .map_err(|e| log::warn!("Gamepads unavailable ({e}), input disabled"))
            .ok();
        Self { gilrs, spin_button }
    }

    /// Pads already plugged in at startup
    pub fn connected(&self) -> Vec<usize> {
        match &self.gilrs {
            Some(gilrs) => gilrs.gamepads().map(|(id, _)| usize::from(id)).collect(),
            None => Vec::new(),
        }
    }

    /// Drain backend events since the last call
    pub fn poll(&mut self) -> Vec<PadEvent> {
        let Some(gilrs) = &mut self.gilrs else {
            return Vec::new();
        };

        let mut events = Vec::new();
        while let Some(event) = gilrs.next_event() {
            let id = usize::from(event.id);
            match event.event {
                EventType::Connected => events.push(PadEvent::Connected(id)),
                EventType::Disconnected => events.push(PadEvent::Disconnected(id)),
                EventType::ButtonPressed(button, _) if button == self.spin_button => {
                    events.push(PadEvent::SpinPressed(id))
                }
                _ => {}
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_buttons() {
        assert_eq!(parse_button("South").unwrap(), Button::South);
        assert_eq!(parse_button("Start").unwrap(), Button::Start);
    }

    #[test]
    fn rejects_unknown_button() {
        let err = parse_button("Turbo").unwrap_err();
        assert!(err.to_string().contains("input.spin_button"));
    }
}
