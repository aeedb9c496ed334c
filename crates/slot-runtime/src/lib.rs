//! Slot Runtime - Game loop infrastructure
//!
//! Provides the per-frame building blocks of the cabinet:
//! - `GameClock` - fixed-timestep accumulator and the monotonic frame time
//! - `InputController` - debounced, gated spin trigger with device tracking
//! - `GameState` - score, spin cost, winning rows and the game-over latch
//! - `SlotEvent` / `EventBus` - side-effect queue drained by audio and presentation
//! - `SlotMachine` - the single owned aggregate that runs one frame in fixed order

mod clock;
mod economy;
mod event;
mod event_bus;
mod input;
mod machine;

pub use clock::GameClock;
pub use economy::GameState;
pub use event::SlotEvent;
pub use event_bus::EventBus;
pub use input::{InputController, InputSource, SpinGate, SpinRejection};
pub use machine::{MachinePhase, SlotMachine};
