//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::translate_window_event` converts window events into `InputEvent`s.
//!
//! The clock only needs keyboard navigation, so pointer input is not tracked.

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
