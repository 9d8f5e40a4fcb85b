use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::{FrameCtx, InputCtx, TickCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callback order for one window:
/// - `on_window_event` for every raw event
/// - `on_input` after keyboard/focus events were folded into the input state
/// - `on_tick` each time the runtime ticker fires; a redraw is requested afterwards
/// - `on_frame` for every redraw (ticks, resizes, expose)
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called when new input deltas are available.
    fn on_input(&mut self, ctx: &mut InputCtx<'_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called once per ticker firing.
    fn on_tick(&mut self, ctx: &mut TickCtx<'_>) -> AppControl;

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
