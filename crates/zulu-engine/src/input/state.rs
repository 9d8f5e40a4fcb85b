use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current input state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Modifiers as last reported by the platform.
    pub modifiers: Modifiers,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                if !*f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        let inserted = self.keys_down.insert(*key);
                        // Held navigation keys keep stepping through zones.
                        if inserted || *repeat {
                            frame.keys_pressed.push(*key);
                        }
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::ArrowRight, KeyState::Pressed, false));
        assert!(state.keys_down.contains(&Key::ArrowRight));
        assert_eq!(frame.keys_pressed, vec![Key::ArrowRight]);

        state.apply_event(&mut frame, key(Key::ArrowRight, KeyState::Released, false));
        assert!(state.keys_down.is_empty());
        assert_eq!(frame.keys_pressed, vec![Key::ArrowRight]);
    }

    #[test]
    fn auto_repeat_counts_as_another_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::ArrowDown, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::ArrowDown, KeyState::Pressed, true));
        assert_eq!(frame.keys_pressed, vec![Key::ArrowDown, Key::ArrowDown]);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Shift, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn clear_drops_frame_deltas() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Home, KeyState::Pressed, false));
        frame.clear();
        assert!(frame.keys_pressed.is_empty());
        assert!(state.keys_down.contains(&Key::Home));
    }
}
