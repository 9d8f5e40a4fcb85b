use super::types::Key;

/// Per-dispatch input deltas.
///
/// `InputState` holds what is currently pressed; `InputFrame` holds the key
/// presses since the app last consumed them.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed, including auto-repeat presses, in arrival order.
    pub keys_pressed: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }
}
