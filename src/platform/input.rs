//! Keyboard input collection
//!
//! winit delivers key transitions one at a time; the game wants a drained
//! queue of discrete events plus a snapshot of the arrows held right now.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use super::InputSource;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Restart,
}

impl Key {
    /// Map a physical key. Unbound keys return `None`.
    pub fn from_physical(key: PhysicalKey) -> Option<Self> {
        match key {
            PhysicalKey::Code(KeyCode::ArrowLeft) => Some(Key::Left),
            PhysicalKey::Code(KeyCode::ArrowRight) => Some(Key::Right),
            PhysicalKey::Code(KeyCode::KeyR) => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close button
    CloseRequested,
    /// Key went down (auto-repeat excluded)
    KeyDown(Key),
}

/// Snapshot of held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Event queue and held-key tracker fed by the window event loop
#[derive(Debug, Default)]
pub struct KeyboardInput {
    events: Vec<InputEvent>,
    held: HeldKeys,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_close(&mut self) {
        self.events.push(InputEvent::CloseRequested);
    }

    /// Record a key transition from the window
    pub fn handle_key(&mut self, physical: PhysicalKey, state: ElementState, repeat: bool) {
        let Some(key) = Key::from_physical(physical) else {
            return;
        };
        let pressed = state == ElementState::Pressed;

        match key {
            Key::Left => self.held.left = pressed,
            Key::Right => self.held.right = pressed,
            Key::Restart => {}
        }

        if pressed && !repeat {
            self.events.push(InputEvent::KeyDown(key));
        }
    }

    /// Forget held keys (focus lost, key-up events will never arrive)
    pub fn release_all(&mut self) {
        self.held = HeldKeys::default();
    }
}

impl InputSource for KeyboardInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(code: KeyCode) -> PhysicalKey {
        PhysicalKey::Code(code)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_physical(code(KeyCode::ArrowLeft)), Some(Key::Left));
        assert_eq!(Key::from_physical(code(KeyCode::ArrowRight)), Some(Key::Right));
        assert_eq!(Key::from_physical(code(KeyCode::KeyR)), Some(Key::Restart));
        assert_eq!(Key::from_physical(code(KeyCode::Space)), None);
        assert_eq!(Key::from_physical(code(KeyCode::KeyA)), None);
    }

    #[test]
    fn test_held_keys_follow_press_and_release() {
        let mut input = KeyboardInput::new();
        input.handle_key(code(KeyCode::ArrowLeft), ElementState::Pressed, false);
        input.handle_key(code(KeyCode::ArrowRight), ElementState::Pressed, false);
        assert_eq!(
            input.held_keys(),
            HeldKeys {
                left: true,
                right: true
            }
        );

        input.handle_key(code(KeyCode::ArrowLeft), ElementState::Released, false);
        assert_eq!(
            input.held_keys(),
            HeldKeys {
                left: false,
                right: true
            }
        );

        input.release_all();
        assert_eq!(input.held_keys(), HeldKeys::default());
    }

    #[test]
    fn test_drain_returns_events_in_order_once() {
        let mut input = KeyboardInput::new();
        input.handle_key(code(KeyCode::KeyR), ElementState::Pressed, false);
        input.push_close();
        input.handle_key(code(KeyCode::ArrowRight), ElementState::Pressed, false);

        assert_eq!(
            input.drain_events(),
            vec![
                InputEvent::KeyDown(Key::Restart),
                InputEvent::CloseRequested,
                InputEvent::KeyDown(Key::Right),
            ]
        );
        assert!(input.drain_events().is_empty());
    }

    #[test]
    fn test_repeats_and_releases_are_not_key_down_events() {
        let mut input = KeyboardInput::new();
        input.handle_key(code(KeyCode::KeyR), ElementState::Pressed, true);
        input.handle_key(code(KeyCode::KeyR), ElementState::Released, false);
        input.handle_key(code(KeyCode::Escape), ElementState::Pressed, false);
        assert!(input.drain_events().is_empty());
    }
}
