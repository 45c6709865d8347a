//! Keyboard and window events -> engine input events

use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use vega::{InputEvent, Key};

use super::PendingInput;

/// Drain this frame's key-downs (auto-repeat included) and close requests.
pub fn collect_input(
    mut keys: EventReader<KeyboardInput>,
    mut closes: EventReader<WindowCloseRequested>,
    mut pending: ResMut<PendingInput>,
) {
    for event in keys.read() {
        if event.state == ButtonState::Pressed {
            pending.0.push(InputEvent::KeyDown(map_key(event.key_code)));
        }
    }

    if closes.read().count() > 0 {
        pending.0.push(InputEvent::Quit);
    }
}

/// Map a physical key to an engine key.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Space => Key::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyCode::KeyW), Key::W);
        assert_eq!(map_key(KeyCode::KeyA), Key::A);
        assert_eq!(map_key(KeyCode::KeyS), Key::S);
        assert_eq!(map_key(KeyCode::KeyD), Key::D);
        assert_eq!(map_key(KeyCode::ArrowUp), Key::Up);
        assert_eq!(map_key(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(map_key(KeyCode::ArrowDown), Key::Down);
        assert_eq!(map_key(KeyCode::ArrowRight), Key::Right);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::Enter), Key::Enter);
        assert_eq!(map_key(KeyCode::NumpadEnter), Key::Enter);
        assert_eq!(map_key(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key(KeyCode::Space), Key::Space);
        assert_eq!(map_key(KeyCode::KeyQ), Key::Other);
    }
}
