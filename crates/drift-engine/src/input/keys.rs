use serde::{Deserialize, Serialize};

/// Keys the sandbox reacts to, named after DOM `KeyboardEvent.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    KeyA,
    KeyC,
    KeyD,
    KeyQ,
    KeyS,
    KeyV,
    KeyW,
    Digit1,
    Digit2,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
}

impl Key {
    /// Parse a `KeyboardEvent.code` string. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "Space" => Key::Space,
            "KeyA" => Key::KeyA,
            "KeyC" => Key::KeyC,
            "KeyD" => Key::KeyD,
            "KeyQ" => Key::KeyQ,
            "KeyS" => Key::KeyS,
            "KeyV" => Key::KeyV,
            "KeyW" => Key::KeyW,
            "Digit1" => Key::Digit1,
            "Digit2" => Key::Digit2,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "NumpadAdd" => Key::NumpadAdd,
            "NumpadSubtract" => Key::NumpadSubtract,
            "NumpadMultiply" => Key::NumpadMultiply,
            "NumpadDivide" => Key::NumpadDivide,
            _ => return None,
        };
        Some(key)
    }
}

/// Mouse buttons, indexed like DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Anything that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Key(Key),
    Button(MouseButton),
}

impl From<Key> for Control {
    fn from(key: Key) -> Self {
        Control::Key(key)
    }
}

impl From<MouseButton> for Control {
    fn from(button: MouseButton) -> Self {
        Control::Button(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_codes() {
        assert_eq!(Key::from_code("Space"), Some(Key::Space));
        assert_eq!(Key::from_code("NumpadDivide"), Some(Key::NumpadDivide));
        assert_eq!(Key::from_code("F13"), None);
    }

    #[test]
    fn button_indices() {
        assert_eq!(MouseButton::from_index(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::Middle.index(), 1);
        assert!(MouseButton::from_index(7).is_none());
    }
}
