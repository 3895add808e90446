//! Keyboard input
//!
//! The host delivers raw key identifiers (`KeyboardEvent.key` in the browser).
//! Only the two horizontal arrows move the platform; everything else is
//! carried through as `Other` and ignored.

/// A key press the platform understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Other,
}

impl Key {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            _ => Key::Other,
        }
    }
}
