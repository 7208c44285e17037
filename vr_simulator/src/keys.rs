use serde::{Deserialize, Serialize};

/// Physical inputs the simulator binds. Names serialize the way they appear
/// in the input settings file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Tab,
    One,
    Two,
    Three,
    T,
    G,
    M,
    W,
    A,
    S,
    D,
    LeftMouseButton,
    RightMouseButton,
    MouseX,
    MouseY,
    MouseWheelAxis,
}

impl Key {
    pub const ALL: [Key; 16] = [
        Key::Tab,
        Key::One,
        Key::Two,
        Key::Three,
        Key::T,
        Key::G,
        Key::M,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::LeftMouseButton,
        Key::RightMouseButton,
        Key::MouseX,
        Key::MouseY,
        Key::MouseWheelAxis,
    ];

    /// Analog keys report a per-frame value instead of a held state
    pub fn is_analog(self) -> bool {
        matches!(self, Key::MouseX | Key::MouseY | Key::MouseWheelAxis)
    }

    pub fn name(self) -> &'static str {
        match self {
            Key::Tab => "Tab",
            Key::One => "One",
            Key::Two => "Two",
            Key::Three => "Three",
            Key::T => "T",
            Key::G => "G",
            Key::M => "M",
            Key::W => "W",
            Key::A => "A",
            Key::S => "S",
            Key::D => "D",
            Key::LeftMouseButton => "LeftMouseButton",
            Key::RightMouseButton => "RightMouseButton",
            Key::MouseX => "MouseX",
            Key::MouseY => "MouseY",
            Key::MouseWheelAxis => "MouseWheelAxis",
        }
    }

    /// None for keys the simulator does not handle
    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL.into_iter().find(|key| key.name() == name)
    }
}
