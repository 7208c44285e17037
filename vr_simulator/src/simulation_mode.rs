use serde::{Deserialize, Serialize};

/// Which virtual hand a controller record belongs to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub const ALL: [Handedness; 2] = [Handedness::Left, Handedness::Right];

    pub fn index(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }
}

// The discriminants define the cycling order
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimulationMode {
    LeftHand = 0,
    RightHand = 1,
    #[default]
    Camera = 2,
}

impl SimulationMode {
    const COUNT: u8 = 3;

    pub fn from_ordinal(ordinal: u8) -> SimulationMode {
        match ordinal % Self::COUNT {
            0 => SimulationMode::LeftHand,
            1 => SimulationMode::RightHand,
            _ => SimulationMode::Camera,
        }
    }

    pub fn next(self) -> SimulationMode {
        SimulationMode::from_ordinal(self as u8 + 1)
    }

    /// The hand driven by this mode, or None for the camera
    pub fn hand(self) -> Option<Handedness> {
        match self {
            SimulationMode::LeftHand => Some(Handedness::Left),
            SimulationMode::RightHand => Some(Handedness::Right),
            SimulationMode::Camera => None,
        }
    }
}

/// A mode switch request. `CycleNext` is resolved against the current mode
/// and is never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeCommand {
    Set(SimulationMode),
    CycleNext,
}

impl ModeCommand {
    pub fn resolve(self, current: SimulationMode) -> SimulationMode {
        match self {
            ModeCommand::Set(mode) => mode,
            ModeCommand::CycleNext => current.next(),
        }
    }
}
