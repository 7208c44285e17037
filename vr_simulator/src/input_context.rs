// Input context is the simulated VR input the pawn produces each frame.
// It mirrors what a headset runtime would report: a head pose and two motion
// controllers, so gameplay code can read it the same way it reads real
// hardware.

use cgmath::{Quaternion, Vector3};

use crate::controller_state::ButtonStates;

#[derive(Clone, Debug)]
pub struct InputContext {
    // Spectator camera pose
    pub head: Head,

    // Controller poses, relative to the pawn root
    pub left_hand: Hand,
    pub right_hand: Hand,
}

#[derive(Clone, Debug)]
pub struct Head {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

// Context for an individual simulated motion controller
#[derive(Clone, Debug)]
pub struct Hand {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub buttons: ButtonStates,
    pub is_active: bool,
    pub glow_color: Option<Vector3<f32>>,
}
