use cgmath::{Deg, ElementWise, Quaternion, Rotation3, Vector3};
use tracing::trace;

use crate::config::ControllerPose;
use crate::controller_visuals::ControllerVisual;
use crate::coordinates::{to_cartesian, to_polar};
use crate::hand_events::HandButton;
use crate::simulation_mode::Handedness;

/// rotation_from_euler
///
/// Builds an orientation from (roll, pitch, yaw) degrees, applied as yaw
/// about Z, then pitch about Y, then roll about X
pub fn rotation_from_euler(euler: Vector3<f32>) -> Quaternion<f32> {
    Quaternion::from_angle_z(Deg(euler.z))
        * Quaternion::from_angle_y(Deg(euler.y))
        * Quaternion::from_angle_x(Deg(euler.x))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonStates {
    pub trigger: bool,
    pub grip: bool,
    pub menu: bool,
}

impl ButtonStates {
    pub fn set(&mut self, button: HandButton, pressed: bool) {
        match button {
            HandButton::Trigger => self.trigger = pressed,
            HandButton::Grip => self.grip = pressed,
            HandButton::Menu => self.menu = pressed,
        }
    }
}

/// ControllerState
///
/// One simulated motion controller. Input is accumulated here and the
/// relative pose is recomputed from the totals on every update.
#[derive(Clone, Debug)]
pub struct ControllerState {
    pub handedness: Handedness,

    // (azimuth, elevation, radius)
    pub accumulated_position: Vector3<f32>,
    // (roll, pitch, yaw) in degrees
    pub accumulated_rotation: Vector3<f32>,

    pub relative_position: Vector3<f32>,
    pub relative_rotation: Quaternion<f32>,

    pub buttons: ButtonStates,
    pub visual: ControllerVisual,
}

impl ControllerState {
    pub fn new(
        handedness: Handedness,
        start: &ControllerPose,
        visual: ControllerVisual,
    ) -> ControllerState {
        ControllerState {
            handedness,
            accumulated_position: to_polar(start.position),
            accumulated_rotation: start.rotation,
            relative_position: start.position,
            relative_rotation: rotation_from_euler(start.rotation),
            buttons: ButtonStates::default(),
            visual,
        }
    }

    pub fn translate(&mut self, delta: Vector3<f32>, scale: Vector3<f32>) {
        self.accumulated_position += delta.mul_element_wise(scale);
        self.relative_position = to_cartesian(self.accumulated_position);
        trace!(
            "{:?} controller position: {:?}",
            self.handedness,
            self.relative_position
        );
    }

    /// `delta` is already in (roll, pitch, yaw) order
    pub fn rotate(&mut self, delta: Vector3<f32>, scale: Vector3<f32>) {
        self.accumulated_rotation += delta.mul_element_wise(scale);
        self.relative_rotation = rotation_from_euler(self.accumulated_rotation);
        trace!(
            "{:?} controller rotation: {:?}",
            self.handedness,
            self.accumulated_rotation
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller_visuals::{ControllerAssets, InMemoryAssets};
    use crate::config::SimulatorConfig;
    use cgmath::{vec3, InnerSpace, Rotation};

    fn controller(position: Vector3<f32>) -> ControllerState {
        let config = SimulatorConfig::default();
        let assets = ControllerAssets::load(&InMemoryAssets::default(), &config);
        ControllerState::new(
            Handedness::Left,
            &ControllerPose {
                position,
                rotation: vec3(0.0, 0.0, 0.0),
            },
            ControllerVisual::new(&assets),
        )
    }

    #[test]
    fn test_starts_from_pose() {
        let state = controller(vec3(0.0, 10.0, 0.0));

        assert!((state.accumulated_position - vec3(std::f32::consts::FRAC_PI_2, 0.0, 10.0)).magnitude() < 1e-5);
        assert_eq!(state.relative_position, vec3(0.0, 10.0, 0.0));
        assert_eq!(state.buttons, ButtonStates::default());
    }

    #[test]
    fn test_translate_accumulates_in_polar_space() {
        let scale = vec3(0.01, 0.01, 1.0);
        let mut twice = controller(vec3(10.0, 0.0, 0.0));
        let mut once = controller(vec3(10.0, 0.0, 0.0));

        twice.translate(vec3(1.0, 0.0, 0.0), scale);
        twice.translate(vec3(1.0, 0.0, 0.0), scale);
        once.translate(vec3(2.0, 0.0, 0.0), scale);

        assert!((twice.accumulated_position.x - once.accumulated_position.x).abs() < 1e-6);
        assert!((twice.accumulated_position.x - 0.02).abs() < 1e-6);
        assert!((twice.relative_position - once.relative_position).magnitude() < 1e-4);
    }

    #[test]
    fn test_translate_wheel_changes_radius() {
        let mut state = controller(vec3(10.0, 0.0, 0.0));

        state.translate(vec3(0.0, 0.0, 5.0), vec3(0.01, 0.01, 1.0));

        assert!((state.relative_position - vec3(15.0, 0.0, 0.0)).magnitude() < 1e-4);
    }

    #[test]
    fn test_rotate_yaw() {
        // Given a controller with no rotation
        let mut state = controller(vec3(10.0, 0.0, 0.0));

        // When yawing by 90 degrees
        state.rotate(vec3(0.0, 0.0, 45.0), vec3(1.0, 1.0, 2.0));

        // Then forward (X) now points along Y
        let forward = state.relative_rotation.rotate_vector(vec3(1.0, 0.0, 0.0));
        assert!((forward - vec3(0.0, 1.0, 0.0)).magnitude() < 1e-4);
        assert_eq!(state.accumulated_rotation, vec3(0.0, 0.0, 90.0));
    }

    #[test]
    fn test_rotation_accumulates_without_wrapping() {
        let mut state = controller(vec3(10.0, 0.0, 0.0));

        for _ in 0..5 {
            state.rotate(vec3(100.0, 0.0, 0.0), vec3(1.0, 1.0, 2.0));
        }

        assert_eq!(state.accumulated_rotation.x, 500.0);
    }

    #[test]
    fn test_button_states() {
        let mut buttons = ButtonStates::default();
        buttons.set(HandButton::Grip, true);
        assert!(buttons.grip);
        assert!(!buttons.trigger);
        buttons.set(HandButton::Grip, false);
        assert_eq!(buttons, ButtonStates::default());
    }
}
