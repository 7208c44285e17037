// SimulatorPawn
//
// Routes mouse/keyboard input either to the spectator camera or to one of
// the two simulated motion controllers, depending on the current mode.

use cgmath::{vec3, Vector3};
use tracing::{debug, info};

use crate::camera::CameraContext;
use crate::config::SimulatorConfig;
use crate::controller_state::ControllerState;
use crate::controller_visuals::{AssetResolver, ControllerAssets, ControllerVisual};
use crate::hand_events::{self, HandButton, HandEventListener};
use crate::input_context::{Hand, Head, InputContext};
use crate::simulation_mode::{Handedness, ModeCommand, SimulationMode};

/// Per-frame values the axis handlers need alongside the delta
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameInput {
    pub delta_seconds: f32,
    // Secondary mouse button held: hand input rotates instead of moving
    pub rotate_modifier: bool,
}

pub struct SimulatorPawn {
    config: SimulatorConfig,
    mode: SimulationMode,
    controllers: [ControllerState; 2],
    camera: CameraContext,
    listeners: Vec<Box<dyn HandEventListener>>,
}

impl SimulatorPawn {
    pub fn new(config: SimulatorConfig, resolver: &dyn AssetResolver) -> SimulatorPawn {
        let assets = ControllerAssets::load(resolver, &config);

        let controllers = [
            ControllerState::new(
                Handedness::Left,
                &config.left_controller,
                ControllerVisual::new(&assets),
            ),
            ControllerState::new(
                Handedness::Right,
                &config.right_controller,
                ControllerVisual::new(&assets),
            ),
        ];

        let initial_mode = config.initial_mode;
        let mut pawn = SimulatorPawn {
            config,
            mode: SimulationMode::Camera,
            controllers,
            camera: CameraContext::new(),
            listeners: Vec::new(),
        };
        pawn.input_mode(ModeCommand::Set(initial_mode));
        pawn
    }

    pub fn add_listener(&mut self, listener: Box<dyn HandEventListener>) {
        self.listeners.push(listener);
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn active_hand(&self) -> Option<Handedness> {
        self.mode.hand()
    }

    pub fn controller(&self, hand: Handedness) -> &ControllerState {
        &self.controllers[hand.index()]
    }

    pub fn camera(&self) -> &CameraContext {
        &self.camera
    }

    pub fn input_mode(&mut self, command: ModeCommand) {
        let new_mode = command.resolve(self.mode);

        let active = new_mode.hand();
        for controller in self.controllers.iter_mut() {
            let color = if active == Some(controller.handedness) {
                self.config.active_color
            } else {
                self.config.inactive_color
            };
            controller
                .visual
                .set_glow(&self.config.glow_parameter, color);
        }

        if new_mode != self.mode {
            info!("simulation mode: {:?} -> {:?}", self.mode, new_mode);
        }
        self.mode = new_mode;
    }

    pub fn input_x(&mut self, delta: f32, frame: &FrameInput) {
        if delta != 0.0 {
            self.input_xyz(vec3(delta, 0.0, 0.0), frame);
        }
    }

    pub fn input_y(&mut self, delta: f32, frame: &FrameInput) {
        if delta != 0.0 {
            self.input_xyz(vec3(0.0, delta, 0.0), frame);
        }
    }

    pub fn input_z(&mut self, delta: f32, frame: &FrameInput) {
        if delta != 0.0 {
            self.input_xyz(vec3(0.0, 0.0, delta), frame);
        }
    }

    pub fn input_xyz(&mut self, delta: Vector3<f32>, frame: &FrameInput) {
        let rate = self.config.camera_rotation_rate * frame.delta_seconds;
        let translate_scale = self.config.translate_scale;
        let rotate_scale = self.config.rotate_scale;
        let max_pitch = self.config.max_camera_pitch;

        match self.mode.hand() {
            None => {
                if delta.x != 0.0 {
                    self.camera.add_yaw(delta.x * rate);
                }
                if delta.y != 0.0 {
                    self.camera.add_pitch(-delta.y * rate, max_pitch);
                }
            }
            Some(hand) => {
                let controller = &mut self.controllers[hand.index()];
                if frame.rotate_modifier {
                    controller.rotate(vec3(delta.z, -delta.y, delta.x), rotate_scale);
                } else {
                    controller.translate(delta, translate_scale);
                }
            }
        }
    }

    pub fn move_forward(&mut self, delta: f32, frame: &FrameInput) {
        if self.mode == SimulationMode::Camera {
            let forward = self.camera.forward();
            self.move_camera(forward, delta, frame);
        }
    }

    pub fn move_right(&mut self, delta: f32, frame: &FrameInput) {
        if self.mode == SimulationMode::Camera {
            let right = self.camera.right();
            self.move_camera(right, delta, frame);
        }
    }

    fn move_camera(&mut self, direction: Vector3<f32>, delta: f32, frame: &FrameInput) {
        if delta == 0.0 {
            return;
        }
        let amount = delta * frame.delta_seconds * self.config.camera_movement_speed;
        self.camera.translate(direction, amount);
        debug!("camera position: {:?}", self.camera.position);
    }

    pub fn input_button(&mut self, button: HandButton, pressed: bool) {
        // Buttons only belong to a hand
        let Some(hand) = self.mode.hand() else {
            return;
        };

        self.controllers[hand.index()].buttons.set(button, pressed);
        for listener in self.listeners.iter_mut() {
            hand_events::notify(listener.as_mut(), hand, button, pressed);
        }
    }

    pub fn input_trigger(&mut self, pressed: bool) {
        self.input_button(HandButton::Trigger, pressed);
    }

    pub fn input_grip(&mut self, pressed: bool) {
        self.input_button(HandButton::Grip, pressed);
    }

    pub fn input_menu(&mut self, pressed: bool) {
        self.input_button(HandButton::Menu, pressed);
    }

    fn hand_context(&self, hand: Handedness) -> Hand {
        let controller = self.controller(hand);
        Hand {
            position: controller.relative_position,
            rotation: controller.relative_rotation,
            buttons: controller.buttons,
            is_active: self.active_hand() == Some(hand),
            glow_color: controller.visual.glow(&self.config.glow_parameter),
        }
    }

    pub fn input_context(&self) -> InputContext {
        InputContext {
            head: Head {
                position: self.camera.position,
                rotation: self.camera.rotation(),
            },
            left_hand: self.hand_context(Handedness::Left),
            right_hand: self.hand_context(Handedness::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CYAN, RED};
    use crate::controller_visuals::InMemoryAssets;
    use crate::coordinates::to_cartesian;
    use crate::hand_events::tests::RecordingListener;
    use cgmath::InnerSpace;

    const FRAME: FrameInput = FrameInput {
        delta_seconds: 0.5,
        rotate_modifier: false,
    };

    const ROTATE_FRAME: FrameInput = FrameInput {
        delta_seconds: 0.5,
        rotate_modifier: true,
    };

    fn pawn() -> SimulatorPawn {
        let config = SimulatorConfig::default();
        let resolver = InMemoryAssets::with_controller_assets(&config);
        SimulatorPawn::new(config, &resolver)
    }

    fn assert_close(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < 1e-4,
            "Vectors are not close enough: {:?} vs {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_starts_in_camera_mode_with_both_inactive() {
        let pawn = pawn();

        assert_eq!(pawn.mode(), SimulationMode::Camera);
        assert_eq!(pawn.active_hand(), None);
        let context = pawn.input_context();
        assert_eq!(context.left_hand.glow_color, Some(CYAN));
        assert_eq!(context.right_hand.glow_color, Some(CYAN));
        assert!(!context.left_hand.is_active);
    }

    #[test]
    fn test_mode_switch_highlights_active_hand() {
        let mut pawn = pawn();

        pawn.input_mode(ModeCommand::Set(SimulationMode::RightHand));
        let context = pawn.input_context();
        assert_eq!(context.right_hand.glow_color, Some(RED));
        assert_eq!(context.left_hand.glow_color, Some(CYAN));
        assert!(context.right_hand.is_active);

        pawn.input_mode(ModeCommand::Set(SimulationMode::LeftHand));
        let context = pawn.input_context();
        assert_eq!(context.left_hand.glow_color, Some(RED));
        assert_eq!(context.right_hand.glow_color, Some(CYAN));

        pawn.input_mode(ModeCommand::Set(SimulationMode::Camera));
        let context = pawn.input_context();
        assert_eq!(context.left_hand.glow_color, Some(CYAN));
        assert_eq!(context.right_hand.glow_color, Some(CYAN));
    }

    #[test]
    fn test_cycle_from_camera() {
        let mut pawn = pawn();

        pawn.input_mode(ModeCommand::CycleNext);
        assert_eq!(pawn.mode(), SimulationMode::LeftHand);
        pawn.input_mode(ModeCommand::CycleNext);
        assert_eq!(pawn.mode(), SimulationMode::RightHand);
        pawn.input_mode(ModeCommand::CycleNext);
        assert_eq!(pawn.mode(), SimulationMode::Camera);
    }

    #[test]
    fn test_camera_mode_rotates_camera() {
        let mut pawn = pawn();
        let left_before = pawn.controller(Handedness::Left).relative_position;

        pawn.input_x(2.0, &FRAME);
        pawn.input_y(1.0, &FRAME);
        pawn.input_z(3.0, &FRAME);

        // 45 deg/s * 0.5s per unit
        assert_eq!(pawn.camera().yaw, 45.0);
        assert_eq!(pawn.camera().pitch, -22.5);
        assert_eq!(pawn.controller(Handedness::Left).relative_position, left_before);
    }

    #[test]
    fn test_camera_movement_only_in_camera_mode() {
        let mut pawn = pawn();

        pawn.move_forward(1.0, &FRAME);
        pawn.move_right(-1.0, &FRAME);
        // 20 units/s * 0.5s, along +X then along -right (+Y)
        assert_close(pawn.camera().position, vec3(10.0, 10.0, 0.0));

        pawn.input_mode(ModeCommand::Set(SimulationMode::LeftHand));
        pawn.move_forward(1.0, &FRAME);
        assert_close(pawn.camera().position, vec3(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_translate_active_hand_only() {
        let mut pawn = pawn();
        pawn.input_mode(ModeCommand::Set(SimulationMode::RightHand));
        let left_before = pawn.controller(Handedness::Left).accumulated_position;
        let right_before = pawn.controller(Handedness::Right).accumulated_position;

        pawn.input_xyz(vec3(10.0, -5.0, 2.0), &FRAME);

        let right = pawn.controller(Handedness::Right);
        assert_close(
            right.accumulated_position,
            right_before + vec3(0.1, -0.05, 2.0),
        );
        assert_close(right.relative_position, to_cartesian(right.accumulated_position));
        assert_eq!(pawn.controller(Handedness::Left).accumulated_position, left_before);
        assert_eq!(pawn.camera(), &CameraContext::new());
    }

    #[test]
    fn test_rotate_modifier_remaps_axes() {
        let mut pawn = pawn();
        pawn.input_mode(ModeCommand::Set(SimulationMode::LeftHand));
        let position_before = pawn.controller(Handedness::Left).relative_position;

        pawn.input_xyz(vec3(1.0, 2.0, 3.0), &ROTATE_FRAME);

        let left = pawn.controller(Handedness::Left);
        assert_eq!(left.accumulated_rotation, vec3(3.0, -2.0, 2.0));
        assert_eq!(left.relative_position, position_before);
    }

    #[test]
    fn test_buttons_ignored_in_camera_mode() {
        let mut pawn = pawn();
        let (listener, events) = RecordingListener::new();
        pawn.add_listener(Box::new(listener));

        pawn.input_trigger(true);
        pawn.input_grip(true);
        pawn.input_menu(false);

        assert!(events.borrow().is_empty());
        assert!(!pawn.input_context().left_hand.buttons.trigger);
    }

    #[test]
    fn test_buttons_route_to_active_hand() {
        let mut pawn = pawn();
        let (listener, events) = RecordingListener::new();
        pawn.add_listener(Box::new(listener));

        pawn.input_mode(ModeCommand::Set(SimulationMode::LeftHand));
        pawn.input_trigger(true);
        pawn.input_mode(ModeCommand::Set(SimulationMode::RightHand));
        pawn.input_grip(true);
        pawn.input_grip(false);
        pawn.input_menu(true);

        assert_eq!(
            *events.borrow(),
            vec![
                (Handedness::Left, HandButton::Trigger, true),
                (Handedness::Right, HandButton::Grip, true),
                (Handedness::Right, HandButton::Grip, false),
                (Handedness::Right, HandButton::Menu, true),
            ]
        );
        let context = pawn.input_context();
        assert!(context.left_hand.buttons.trigger);
        assert!(!context.right_hand.buttons.grip);
        assert!(context.right_hand.buttons.menu);
    }

    #[test]
    fn test_left_hand_scenario() {
        // Given a pawn in camera mode
        let mut pawn = pawn();
        assert_eq!(pawn.mode(), SimulationMode::Camera);
        let start = pawn.controller(Handedness::Left).accumulated_position;

        // When switching to the left hand and moving the mouse right
        pawn.input_mode(ModeCommand::Set(SimulationMode::LeftHand));
        assert!(pawn.input_context().left_hand.is_active);
        pawn.input_x(10.0, &FRAME);

        // Then azimuth grows by 0.1 and the position follows
        let left = pawn.controller(Handedness::Left);
        assert!((left.accumulated_position.x - (start.x + 0.1)).abs() < 1e-5);
        assert_eq!(left.accumulated_position.y, start.y);
        assert_eq!(left.accumulated_position.z, start.z);
        assert_close(left.relative_position, to_cartesian(left.accumulated_position));
        assert_close(pawn.input_context().left_hand.position, left.relative_position);
    }

    #[test]
    fn test_missing_assets_still_simulates() {
        let mut pawn = SimulatorPawn::new(SimulatorConfig::default(), &InMemoryAssets::default());

        pawn.input_mode(ModeCommand::Set(SimulationMode::LeftHand));
        pawn.input_x(10.0, &FRAME);

        let context = pawn.input_context();
        assert_eq!(context.left_hand.glow_color, None);
        assert!(!pawn.controller(Handedness::Left).visual.is_visible());
        assert!(context.left_hand.is_active);
    }

    #[test]
    fn test_initial_mode_from_config() {
        let config = SimulatorConfig {
            initial_mode: SimulationMode::RightHand,
            ..SimulatorConfig::default()
        };
        let resolver = InMemoryAssets::with_controller_assets(&config);

        let pawn = SimulatorPawn::new(config, &resolver);

        assert_eq!(pawn.active_hand(), Some(Handedness::Right));
        assert_eq!(pawn.input_context().right_hand.glow_color, Some(RED));
    }
}
