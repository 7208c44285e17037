// PlayerInput
//
// Binds the logical actions and axes from the input settings to the pawn's
// handlers. Key edges are applied in arrival order, then every bound axis is
// evaluated once per frame.

use std::collections::{HashMap, HashSet};

use tracing::{trace, warn};

use crate::hand_events::HandButton;
use crate::input_mappings::{
    InputSettings, ACTION_CYCLE_MOVEMENT_MODE, ACTION_GRIP, ACTION_MENU,
    ACTION_MOVEMENT_MODE_CAMERA, ACTION_MOVEMENT_MODE_LEFT_HAND, ACTION_MOVEMENT_MODE_RIGHT_HAND,
    ACTION_TRIGGER, AXIS_FORWARD, AXIS_RIGHT, AXIS_X, AXIS_Y, AXIS_Z,
};
use crate::keys::Key;
use crate::simulation_mode::{ModeCommand, SimulationMode};
use crate::simulator_pawn::{FrameInput, SimulatorPawn};
use crate::time::Time;

// Holding this key turns hand translation into rotation
pub const ROTATE_MODIFIER_KEY: Key = Key::RightMouseButton;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawInputEvent {
    Pressed(Key),
    Released(Key),
    Axis(Key, f32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BoundAction {
    Mode(ModeCommand),
    Button(HandButton),
}

fn bound_action(name: &str) -> Option<BoundAction> {
    let action = match name {
        ACTION_CYCLE_MOVEMENT_MODE => BoundAction::Mode(ModeCommand::CycleNext),
        ACTION_MOVEMENT_MODE_CAMERA => BoundAction::Mode(ModeCommand::Set(SimulationMode::Camera)),
        ACTION_MOVEMENT_MODE_LEFT_HAND => {
            BoundAction::Mode(ModeCommand::Set(SimulationMode::LeftHand))
        }
        ACTION_MOVEMENT_MODE_RIGHT_HAND => {
            BoundAction::Mode(ModeCommand::Set(SimulationMode::RightHand))
        }
        ACTION_TRIGGER => BoundAction::Button(HandButton::Trigger),
        ACTION_GRIP => BoundAction::Button(HandButton::Grip),
        ACTION_MENU => BoundAction::Button(HandButton::Menu),
        _ => return None,
    };
    Some(action)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum BoundAxis {
    X,
    Y,
    Z,
    Forward,
    Right,
}

// Evaluation order within a frame
const AXIS_ORDER: [BoundAxis; 5] = [
    BoundAxis::X,
    BoundAxis::Y,
    BoundAxis::Z,
    BoundAxis::Forward,
    BoundAxis::Right,
];

fn bound_axis(name: &str) -> Option<BoundAxis> {
    match name {
        AXIS_X => Some(BoundAxis::X),
        AXIS_Y => Some(BoundAxis::Y),
        AXIS_Z => Some(BoundAxis::Z),
        AXIS_FORWARD => Some(BoundAxis::Forward),
        AXIS_RIGHT => Some(BoundAxis::Right),
        _ => None,
    }
}

pub struct PlayerInput {
    key_actions: HashMap<Key, Vec<BoundAction>>,
    axis_keys: HashMap<BoundAxis, Vec<(Key, f32)>>,

    held_keys: HashSet<Key>,
    analog_values: HashMap<Key, f32>,
}

impl PlayerInput {
    pub fn from_settings(settings: &dyn InputSettings) -> PlayerInput {
        let mut key_actions: HashMap<Key, Vec<BoundAction>> = HashMap::new();
        for mapping in settings.action_mappings() {
            let Some(action) = bound_action(&mapping.action_name) else {
                trace!("ignoring unrelated action {}", mapping.action_name);
                continue;
            };
            let Some(key) = Key::from_name(&mapping.key) else {
                trace!(
                    "ignoring {} binding on unknown key {}",
                    mapping.action_name,
                    mapping.key
                );
                continue;
            };
            key_actions.entry(key).or_default().push(action);
        }

        let mut axis_keys: HashMap<BoundAxis, Vec<(Key, f32)>> = HashMap::new();
        for mapping in settings.axis_mappings() {
            let Some(axis) = bound_axis(&mapping.axis_name) else {
                trace!("ignoring unrelated axis {}", mapping.axis_name);
                continue;
            };
            let Some(key) = Key::from_name(&mapping.key) else {
                trace!(
                    "ignoring {} binding on unknown key {}",
                    mapping.axis_name,
                    mapping.key
                );
                continue;
            };
            axis_keys.entry(axis).or_default().push((key, mapping.scale));
        }

        PlayerInput {
            key_actions,
            axis_keys,
            held_keys: HashSet::new(),
            analog_values: HashMap::new(),
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held_keys.contains(&key)
    }

    fn key_value(&self, key: Key) -> f32 {
        if key.is_analog() {
            self.analog_values.get(&key).copied().unwrap_or(0.0)
        } else if self.held_keys.contains(&key) {
            1.0
        } else {
            0.0
        }
    }

    fn axis_value(&self, axis: BoundAxis) -> f32 {
        self.axis_keys
            .get(&axis)
            .map(|keys| {
                keys.iter()
                    .map(|(key, scale)| self.key_value(*key) * scale)
                    .sum::<f32>()
            })
            .unwrap_or(0.0)
    }

    fn dispatch_edge(&self, pawn: &mut SimulatorPawn, key: Key, pressed: bool) {
        let Some(actions) = self.key_actions.get(&key) else {
            return;
        };

        for action in actions {
            match action {
                BoundAction::Mode(command) => {
                    if pressed {
                        pawn.input_mode(*command);
                    }
                }
                BoundAction::Button(button) => pawn.input_button(*button, pressed),
            }
        }
    }

    /// Feed one frame of raw input to `pawn`
    pub fn process_frame(&mut self, pawn: &mut SimulatorPawn, events: &[RawInputEvent], time: &Time) {
        self.analog_values.clear();

        for event in events {
            match *event {
                RawInputEvent::Pressed(key) => {
                    // Repeats while held are not edges
                    if self.held_keys.insert(key) {
                        self.dispatch_edge(pawn, key, true);
                    }
                }
                RawInputEvent::Released(key) => {
                    if self.held_keys.remove(&key) {
                        self.dispatch_edge(pawn, key, false);
                    }
                }
                RawInputEvent::Axis(key, value) => {
                    if !key.is_analog() {
                        warn!("axis value for digital key {:?} ignored", key);
                        continue;
                    }
                    *self.analog_values.entry(key).or_insert(0.0) += value;
                }
            }
        }

        let frame = FrameInput {
            delta_seconds: time.delta_seconds(),
            rotate_modifier: self.is_held(ROTATE_MODIFIER_KEY),
        };

        for axis in AXIS_ORDER {
            let value = self.axis_value(axis);
            match axis {
                BoundAxis::X => pawn.input_x(value, &frame),
                BoundAxis::Y => pawn.input_y(value, &frame),
                BoundAxis::Z => pawn.input_z(value, &frame),
                BoundAxis::Forward => pawn.move_forward(value, &frame),
                BoundAxis::Right => pawn.move_right(value, &frame),
            }
        }
    }
}
