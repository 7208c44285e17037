// Notifications for simulated controller buttons.
//
// Gameplay code implements `HandEventListener` and overrides the hooks it
// cares about; every hook defaults to doing nothing.

use tracing::info;

use crate::simulation_mode::Handedness;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandButton {
    Trigger,
    Grip,
    Menu,
}

pub trait HandEventListener {
    fn left_hand_trigger(&mut self, _pressed: bool) {}
    fn left_hand_grip(&mut self, _pressed: bool) {}
    fn left_hand_menu(&mut self, _pressed: bool) {}
    fn right_hand_trigger(&mut self, _pressed: bool) {}
    fn right_hand_grip(&mut self, _pressed: bool) {}
    fn right_hand_menu(&mut self, _pressed: bool) {}
}

/// Invoke the hook matching `hand` and `button`
pub fn notify(
    listener: &mut dyn HandEventListener,
    hand: Handedness,
    button: HandButton,
    pressed: bool,
) {
    match (hand, button) {
        (Handedness::Left, HandButton::Trigger) => listener.left_hand_trigger(pressed),
        (Handedness::Left, HandButton::Grip) => listener.left_hand_grip(pressed),
        (Handedness::Left, HandButton::Menu) => listener.left_hand_menu(pressed),
        (Handedness::Right, HandButton::Trigger) => listener.right_hand_trigger(pressed),
        (Handedness::Right, HandButton::Grip) => listener.right_hand_grip(pressed),
        (Handedness::Right, HandButton::Menu) => listener.right_hand_menu(pressed),
    }
}

/// Listener that writes every event to the log
pub struct LoggingHandListener;

impl LoggingHandListener {
    fn log(hand: Handedness, button: HandButton, pressed: bool) {
        let edge = if pressed { "pressed" } else { "released" };
        info!("{:?} hand {:?} {}", hand, button, edge);
    }
}

impl HandEventListener for LoggingHandListener {
    fn left_hand_trigger(&mut self, pressed: bool) {
        Self::log(Handedness::Left, HandButton::Trigger, pressed)
    }

    fn left_hand_grip(&mut self, pressed: bool) {
        Self::log(Handedness::Left, HandButton::Grip, pressed)
    }

    fn left_hand_menu(&mut self, pressed: bool) {
        Self::log(Handedness::Left, HandButton::Menu, pressed)
    }

    fn right_hand_trigger(&mut self, pressed: bool) {
        Self::log(Handedness::Right, HandButton::Trigger, pressed)
    }

    fn right_hand_grip(&mut self, pressed: bool) {
        Self::log(Handedness::Right, HandButton::Grip, pressed)
    }

    fn right_hand_menu(&mut self, pressed: bool) {
        Self::log(Handedness::Right, HandButton::Menu, pressed)
    }
}
