pub mod camera;
pub mod config;
pub mod controller_state;
pub mod controller_visuals;
pub mod coordinates;
pub mod error;
pub mod hand_events;
pub mod input_context;
pub mod input_mappings;
pub mod keys;
pub mod player_input;
mod simulation_mode;
mod simulator_pawn;
pub mod time;

pub use crate::config::SimulatorConfig;
pub use crate::error::{Result, SimulatorError};
pub use crate::hand_events::{HandButton, HandEventListener, LoggingHandListener};
pub use crate::keys::Key;
pub use crate::player_input::{PlayerInput, RawInputEvent};
pub use crate::simulation_mode::{Handedness, ModeCommand, SimulationMode};
pub use crate::simulator_pawn::{FrameInput, SimulatorPawn};
