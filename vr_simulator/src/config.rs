use std::path::Path;

use cgmath::{vec3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SimulatorError};
use crate::simulation_mode::SimulationMode;

pub const DEFAULT_CONTROLLER_MESH_PATH: &str = "/VRSimulator/ControllerModel";
pub const DEFAULT_CONTROLLER_MATERIAL_PATH: &str = "/VRSimulator/ControllerMaterial";
pub const DEFAULT_GLOW_PARAMETER: &str = "TrimGlowColor";

pub const CYAN: Vector3<f32> = vec3(0.0, 1.0, 1.0);
pub const RED: Vector3<f32> = vec3(1.0, 0.0, 0.0);

/// Starting pose of a motion controller, relative to the pawn root.
/// Rotation is (roll, pitch, yaw) in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerPose {
    pub position: Vector3<f32>,
    #[serde(default = "zero_vector")]
    pub rotation: Vector3<f32>,
}

fn zero_vector() -> Vector3<f32> {
    vec3(0.0, 0.0, 0.0)
}

/// SimulatorConfig
///
/// Tunables for the simulator pawn. Every field has a default, so a config
/// file only needs to list what it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    // Degrees per second, per unit of mouse delta
    pub camera_rotation_rate: f32,
    // Units per second, per unit of movement axis
    pub camera_movement_speed: f32,
    pub max_camera_pitch: f32,

    // Applied to (dx, dy, dz) before adding to (azimuth, elevation, radius)
    pub translate_scale: Vector3<f32>,
    // Applied to (dz, -dy, dx) before adding to (roll, pitch, yaw)
    pub rotate_scale: Vector3<f32>,

    pub initial_mode: SimulationMode,
    pub left_controller: ControllerPose,
    pub right_controller: ControllerPose,

    pub active_color: Vector3<f32>,
    pub inactive_color: Vector3<f32>,
    pub glow_parameter: String,

    pub controller_mesh_path: String,
    pub controller_material_path: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            camera_rotation_rate: 45.0,
            camera_movement_speed: 20.0,
            max_camera_pitch: 89.0,
            translate_scale: vec3(0.01, 0.01, 1.0),
            rotate_scale: vec3(1.0, 1.0, 2.0),
            initial_mode: SimulationMode::Camera,
            left_controller: ControllerPose {
                position: vec3(40.0, -20.0, -10.0),
                rotation: zero_vector(),
            },
            right_controller: ControllerPose {
                position: vec3(40.0, 20.0, -10.0),
                rotation: zero_vector(),
            },
            active_color: RED,
            inactive_color: CYAN,
            glow_parameter: DEFAULT_GLOW_PARAMETER.to_owned(),
            controller_mesh_path: DEFAULT_CONTROLLER_MESH_PATH.to_owned(),
            controller_material_path: DEFAULT_CONTROLLER_MATERIAL_PATH.to_owned(),
        }
    }
}

impl SimulatorConfig {
    pub fn read<T: std::io::Read>(reader: &mut T) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| SimulatorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = std::io::BufReader::new(file);
        let config = Self::read(&mut reader).map_err(|source| SimulatorError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded simulator config from {}", path.display());
        Ok(config)
    }
}
