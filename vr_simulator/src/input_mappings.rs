// Input mappings
//
// Named action/axis bindings the simulator needs, and the store they are
// merged into. Registration never overwrites: a mapping is skipped when its
// name was already defined before registration started, so user remaps
// survive and repeated startups leave the table untouched.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SimulatorError};
use crate::keys::Key;

pub const ACTION_CYCLE_MOVEMENT_MODE: &str = "VRSimulatorCycleMovementMode";
pub const ACTION_MOVEMENT_MODE_CAMERA: &str = "VRSimulatorMovementModeCamera";
pub const ACTION_MOVEMENT_MODE_LEFT_HAND: &str = "VRSimulatorMovementModeLeftHand";
pub const ACTION_MOVEMENT_MODE_RIGHT_HAND: &str = "VRSimulatorMovementModeRightHand";
pub const ACTION_TRIGGER: &str = "VRSimulatorTrigger";
pub const ACTION_GRIP: &str = "VRSimulatorGrip";
pub const ACTION_MENU: &str = "VRSimulatorMenu";

pub const AXIS_X: &str = "VRSimulatorX";
pub const AXIS_Y: &str = "VRSimulatorY";
pub const AXIS_Z: &str = "VRSimulatorZ";
pub const AXIS_FORWARD: &str = "VRSimulatorForward";
pub const AXIS_RIGHT: &str = "VRSimulatorRight";

// Keys are kept by name so bindings owned by other systems, on keys the
// simulator does not know, survive a load/save cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionKeyMapping {
    pub action_name: String,
    pub key: String,
}

impl ActionKeyMapping {
    pub fn new(action_name: &str, key: Key) -> ActionKeyMapping {
        ActionKeyMapping {
            action_name: action_name.to_owned(),
            key: key.name().to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisKeyMapping {
    pub axis_name: String,
    pub key: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl AxisKeyMapping {
    pub fn new(axis_name: &str, key: Key, scale: f32) -> AxisKeyMapping {
        AxisKeyMapping {
            axis_name: axis_name.to_owned(),
            key: key.name().to_owned(),
            scale,
        }
    }
}

/// Store for the persisted key mappings
pub trait InputSettings {
    fn action_mappings(&self) -> &[ActionKeyMapping];
    fn axis_mappings(&self) -> &[AxisKeyMapping];
    fn add_action_mapping(&mut self, mapping: ActionKeyMapping);
    fn add_axis_mapping(&mut self, mapping: AxisKeyMapping);
    fn save_key_mappings(&mut self) -> Result<()>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMappingTable {
    #[serde(default)]
    pub action_mappings: Vec<ActionKeyMapping>,
    #[serde(default)]
    pub axis_mappings: Vec<AxisKeyMapping>,
}

impl InputSettings for InputMappingTable {
    fn action_mappings(&self) -> &[ActionKeyMapping] {
        &self.action_mappings
    }

    fn axis_mappings(&self) -> &[AxisKeyMapping] {
        &self.axis_mappings
    }

    fn add_action_mapping(&mut self, mapping: ActionKeyMapping) {
        self.action_mappings.push(mapping);
    }

    fn add_axis_mapping(&mut self, mapping: AxisKeyMapping) {
        self.axis_mappings.push(mapping);
    }

    // Nothing to persist
    fn save_key_mappings(&mut self) -> Result<()> {
        Ok(())
    }
}

/// FileInputSettings
///
/// Mapping table persisted as JSON. A missing file opens as an empty table
/// and is created on the first save.
pub struct FileInputSettings {
    path: PathBuf,
    table: InputMappingTable,
}

impl FileInputSettings {
    pub fn open(path: &Path) -> Result<FileInputSettings> {
        let table = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|source| SimulatorError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&contents).map_err(|source| SimulatorError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            debug!("no input settings at {}, starting empty", path.display());
            InputMappingTable::default()
        };

        Ok(FileInputSettings {
            path: path.to_path_buf(),
            table,
        })
    }

    pub fn table(&self) -> &InputMappingTable {
        &self.table
    }
}

impl InputSettings for FileInputSettings {
    fn action_mappings(&self) -> &[ActionKeyMapping] {
        self.table.action_mappings()
    }

    fn axis_mappings(&self) -> &[AxisKeyMapping] {
        self.table.axis_mappings()
    }

    fn add_action_mapping(&mut self, mapping: ActionKeyMapping) {
        self.table.add_action_mapping(mapping);
    }

    fn add_axis_mapping(&mut self, mapping: AxisKeyMapping) {
        self.table.add_axis_mapping(mapping);
    }

    fn save_key_mappings(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.table)?;
        std::fs::write(&self.path, json).map_err(|source| SimulatorError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Adds `mapping` unless an action with the same name is in `defined`.
/// Returns true when the mapping was added.
pub fn add_action_if_not_defined(
    settings: &mut dyn InputSettings,
    defined: &[ActionKeyMapping],
    mapping: ActionKeyMapping,
) -> bool {
    if defined
        .iter()
        .any(|action| action.action_name == mapping.action_name)
    {
        return false;
    }

    settings.add_action_mapping(mapping);
    true
}

/// Adds `mapping` unless an axis with the same name is in `defined`.
/// Returns true when the mapping was added.
pub fn add_axis_if_not_defined(
    settings: &mut dyn InputSettings,
    defined: &[AxisKeyMapping],
    mapping: AxisKeyMapping,
) -> bool {
    if defined.iter().any(|axis| axis.axis_name == mapping.axis_name) {
        return false;
    }

    settings.add_axis_mapping(mapping);
    true
}

pub fn default_action_mappings() -> Vec<ActionKeyMapping> {
    vec![
        ActionKeyMapping::new(ACTION_CYCLE_MOVEMENT_MODE, Key::Tab),
        ActionKeyMapping::new(ACTION_MOVEMENT_MODE_CAMERA, Key::One),
        ActionKeyMapping::new(ACTION_MOVEMENT_MODE_LEFT_HAND, Key::Two),
        ActionKeyMapping::new(ACTION_MOVEMENT_MODE_RIGHT_HAND, Key::Three),
        ActionKeyMapping::new(ACTION_TRIGGER, Key::T),
        ActionKeyMapping::new(ACTION_TRIGGER, Key::LeftMouseButton),
        ActionKeyMapping::new(ACTION_GRIP, Key::G),
        ActionKeyMapping::new(ACTION_MENU, Key::M),
    ]
}

pub fn default_axis_mappings() -> Vec<AxisKeyMapping> {
    vec![
        AxisKeyMapping::new(AXIS_X, Key::MouseX, 1.0),
        AxisKeyMapping::new(AXIS_Y, Key::MouseY, 1.0),
        AxisKeyMapping::new(AXIS_Z, Key::MouseWheelAxis, 1.0),
        AxisKeyMapping::new(AXIS_FORWARD, Key::W, 1.0),
        AxisKeyMapping::new(AXIS_FORWARD, Key::S, -1.0),
        AxisKeyMapping::new(AXIS_RIGHT, Key::D, 1.0),
        AxisKeyMapping::new(AXIS_RIGHT, Key::A, -1.0),
    ]
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
    pub actions_added: usize,
    pub axes_added: usize,
}

/// register_simulator_mappings
///
/// Merges the simulator's default bindings into `settings` and saves them.
/// Names are checked against the mappings as they were before this call, so
/// multi-key bindings (Trigger, Forward, Right) are added whole.
pub fn register_simulator_mappings(settings: &mut dyn InputSettings) -> Result<RegistrationSummary> {
    let defined_actions = settings.action_mappings().to_vec();
    let defined_axes = settings.axis_mappings().to_vec();

    let mut summary = RegistrationSummary::default();

    for mapping in default_action_mappings() {
        if add_action_if_not_defined(settings, &defined_actions, mapping) {
            summary.actions_added += 1;
        }
    }

    for mapping in default_axis_mappings() {
        if add_axis_if_not_defined(settings, &defined_axes, mapping) {
            summary.axes_added += 1;
        }
    }

    settings.save_key_mappings()?;

    info!(
        "registered simulator input mappings: {} actions, {} axes added",
        summary.actions_added, summary.axes_added
    );
    Ok(summary)
}
