// Controller visuals
//
// The mesh and material are resolved once when the pawn is built. When either
// is missing the error is logged and the controllers stay invisible; the
// simulation keeps running.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use cgmath::Vector3;
use tracing::{debug, error};

use crate::config::SimulatorConfig;

/// Handle to a resolved asset
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    pub path: String,
}

pub trait AssetResolver {
    fn resolve(&self, path: &str) -> Option<AssetHandle>;
}

/// Resolver over a fixed set of known asset paths
#[derive(Default)]
pub struct InMemoryAssets {
    paths: HashSet<String>,
}

impl InMemoryAssets {
    pub fn new<I, S>(paths: I) -> InMemoryAssets
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InMemoryAssets {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolver that knows the default controller assets
    pub fn with_controller_assets(config: &SimulatorConfig) -> InMemoryAssets {
        InMemoryAssets::new([
            config.controller_mesh_path.clone(),
            config.controller_material_path.clone(),
        ])
    }
}

impl AssetResolver for InMemoryAssets {
    fn resolve(&self, path: &str) -> Option<AssetHandle> {
        if self.paths.contains(path) {
            Some(AssetHandle {
                path: path.to_owned(),
            })
        } else {
            None
        }
    }
}

fn load_asset(resolver: &dyn AssetResolver, path: &str) -> Option<Rc<AssetHandle>> {
    match resolver.resolve(path) {
        Some(handle) => {
            debug!("resolved asset {}", path);
            Some(Rc::new(handle))
        }
        None => {
            error!("Could not find {}. Have you renamed it?", path);
            None
        }
    }
}

pub struct ControllerAssets {
    pub mesh: Option<Rc<AssetHandle>>,
    pub material: Option<Rc<AssetHandle>>,
}

impl ControllerAssets {
    pub fn load(resolver: &dyn AssetResolver, config: &SimulatorConfig) -> ControllerAssets {
        ControllerAssets {
            mesh: load_asset(resolver, &config.controller_mesh_path),
            material: load_asset(resolver, &config.controller_material_path),
        }
    }
}

/// Per-controller instance of the shared material, holding its own parameters
#[derive(Clone, Debug)]
pub struct MaterialInstance {
    pub parent: Rc<AssetHandle>,
    vector_parameters: HashMap<String, Vector3<f32>>,
}

impl MaterialInstance {
    pub fn new(parent: Rc<AssetHandle>) -> MaterialInstance {
        MaterialInstance {
            parent,
            vector_parameters: HashMap::new(),
        }
    }

    pub fn set_vector_parameter(&mut self, name: &str, value: Vector3<f32>) {
        self.vector_parameters.insert(name.to_owned(), value);
    }

    pub fn vector_parameter(&self, name: &str) -> Option<Vector3<f32>> {
        self.vector_parameters.get(name).copied()
    }
}

/// What gets drawn for one controller. Both parts are optional.
#[derive(Clone, Debug)]
pub struct ControllerVisual {
    pub mesh: Option<Rc<AssetHandle>>,
    pub material: Option<MaterialInstance>,
}

impl ControllerVisual {
    pub fn new(assets: &ControllerAssets) -> ControllerVisual {
        ControllerVisual {
            mesh: assets.mesh.clone(),
            material: assets.material.clone().map(MaterialInstance::new),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn set_glow(&mut self, parameter: &str, color: Vector3<f32>) {
        if let Some(material) = &mut self.material {
            material.set_vector_parameter(parameter, color);
        }
    }

    pub fn glow(&self, parameter: &str) -> Option<Vector3<f32>> {
        self.material
            .as_ref()
            .and_then(|material| material.vector_parameter(parameter))
    }
}
