//! Geometry and material factory
//!
//! Builds the static visual primitives of the scene: planet and cloud
//! spheres, the rim-lit atmosphere shell, the point-sprite starfield, and
//! the lighting rig. Construction has no side effects beyond spawning;
//! textures load asynchronously and the meshes render untextured until a
//! load resolves.

use bevy::prelude::*;

pub mod atmosphere;
pub mod globe;
pub mod lighting;
pub mod starfield;

pub use atmosphere::AtmosphereMaterial;
pub use starfield::StarfieldMaterial;

/// Registers the scene's custom materials with the renderer.
pub struct SceneMaterialsPlugin;

impl Plugin for SceneMaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            MaterialPlugin::<AtmosphereMaterial>::default(),
            MaterialPlugin::<StarfieldMaterial>::default(),
        ));
    }
}
