//! Rim-lit atmosphere shell
//!
//! A sphere slightly larger than the planet, rendered back-face-only with
//! additive blending so it only contributes a glow at silhouette edges.

use bevy::mesh::MeshVertexBufferLayoutRef;
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::render_resource::{
    AsBindGroup, Face, RenderPipelineDescriptor, SpecializedMeshPipelineError,
};
use bevy::shader::ShaderRef;

use crate::scene::SceneGraph;
use crate::visualization::globe::globe_sphere;

pub const ATMOSPHERE_RADIUS: f32 = 2.1;

/// Marker component for the atmosphere mesh
#[derive(Component)]
pub struct AtmosphereShell;

/// Glow material whose intensity is a monotonic falloff of the angle
/// between the surface normal and the view axis (see
/// `assets/shaders/atmosphere.wgsl`).
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct AtmosphereMaterial {
    #[uniform(0)]
    pub glow_color: LinearRgba,
}

impl Material for AtmosphereMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/atmosphere.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Back faces only: the glow must ring the planet, not wash over it.
        descriptor.primitive.cull_mode = Some(Face::Front);
        Ok(())
    }
}

pub fn spawn_atmosphere(
    mut commands: Commands,
    graph: Res<SceneGraph>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<AtmosphereMaterial>>,
) {
    commands.spawn((
        AtmosphereShell,
        Mesh3d(meshes.add(globe_sphere(ATMOSPHERE_RADIUS))),
        MeshMaterial3d(materials.add(AtmosphereMaterial {
            glow_color: LinearRgba::rgb(0.3, 0.6, 1.0),
        })),
        Transform::default(),
        Name::new("Atmosphere"),
        ChildOf(graph.root),
    ));
}
