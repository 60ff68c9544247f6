//! Uniformly distributed point-sprite starfield
//!
//! Star directions are sampled with a spherically-uniform distribution:
//! azimuth uniform in [0, 2π) and polar angle from the inverse cosine of a
//! uniform sample in [-1, 1], which avoids the pole clustering a naive
//! uniform polar angle would produce. Each star is drawn as a small
//! camera-facing quad so the sprite size can be tuned on resize.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, MeshVertexBufferLayoutRef, PrimitiveTopology};
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, SpecializedMeshPipelineError,
};
use bevy::shader::ShaderRef;
use rand::Rng;

use crate::config::SceneConfig;
use crate::scene::SceneGraph;

pub const STARFIELD_RADIUS: f32 = 100.0;

/// Marker component for the starfield mesh
#[derive(Component)]
pub struct Starfield;

/// Point-sprite material; `point_size` is the view-space quad size the
/// resize handler adjusts (see `assets/shaders/starfield.wgsl`).
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct StarfieldMaterial {
    #[uniform(0)]
    pub color: LinearRgba,
    #[uniform(1)]
    pub point_size: f32,
}

impl Material for StarfieldMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/starfield.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/starfield.wgsl".into()
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
        // Quads are billboarded in view space; winding is irrelevant.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// Sample `count` points uniformly on a sphere of the given radius.
pub fn sample_star_positions(count: usize, radius: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(count);
    for _ in 0..count {
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        let phi = rng.random_range(-1.0_f32..=1.0).acos();
        positions.push(Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        ));
    }
    positions
}

/// One quad per star. Every corner vertex carries the star's position; the
/// corner offset lives in UV_0 and is expanded in view space by the vertex
/// shader, so the quads always face the camera.
pub fn build_starfield_mesh(positions: &[Vec3]) -> Mesh {
    const CORNERS: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];

    let mut vertices = Vec::with_capacity(positions.len() * 4);
    let mut corners = Vec::with_capacity(positions.len() * 4);
    let mut indices = Vec::with_capacity(positions.len() * 6);
    for (i, position) in positions.iter().enumerate() {
        let base = (i * 4) as u32;
        for corner in CORNERS {
            vertices.push([position.x, position.y, position.z]);
            corners.push(corner);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh
}

pub fn spawn_starfield(
    mut commands: Commands,
    graph: Res<SceneGraph>,
    config: Res<SceneConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StarfieldMaterial>>,
) {
    let positions = sample_star_positions(config.star_count, STARFIELD_RADIUS, &mut rand::rng());
    commands.spawn((
        Starfield,
        Mesh3d(meshes.add(build_starfield_mesh(&positions))),
        MeshMaterial3d(materials.add(StarfieldMaterial {
            color: LinearRgba::WHITE,
            point_size: config.star_point_size,
        })),
        Transform::default(),
        Name::new("Starfield"),
        ChildOf(graph.root),
    ));
}
