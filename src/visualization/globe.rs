//! Planet and cloud layer construction

use bevy::prelude::*;

use crate::scene::SceneGraph;

pub const PLANET_RADIUS: f32 = 2.0;
/// Slightly above the surface so the layer never z-fights the planet.
pub const CLOUD_RADIUS: f32 = 2.005;

const SPHERE_SEGMENTS: u32 = 64;

/// Marker component for the planet mesh
#[derive(Component)]
pub struct Planet;

/// Marker component for the cloud layer mesh
#[derive(Component)]
pub struct CloudLayer;

/// UV sphere with the scene's standard segment counts.
pub fn globe_sphere(radius: f32) -> Mesh {
    Sphere::new(radius).mesh().uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

/// Spawn the planet and its cloud layer under the scene root.
///
/// Texture handles come back immediately from the asset server; a frame
/// rendered before a texture resolves simply shows the untextured material.
pub fn spawn_globe(
    mut commands: Commands,
    graph: Res<SceneGraph>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let planet_material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load("textures/planet.png")),
        perceptual_roughness: 0.8,
        metallic: 0.1,
        ..default()
    });
    commands.spawn((
        Planet,
        Mesh3d(meshes.add(globe_sphere(PLANET_RADIUS))),
        MeshMaterial3d(planet_material),
        Transform::default(),
        Name::new("Planet"),
        ChildOf(graph.root),
    ));

    // Additive blending so the clouds brighten the surface underneath
    // instead of occluding it.
    let cloud_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.6),
        base_color_texture: Some(asset_server.load("textures/clouds.png")),
        alpha_mode: AlphaMode::Add,
        ..default()
    });
    commands.spawn((
        CloudLayer,
        Mesh3d(meshes.add(globe_sphere(CLOUD_RADIUS))),
        MeshMaterial3d(cloud_material),
        Transform::default(),
        Name::new("Cloud Layer"),
        ChildOf(graph.root),
    ));
}
