//! Satellite assembly spawning and per-frame motion

use bevy::prelude::*;

use crate::animation::FrameCounter;
use crate::config::SceneConfig;
use crate::scene::SceneGraph;

use super::components::{OrbitDescriptor, Satellite, SatelliteNetwork};
use super::generator::generate_network;

// Assembly proportions, in planet units.
const BODY_SIZE: Vec3 = Vec3::new(0.2, 0.08, 0.08);
const PANEL_SIZE: Vec3 = Vec3::new(0.3, 0.01, 0.15);
const PANEL_OFFSET: f32 = 0.3;
const ANTENNA_RADIUS: f32 = 0.005;
const ANTENNA_LENGTH: f32 = 0.15;
const ANTENNA_OFFSET: f32 = 0.1;

/// Spawn the satellite network under the scene root.
///
/// Each assembly is a body with two symmetric solar panels on its lateral
/// axis and an antenna perpendicular to its long axis. Mesh and material
/// handles are shared across all satellites.
pub fn spawn_satellite_network(
    mut commands: Commands,
    graph: Res<SceneGraph>,
    config: Res<SceneConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_mesh = meshes.add(Cuboid::from_size(BODY_SIZE));
    let panel_mesh = meshes.add(Cuboid::from_size(PANEL_SIZE));
    let antenna_mesh = meshes.add(Cylinder::new(ANTENNA_RADIUS, ANTENNA_LENGTH));

    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xcc, 0xcc, 0xcc),
        metallic: 0.9,
        perceptual_roughness: 0.1,
        ..default()
    });
    let panel_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x22, 0x44, 0xff),
        metallic: 0.7,
        perceptual_roughness: 0.3,
        ..default()
    });
    let antenna_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x88, 0x88, 0x88),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });

    let network_root = commands
        .spawn((
            SatelliteNetwork,
            Transform::default(),
            Visibility::default(),
            Name::new("Satellite Network"),
            ChildOf(graph.root),
        ))
        .id();

    for descriptor in generate_network(config.satellite_count, &mut rand::rng()) {
        commands
            .spawn((
                Satellite,
                descriptor,
                Transform::from_translation(descriptor.position_at(0)),
                Visibility::default(),
                ChildOf(network_root),
            ))
            .with_children(|assembly| {
                assembly.spawn((
                    Mesh3d(body_mesh.clone()),
                    MeshMaterial3d(body_material.clone()),
                    Transform::default(),
                ));
                for side in [-1.0, 1.0] {
                    assembly.spawn((
                        Mesh3d(panel_mesh.clone()),
                        MeshMaterial3d(panel_material.clone()),
                        Transform::from_xyz(side * PANEL_OFFSET, 0.0, 0.0),
                    ));
                }
                assembly.spawn((
                    Mesh3d(antenna_mesh.clone()),
                    MeshMaterial3d(antenna_material.clone()),
                    Transform::from_xyz(0.0, 0.0, ANTENNA_OFFSET)
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                ));
            });
    }
    info!("spawned {} satellites", config.satellite_count);
}

/// Re-derive every satellite position from the frame counter and apply it
/// to the assembly transform.
pub fn update_satellite_positions(
    frames: Res<FrameCounter>,
    mut satellites: Query<(&OrbitDescriptor, &mut Transform), With<Satellite>>,
) {
    for (descriptor, mut transform) in satellites.iter_mut() {
        transform.translation = descriptor.position_at(frames.0);
    }
}
