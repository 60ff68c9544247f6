//! Scene graph composition
//!
//! These systems run once per mount, chained in composition order: root,
//! globe, satellite network, atmosphere, starfield, lighting, then camera
//! and controls. The scene background is the camera's clear color, so
//! composing registers nothing process-wide; every call produces an
//! independent graph under a fresh root entity.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::animation::FrameCounter;
use crate::config::SceneConfig;

use super::SceneGraph;

/// Marker component for the root entity owning the mounted scene graph.
#[derive(Component)]
pub struct GlobeRoot;

/// Marker component for the scene's interactive camera.
#[derive(Component)]
pub struct GlobeCamera;

/// Deep space blue, almost black.
const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.2);

const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 2000.0;
const ORBIT_SMOOTHNESS: f32 = 0.8;
const ZOOM_SMOOTHNESS: f32 = 0.8;

/// Spawn the root entity and the per-mount resources every later
/// composition step hangs off.
pub fn spawn_scene_root(mut commands: Commands) {
    let root = commands
        .spawn((
            GlobeRoot,
            Transform::default(),
            Visibility::default(),
            Name::new("Globe Scene"),
        ))
        .id();
    commands.insert_resource(SceneGraph { root });
    commands.insert_resource(FrameCounter::default());
    info!("globe scene mounted");
}

/// Camera and interactive orbit controls, configured from the viewport
/// config: field of view, initial distance, zoom bounds, damping, and the
/// dark background clear color.
pub fn spawn_camera(mut commands: Commands, graph: Res<SceneGraph>, config: Res<SceneConfig>) {
    commands.spawn((
        GlobeCamera,
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(BACKGROUND_COLOR),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(config.camera_distance),
            yaw: Some(0.0),
            pitch: Some(0.0),
            zoom_lower_limit: config.min_distance,
            zoom_upper_limit: Some(config.max_distance),
            orbit_smoothness: ORBIT_SMOOTHNESS,
            zoom_smoothness: ZOOM_SMOOTHNESS,
            force_update: true,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, config.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Globe Camera"),
        ChildOf(graph.root),
    ));
}
