//! Viewport mount, resize, and teardown

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_panorbit_camera::PanOrbitCamera;

use crate::animation::FrameCounter;
use crate::config::SceneConfig;
use crate::visualization::starfield::{Starfield, StarfieldMaterial};

use super::compose::GlobeCamera;
use super::{SceneGraph, SceneState};

/// Waits for a primary window, derives the viewport config, and requests
/// the mounted state. Skips quietly while no window exists; a later frame
/// retries.
pub fn mount_when_viewport_ready(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<SceneState>>,
) {
    let Ok(window) = windows.single() else {
        debug!("mount skipped: no primary window yet");
        return;
    };
    commands.insert_resource(SceneConfig::from_viewport(
        window.width(),
        window.scale_factor(),
    ));
    next_state.set(SceneState::Mounted);
}

/// Applies the last resize of the frame as a parameter-only update: camera
/// field of view, control distance bounds, and star sprite size. Meshes,
/// textures, and the satellite network are never rebuilt here.
pub fn handle_viewport_resize(
    mut resize_messages: MessageReader<WindowResized>,
    windows: Query<&Window>,
    mut config: ResMut<SceneConfig>,
    mut cameras: Query<(&mut Projection, &mut PanOrbitCamera), With<GlobeCamera>>,
    mut star_materials: ResMut<Assets<StarfieldMaterial>>,
    starfields: Query<&MeshMaterial3d<StarfieldMaterial>, With<Starfield>>,
) {
    let Some(resized) = resize_messages.read().last() else {
        return;
    };
    let scale_factor = windows
        .get(resized.window)
        .map(|window| window.scale_factor())
        .unwrap_or(config.scale_factor);
    let next = SceneConfig::from_viewport(resized.width, scale_factor);
    if *config == next {
        return;
    }
    debug!(
        "viewport resized to {}x{}, class {:?}",
        resized.width, resized.height, next.class
    );
    *config = next;

    for (mut projection, mut controls) in cameras.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = config.fov;
        }
        controls.zoom_lower_limit = config.min_distance;
        controls.zoom_upper_limit = Some(config.max_distance);
    }
    for material in starfields.iter() {
        if let Some(starfield) = star_materials.get_mut(&material.0) {
            starfield.point_size = config.star_point_size;
        }
    }
}

/// Tears down one mounted instance: the scene root (and with it every mesh,
/// material handle, light, and camera of the graph), the ambient light, and
/// the per-mount resources. Safe to run twice and safe before the first
/// frame; a root that is already gone is a no-op.
pub fn teardown_scene(mut commands: Commands, graph: Option<Res<SceneGraph>>) {
    if let Some(graph) = graph {
        if let Ok(mut root) = commands.get_entity(graph.root) {
            root.despawn();
        }
    }
    commands.remove_resource::<SceneGraph>();
    commands.remove_resource::<FrameCounter>();
    commands.insert_resource(GlobalAmbientLight::default());
    info!("globe scene torn down");
}
