use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_panorbit_camera::PanOrbitCameraPlugin;

mod animation;
mod config;
mod satellite;
mod scene;
mod visualization;

use animation::AnimationPlugin;
use scene::ScenePlugin;
use visualization::SceneMaterialsPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Globe".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(SceneMaterialsPlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(AnimationPlugin)
        .run();
}
