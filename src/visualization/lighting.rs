//! Scene lighting rig

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::scene::SceneGraph;

/// Marker component for the primary directional light
#[derive(Component)]
pub struct SunLight;

/// Marker component for the secondary fill light
#[derive(Component)]
pub struct FillLight;

const AMBIENT_BRIGHTNESS: f32 = 150.0;
const SUN_ILLUMINANCE: f32 = 6_000.0;
const FILL_ILLUMINANCE: f32 = 1_500.0;

/// Ambient, sun, and fill lights. The fill comes from the opposite side so
/// the night limb of the planet stays readable.
pub fn spawn_lighting(mut commands: Commands, graph: Res<SceneGraph>) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        SunLight,
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(5.0, 3.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun Light"),
        ChildOf(graph.root),
    ));

    commands.spawn((
        FillLight,
        DirectionalLight {
            illuminance: FILL_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(-5.0, -3.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Fill Light"),
        ChildOf(graph.root),
    ));
}
