//! Per-frame animation driver
//!
//! One chained `Update` set advances the whole scene in a fixed order:
//! frame counter, planet spin, cloud spin, atmosphere spin, satellite
//! positions, then camera auto-rotation. `PanOrbitCameraPlugin` advances
//! control damping after this set and the render schedule draws the frame,
//! completing one tick. The set only runs while the scene is mounted, so
//! teardown unconditionally stops ticking even if a frame is already
//! queued.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::satellite::update_satellite_positions;
use crate::scene::{GlobeCamera, SceneState};
use crate::visualization::atmosphere::AtmosphereShell;
use crate::visualization::globe::{CloudLayer, Planet};

/// Planet spin per frame, radians.
pub const PLANET_SPIN_STEP: f32 = 0.001;
/// Cloud layer spin per frame; deliberately faster than the planet so the
/// weather drifts relative to the surface.
pub const CLOUD_SPIN_STEP: f32 = 0.0012;
/// Continuous slow camera orbit per frame, radians.
pub const AUTO_ORBIT_STEP: f32 = 0.0004;

/// Monotonic tick counter for the current mount. Inserted at zero on mount
/// and removed on teardown, so every mounted instance starts from frame
/// zero and nothing persists across remounts.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter(pub u64);

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                advance_frame,
                rotate_planet,
                rotate_clouds,
                rotate_atmosphere,
                update_satellite_positions,
                auto_orbit_camera,
            )
                .chain()
                .run_if(in_state(SceneState::Mounted).and(resource_exists::<FrameCounter>)),
        );
    }
}

/// Rotation angle after `frame` ticks of `step` radians each.
///
/// Recomputed from the counter rather than accumulated, so the angle cannot
/// drift over long sessions.
pub fn spin_angle(step: f32, frame: u64) -> f32 {
    ((step as f64 * frame as f64) % std::f64::consts::TAU) as f32
}

fn advance_frame(mut frames: ResMut<FrameCounter>) {
    frames.0 += 1;
}

fn rotate_planet(frames: Res<FrameCounter>, mut planets: Query<&mut Transform, With<Planet>>) {
    for mut transform in planets.iter_mut() {
        transform.rotation = Quat::from_rotation_y(spin_angle(PLANET_SPIN_STEP, frames.0));
    }
}

fn rotate_clouds(frames: Res<FrameCounter>, mut clouds: Query<&mut Transform, With<CloudLayer>>) {
    for mut transform in clouds.iter_mut() {
        transform.rotation = Quat::from_rotation_y(spin_angle(CLOUD_SPIN_STEP, frames.0));
    }
}

/// The atmosphere tracks the planet's spin.
fn rotate_atmosphere(
    frames: Res<FrameCounter>,
    mut shells: Query<&mut Transform, With<AtmosphereShell>>,
) {
    for mut transform in shells.iter_mut() {
        transform.rotation = Quat::from_rotation_y(spin_angle(PLANET_SPIN_STEP, frames.0));
    }
}

fn auto_orbit_camera(mut cameras: Query<&mut PanOrbitCamera, With<GlobeCamera>>) {
    for mut camera in cameras.iter_mut() {
        camera.target_yaw += AUTO_ORBIT_STEP;
    }
}
