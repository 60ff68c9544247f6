//! Satellite components

use bevy::prelude::*;

/// Marker component for the container entity parenting every satellite
/// assembly.
#[derive(Component)]
pub struct SatelliteNetwork;

/// Marker component for one satellite assembly root.
#[derive(Component)]
pub struct Satellite;

/// Immutable orbital parameters for one satellite.
///
/// The current orbital angle is never stored: it is a pure function of the
/// frame counter, so evaluating the same frame twice yields the identical
/// position and long sessions accumulate no floating-point drift.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitDescriptor {
    pub orbit_radius: f32,
    /// Phase at frame zero, radians in [0, 2π).
    pub start_angle: f32,
    /// Height of this satellite's orbital plane, as a fraction of the orbit
    /// radius.
    pub vertical_amplitude: f32,
    /// Radians advanced per frame.
    pub angular_speed: f32,
}

impl OrbitDescriptor {
    /// Position of the satellite at the given frame.
    pub fn position_at(&self, frame: u64) -> Vec3 {
        let angle = (self.start_angle as f64 + self.angular_speed as f64 * frame as f64)
            % std::f64::consts::TAU;
        Vec3::new(
            self.orbit_radius * angle.cos() as f32,
            self.orbit_radius * self.vertical_amplitude,
            self.orbit_radius * angle.sin() as f32,
        )
    }
}
