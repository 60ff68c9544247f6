//! Procedural network generation

use std::f32::consts::TAU;

use rand::Rng;

use super::components::OrbitDescriptor;

/// Innermost orbit shell, in planet units.
pub const BASE_ORBIT_RADIUS: f32 = 4.0;
/// Random spread above the base radius.
pub const ORBIT_RADIUS_SPREAD: f32 = 2.0;
/// Slowest per-frame angular rate.
pub const MIN_ANGULAR_SPEED: f32 = 0.0005;
/// Random spread above the minimum rate.
pub const ANGULAR_SPEED_SPREAD: f32 = 0.0005;

/// Generate `count` orbit descriptors.
///
/// Start phases are evenly distributed around the full circle rather than
/// randomized, which would cluster satellites. The vertical amplitude
/// follows a two-period sine over the network index so the satellites
/// occupy several inclined orbital planes instead of one equatorial ring.
/// Radii and angular rates are drawn from the supplied rng; a seeded source
/// reproduces the exact same network.
pub fn generate_network(count: usize, rng: &mut impl Rng) -> Vec<OrbitDescriptor> {
    let mut network = Vec::with_capacity(count);
    for i in 0..count {
        let fraction = i as f32 / count as f32;
        network.push(OrbitDescriptor {
            orbit_radius: BASE_ORBIT_RADIUS + rng.random_range(0.0..ORBIT_RADIUS_SPREAD),
            start_angle: fraction * TAU,
            vertical_amplitude: (fraction * 2.0 * TAU).sin() * 0.5,
            angular_speed: MIN_ANGULAR_SPEED + rng.random_range(0.0..ANGULAR_SPEED_SPREAD),
        });
    }
    network
}
