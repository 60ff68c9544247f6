//! Procedural satellite network
//!
//! Generates a fixed-size network of satellites on randomized orbits and
//! keeps their positions in sync with the frame counter. The generator is a
//! pure function of a count and an injected randomness source, so a seeded
//! rng reproduces an identical network in tests while the shipped scene
//! draws from thread-local entropy.

pub mod components;
pub mod generator;
pub mod systems;

pub use components::{OrbitDescriptor, Satellite, SatelliteNetwork};
pub use generator::generate_network;
pub use systems::{spawn_satellite_network, update_satellite_positions};
