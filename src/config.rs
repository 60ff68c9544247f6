//! Viewport-derived scene configuration

use bevy::prelude::*;

/// Logical width below which a viewport is treated as compact.
pub const COMPACT_WIDTH_PX: f32 = 768.0;

/// Number of satellites in the generated network. Fixed for the lifetime of
/// a mounted scene; a resize never changes it.
pub const SATELLITE_COUNT: usize = 12;

/// Size class of the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Standard,
}

impl ViewportClass {
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_WIDTH_PX {
            Self::Compact
        } else {
            Self::Standard
        }
    }
}

/// Snapshot of every viewport-dependent scene parameter.
///
/// Derived purely from the current viewport and replaced wholesale on every
/// resize, never mutated field by field. Deriving the same viewport twice
/// always yields an identical config, so a resize round trip restores the
/// original values exactly.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub class: ViewportClass,
    /// Vertical field of view, radians.
    pub fov: f32,
    /// Initial camera distance from the planet center.
    pub camera_distance: f32,
    /// Closest the orbit controls may zoom.
    pub min_distance: f32,
    /// Farthest the orbit controls may zoom.
    pub max_distance: f32,
    pub star_count: usize,
    pub star_point_size: f32,
    pub satellite_count: usize,
    pub scale_factor: f32,
}

impl SceneConfig {
    /// Compact viewports get a wider field of view, a closer camera, and a
    /// sparser but larger-sprited starfield.
    pub fn from_viewport(width: f32, scale_factor: f32) -> Self {
        match ViewportClass::from_width(width) {
            ViewportClass::Compact => Self {
                class: ViewportClass::Compact,
                fov: 60.0_f32.to_radians(),
                camera_distance: 5.0,
                min_distance: 3.0,
                max_distance: 15.0,
                star_count: 3000,
                star_point_size: 0.1,
                satellite_count: SATELLITE_COUNT,
                scale_factor,
            },
            ViewportClass::Standard => Self {
                class: ViewportClass::Standard,
                fov: 45.0_f32.to_radians(),
                camera_distance: 7.0,
                min_distance: 4.0,
                max_distance: 20.0,
                star_count: 6000,
                star_point_size: 0.05,
                satellite_count: SATELLITE_COUNT,
                scale_factor,
            },
        }
    }
}
