//! Scene composition and viewport lifecycle
//!
//! The scene lives behind a two-state machine: `Detached` (no graph,
//! waiting for a viewport) and `Mounted` (graph composed, animating).
//! Entering `Mounted` runs the composition chain; leaving it tears the
//! whole graph down. A remount composes a fully independent graph — nothing
//! from a previous mount is reused.

use bevy::prelude::*;
use bevy::window::WindowResized;

pub mod compose;
pub mod lifecycle;

pub use compose::{GlobeCamera, GlobeRoot};

/// Mount state for the globe scene.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneState {
    /// No scene graph exists; waiting for a viewport to mount into.
    #[default]
    Detached,
    /// Scene graph composed and animating.
    Mounted,
}

/// Owner handle for one mounted scene graph. Every visual entity of the
/// mount is a descendant of `root`, so teardown is a single recursive
/// despawn. Exactly one exists per mounted instance; removed on teardown.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneGraph {
    pub root: Entity,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SceneState>();
        // Already registered by WindowPlugin in the full app; headless apps
        // get it from here.
        app.add_message::<WindowResized>();
        app.add_systems(
            OnEnter(SceneState::Mounted),
            (
                compose::spawn_scene_root,
                crate::visualization::globe::spawn_globe,
                crate::satellite::spawn_satellite_network,
                crate::visualization::atmosphere::spawn_atmosphere,
                crate::visualization::starfield::spawn_starfield,
                crate::visualization::lighting::spawn_lighting,
                compose::spawn_camera,
            )
                .chain(),
        );
        app.add_systems(OnExit(SceneState::Mounted), lifecycle::teardown_scene);
        app.add_systems(
            Update,
            (
                lifecycle::mount_when_viewport_ready.run_if(in_state(SceneState::Detached)),
                lifecycle::handle_viewport_resize.run_if(in_state(SceneState::Mounted)),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetPlugin;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::state::app::StatesPlugin;
    use bevy::state::state::StateTransition;
    use bevy_panorbit_camera::PanOrbitCamera;

    use crate::animation::{AnimationPlugin, FrameCounter, PLANET_SPIN_STEP, spin_angle};
    use crate::config::{SceneConfig, ViewportClass};
    use crate::satellite::{OrbitDescriptor, Satellite};
    use crate::visualization::atmosphere::AtmosphereMaterial;
    use crate::visualization::globe::Planet;
    use crate::visualization::starfield::{Starfield, StarfieldMaterial};

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin));
        app.init_asset::<Mesh>();
        app.init_asset::<Image>();
        app.init_asset::<StandardMaterial>();
        app.init_asset::<AtmosphereMaterial>();
        app.init_asset::<StarfieldMaterial>();
        app.add_plugins((ScenePlugin, AnimationPlugin));
        // Standard-class viewport; no window exists in headless tests.
        app.insert_resource(SceneConfig::from_viewport(1280.0, 1.0));
        app
    }

    fn set_state(app: &mut App, state: SceneState) {
        app.world_mut()
            .resource_mut::<NextState<SceneState>>()
            .set(state);
    }

    fn mount(app: &mut App) {
        set_state(app, SceneState::Mounted);
        app.update();
    }

    fn unmount(app: &mut App) {
        set_state(app, SceneState::Detached);
        app.update();
    }

    fn satellite_entities(app: &mut App) -> Vec<Entity> {
        let world = app.world_mut();
        let mut query = world.query_filtered::<Entity, With<Satellite>>();
        query.iter(world).collect()
    }

    #[test]
    fn test_mount_composes_full_scene() {
        let mut app = test_app();
        mount(&mut app);

        let root = app.world().resource::<SceneGraph>().root;
        assert!(app.world().get_entity(root).is_ok());

        let config_count = app.world().resource::<SceneConfig>().satellite_count;
        assert_eq!(satellite_entities(&mut app).len(), config_count);

        let world = app.world_mut();
        assert_eq!(world.query::<&Planet>().iter(world).count(), 1);
        assert_eq!(world.query::<&Starfield>().iter(world).count(), 1);
        assert_eq!(world.query::<&GlobeCamera>().iter(world).count(), 1);
    }

    #[test]
    fn test_frame_counter_and_rotation_track_updates() {
        let mut app = test_app();
        mount(&mut app);
        for _ in 0..4 {
            app.update();
        }

        let frames = app.world().resource::<FrameCounter>().0;
        assert_eq!(frames, 5);

        let world = app.world_mut();
        let transform = world
            .query_filtered::<&Transform, With<Planet>>()
            .single(world)
            .unwrap();
        let expected = Quat::from_rotation_y(spin_angle(PLANET_SPIN_STEP, frames));
        assert!(transform.rotation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn test_satellites_follow_descriptors() {
        let mut app = test_app();
        mount(&mut app);
        app.update();
        app.update();

        let frames = app.world().resource::<FrameCounter>().0;
        let world = app.world_mut();
        let mut query = world.query_filtered::<(&OrbitDescriptor, &Transform), With<Satellite>>();
        for (descriptor, transform) in query.iter(world) {
            assert_eq!(transform.translation, descriptor.position_at(frames));
        }
    }

    #[test]
    fn test_unmount_releases_everything() {
        let mut app = test_app();
        mount(&mut app);
        let root = app.world().resource::<SceneGraph>().root;

        unmount(&mut app);

        assert!(app.world().get_resource::<SceneGraph>().is_none());
        assert!(app.world().get_resource::<FrameCounter>().is_none());
        assert!(app.world().get_entity(root).is_err());
        assert!(satellite_entities(&mut app).is_empty());
        let world = app.world_mut();
        assert_eq!(world.query::<&GlobeCamera>().iter(world).count(), 0);
    }

    #[test]
    fn test_no_ticks_after_unmount() {
        let mut app = test_app();
        mount(&mut app);
        unmount(&mut app);

        // Further frames are harmless no-ops: nothing is scheduled.
        app.update();
        app.update();
        assert!(app.world().get_resource::<FrameCounter>().is_none());
    }

    #[test]
    fn test_mount_then_unmount_before_first_tick() {
        let mut app = test_app();

        // Drive the state machine directly so no Update (and thus no tick)
        // ever runs between mount and unmount.
        set_state(&mut app, SceneState::Mounted);
        app.world_mut().run_schedule(StateTransition);
        assert!(app.world().get_resource::<SceneGraph>().is_some());
        assert_eq!(app.world().resource::<FrameCounter>().0, 0);

        set_state(&mut app, SceneState::Detached);
        app.world_mut().run_schedule(StateTransition);
        assert!(app.world().get_resource::<SceneGraph>().is_none());
        assert!(app.world().get_resource::<FrameCounter>().is_none());
        assert!(satellite_entities(&mut app).is_empty());
    }

    #[test]
    fn test_teardown_twice_is_safe() {
        let mut app = test_app();
        mount(&mut app);
        unmount(&mut app);
        app.world_mut()
            .run_system_once(lifecycle::teardown_scene)
            .unwrap();
        assert!(app.world().get_resource::<SceneGraph>().is_none());
    }

    #[test]
    fn test_remount_creates_independent_scene() {
        let mut app = test_app();
        mount(&mut app);
        let first_root = app.world().resource::<SceneGraph>().root;
        let first_satellites = satellite_entities(&mut app);

        unmount(&mut app);
        mount(&mut app);

        let second_root = app.world().resource::<SceneGraph>().root;
        assert_ne!(first_root, second_root);

        // Mutating the second network cannot touch the first: the first
        // mount's entities no longer exist at all.
        let world = app.world_mut();
        let mut query = world.query_filtered::<&mut OrbitDescriptor, With<Satellite>>();
        for mut descriptor in query.iter_mut(world) {
            descriptor.orbit_radius = 999.0;
        }
        for entity in first_satellites {
            assert!(app.world().get_entity(entity).is_err());
        }
    }

    #[test]
    fn test_resize_updates_parameters_without_rebuilding() {
        let mut app = test_app();
        mount(&mut app);

        let (starfield_mesh, star_material) = {
            let world = app.world_mut();
            let (mesh, material) = world
                .query_filtered::<(&Mesh3d, &MeshMaterial3d<StarfieldMaterial>), With<Starfield>>()
                .single(world)
                .unwrap();
            (mesh.0.clone(), material.0.clone())
        };
        let satellites_before = satellite_entities(&mut app);

        app.world_mut()
            .resource_mut::<Messages<WindowResized>>()
            .write(WindowResized {
                window: Entity::PLACEHOLDER,
                width: 600.0,
                height: 800.0,
            });
        app.update();

        let config = app.world().resource::<SceneConfig>().clone();
        assert_eq!(config.class, ViewportClass::Compact);

        let world = app.world_mut();
        let (projection, controls) = world
            .query_filtered::<(&Projection, &PanOrbitCamera), With<GlobeCamera>>()
            .single(world)
            .unwrap();
        match projection {
            Projection::Perspective(perspective) => {
                assert!((perspective.fov - 60.0_f32.to_radians()).abs() < 1e-6);
            }
            _ => panic!("camera projection is not perspective"),
        }
        assert_eq!(controls.zoom_lower_limit, config.min_distance);
        assert_eq!(controls.zoom_upper_limit, Some(config.max_distance));

        let point_size = app
            .world()
            .resource::<Assets<StarfieldMaterial>>()
            .get(&star_material)
            .unwrap()
            .point_size;
        assert_eq!(point_size, config.star_point_size);

        // O(parameter update): same mesh asset, same satellite entities.
        let mesh_after = {
            let world = app.world_mut();
            world
                .query_filtered::<&Mesh3d, With<Starfield>>()
                .single(world)
                .unwrap()
                .0
                .clone()
        };
        assert_eq!(starfield_mesh, mesh_after);
        assert_eq!(satellites_before, satellite_entities(&mut app));
    }

    #[test]
    fn test_resize_round_trip_restores_standard_values() {
        let mut app = test_app();
        mount(&mut app);
        let original = app.world().resource::<SceneConfig>().clone();

        for width in [600.0, 1280.0] {
            app.world_mut()
                .resource_mut::<Messages<WindowResized>>()
                .write(WindowResized {
                    window: Entity::PLACEHOLDER,
                    width,
                    height: 720.0,
                });
            app.update();
        }

        assert_eq!(*app.world().resource::<SceneConfig>(), original);
        let world = app.world_mut();
        let controls = world
            .query_filtered::<&PanOrbitCamera, With<GlobeCamera>>()
            .single(world)
            .unwrap();
        assert_eq!(controls.zoom_lower_limit, original.min_distance);
        assert_eq!(controls.zoom_upper_limit, Some(original.max_distance));
    }
}
