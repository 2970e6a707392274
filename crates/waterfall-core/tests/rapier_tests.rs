#![cfg(feature = "rapier")]

use glam::Vec3;
use waterfall_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn spawn_pose_faces_the_waterfall() {
    let world = RapierWorld::new(&SceneConfig::default());
    let pose = world.pose();
    assert!((pose.translation - Vec3::new(0.0, 0.05, 27.0)).length() < 1e-4);
    assert!(pose.forward().z < -0.99, "forward={:?}", pose.forward());
    assert_eq!(pose.scale, 0.6);
}

#[test]
fn spawn_rotation_is_the_configured_yaw() {
    let mut config = SceneConfig::default();
    config.boat.spawn_yaw = std::f32::consts::FRAC_PI_2;
    let pose = RapierWorld::new(&config).pose();
    let expected = config.boat.spawn_rotation();
    assert!(pose.rotation.dot(expected).abs() > 0.9999, "{:?}", pose.rotation);
    // +90 degrees about Y turns local +Z toward world +X.
    assert!(pose.forward().x > 0.99);
}

#[test]
fn buoyancy_keeps_the_hull_higher_than_free_fall() {
    let mut config = SceneConfig::default();
    config.boat.spawn_position = Vec3::new(0.0, -0.5, 20.0);
    let mut floating = RapierWorld::new(&config);
    let mut sinking = RapierWorld::new(&config);
    let buoyancy = Buoyancy::new(config.buoyancy.floater_area);
    for _ in 0..60 {
        floating.step(DT);
        buoyancy.apply(&mut floating, &config.buoyancy, DT);
        sinking.step(DT);
    }
    assert!(sinking.pose().translation.y < -0.5);
    assert!(floating.pose().translation.y > sinking.pose().translation.y);
}

#[test]
fn holding_forward_drives_toward_the_waterfall() {
    let config = SceneConfig::default();
    let world = RapierWorld::new(&config);
    let mut sim = Simulation::new(config, world).unwrap();
    let mut sink: Vec<AudioCommand> = Vec::new();
    let input = TickInput {
        keys: DirectionalInput {
            forward: true,
            ..Default::default()
        },
        ..Default::default()
    };
    for _ in 0..30 {
        sim.tick(&input, DT, &mut sink);
    }
    let z = sim.world().pose().translation.z;
    assert!(z < 26.0, "boat barely moved: z={z}");
    assert!(sim.world().linear_velocity().z < 0.0);
}
