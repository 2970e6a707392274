use glam::{Quat, Vec3};
use waterfall_core::*;

#[derive(Default)]
struct RecordingWorld {
    pose: BodyPose,
    point_impulses: Vec<(Vec3, Vec3)>,
}

impl PhysicsWorld for RecordingWorld {
    fn pose(&self) -> BodyPose {
        self.pose
    }
    fn apply_impulse(&mut self, _impulse: Vec3) {}
    fn apply_torque_impulse(&mut self, _torque: Vec3) {}
    fn apply_impulse_at_point(&mut self, impulse: Vec3, point: Vec3) {
        self.point_impulses.push((impulse, point));
    }
    fn step(&mut self, _dt: f32) {}
}

#[test]
fn floaters_span_bow_and_stern() {
    let f = FloaterArea {
        width: 1.5,
        depth: 2.0,
    }
    .floaters();
    assert_eq!(f[0], Vec3::new(-0.75, 0.0, 1.6));
    assert_eq!(f[1], Vec3::new(0.75, 0.0, 1.6));
    assert_eq!(f[2], Vec3::new(-0.75, 0.0, -0.8));
    assert_eq!(f[3], Vec3::new(0.75, 0.0, -0.8));
}

#[test]
fn dry_sample_gets_nothing() {
    assert!(floater_impulse(0.06, 0.05, 1.5, 0.016).is_none());
    assert!(floater_impulse(0.05, 0.05, 1.5, 0.016).is_none());
}

#[test]
fn impulse_grows_with_depth() {
    let mut prev = 0.0;
    for i in 1..=20 {
        let y = 0.05 - i as f32 * 0.05;
        let imp = floater_impulse(y, 0.05, 1.5, 0.016).expect("submerged");
        assert_eq!(imp.x, 0.0);
        assert_eq!(imp.z, 0.0);
        assert!(imp.y > prev, "not increasing at depth step {i}");
        prev = imp.y;
    }
}

#[test]
fn impulse_magnitude_matches_formula() {
    let imp = floater_impulse(-0.95, 0.05, 1.5, 0.02).unwrap();
    let expected = 1.0 * 1.5 * 0.02 * 10.0;
    assert!((imp.y - expected).abs() < 1e-5);
}

#[test]
fn stalled_frame_is_clamped() {
    let stalled = floater_impulse(-0.95, 0.05, 1.5, 1.0).unwrap();
    let capped = floater_impulse(-0.95, 0.05, 1.5, 0.05).unwrap();
    assert!((stalled.y - capped.y).abs() < 1e-6);
    assert!((stalled.y - 1.0 * 1.5 * 0.05 * 10.0).abs() < 1e-5);
}

#[test]
fn impulses_land_on_submerged_world_points() {
    let buoyancy = Buoyancy::new(FloaterArea::default());
    let config = BuoyancyConfig::default();
    // Level hull sitting 0.2 under the surface: all four floaters are wet.
    let mut world = RecordingWorld {
        pose: BodyPose::new(Vec3::new(3.0, -0.15, 20.0), Quat::IDENTITY, 0.6),
        ..Default::default()
    };
    assert_eq!(buoyancy.apply(&mut world, &config, 0.016), 4);
    let expected_points = buoyancy.sample_points(&world.pose);
    for ((imp, point), want) in world.point_impulses.iter().zip(expected_points) {
        assert_eq!(*point, want);
        assert!(imp.y > 0.0);
    }
    assert!((world.point_impulses[0].1.z - (20.0 + 1.6 * 0.6)).abs() < 1e-5);
}

#[test]
fn tilted_hull_only_lifts_the_low_end() {
    let buoyancy = Buoyancy::new(FloaterArea::default());
    let config = BuoyancyConfig::default();
    // Nose down: bow floaters dip under, stern floaters rise above.
    let pitch = Quat::from_rotation_x(0.3);
    let mut world = RecordingWorld {
        pose: BodyPose::new(Vec3::new(0.0, 0.05, 0.0), pitch, 1.0),
        ..Default::default()
    };
    let points = buoyancy.sample_points(&world.pose);
    assert!(points[0].y < 0.05 && points[2].y > 0.05);
    assert_eq!(buoyancy.apply(&mut world, &config, 0.016), 2);
    for (_, p) in &world.point_impulses {
        assert!(p.z > 0.0, "only bow points expected, got {p:?}");
    }
}

#[test]
fn set_area_rebuilds_floaters() {
    let mut b = Buoyancy::new(FloaterArea::default());
    b.set_area(FloaterArea {
        width: 4.0,
        depth: 1.0,
    });
    assert_eq!(b.floaters()[1], Vec3::new(2.0, 0.0, 0.8));
}
