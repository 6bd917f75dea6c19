use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalForce;

use blob_field::core::config::SimConfig;
use blob_field::physics::bodies::BodyPoolPlugin;
use blob_field::BlobBody;

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SimConfig::default())
        .add_plugins(BodyPoolPlugin);
    app
}

#[test]
fn pool_size_is_fixed_across_frames() {
    let mut app = headless_app();
    for _ in 0..5 {
        app.update();
        let count = app
            .world_mut()
            .query_filtered::<(), With<BlobBody>>()
            .iter(app.world())
            .count();
        assert_eq!(count, 20);
    }
}

#[test]
fn bodies_spawn_inside_the_configured_cube() {
    let mut app = headless_app();
    app.update();
    let cfg = SimConfig::default();
    let half = cfg.bodies.spawn_range * 0.5;
    let mut q = app
        .world_mut()
        .query_filtered::<&Transform, With<BlobBody>>();
    for tf in q.iter(app.world()) {
        let p = tf.translation;
        assert!(p.x.abs() <= half && p.z.abs() <= half, "out of cube: {p}");
        assert!(
            (p.y - cfg.bodies.spawn_height).abs() <= half,
            "out of cube: {p}"
        );
    }
}

#[test]
fn centering_force_is_written_every_frame_and_finite() {
    let mut app = headless_app();
    app.update();
    let mut q = app
        .world_mut()
        .query_filtered::<(&Transform, &ExternalForce), With<BlobBody>>();
    for (tf, force) in q.iter(app.world()) {
        assert!(force.force.is_finite());
        let expected = SimConfig::default().bodies.centering_force;
        assert!((force.force.length() - expected).abs() < 1e-5);
        // Pull always opposes the position vector (bodies spawn off-origin)
        assert!(force.force.dot(tf.translation) < 0.0);
    }
}
