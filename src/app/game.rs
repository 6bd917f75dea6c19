use bevy::prelude::*;

use crate::core::config::SimConfig;
use crate::core::system_order::{PrePhysicsSet, SurfaceExtractSet};
use crate::physics::bodies::BodyPoolPlugin;
use crate::physics::pointer::PointerPlugin;
use crate::physics::setup::PhysicsSetupPlugin;
use crate::rendering::background::BackgroundPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::surface::SurfacePlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, SurfaceExtractSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            BackgroundPlugin,
            PhysicsSetupPlugin,
            BodyPoolPlugin,
            PointerPlugin,
            SurfacePlugin,
        ))
        .add_systems(Startup, report_config);

        #[cfg(feature = "debug")]
        app.add_systems(Update, debug_frame_stats);
    }
}

fn report_config(cfg: Res<SimConfig>) {
    let warnings = cfg.validate();
    if warnings > 0 {
        warn!("config validation produced {warnings} warning(s)");
    }
    info!(
        "blob field: {} bodies, field {}^3, isolation {}",
        cfg.bodies.count, cfg.field.resolution, cfg.field.isolation
    );
}

#[cfg(feature = "debug")]
fn debug_frame_stats(
    time: Res<Time>,
    mut timer: Local<f32>,
    q_bodies: Query<&crate::core::components::BlobBody>,
    stats: Res<crate::rendering::surface::SurfaceStats>,
) {
    *timer += time.delta_secs();
    if *timer > 1.0 {
        *timer = 0.0;
        info!(
            "t={:.1}s bodies={} surface_tris={}",
            time.elapsed_secs(),
            q_bodies.iter().count(),
            stats.triangles
        );
    }
}
