use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the demo

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            // One fixed step per rendered frame, independent of wall-clock time.
            .insert_resource(TimestepMode::Fixed {
                dt: 1.0 / 60.0,
                substeps: 1,
            })
            .add_systems(Startup, configure_gravity);
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    // Zero gravity: the only steady force on bodies is the centering pull.
    for mut cfg in &mut rapier_cfg {
        cfg.gravity = Vect::ZERO;
    }
}
