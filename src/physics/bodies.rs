use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::core::components::{BlobBody, BodyColor};
use crate::core::config::SimConfig;
use crate::core::system_order::PrePhysicsSet;

/// Affine map from world space into the scalar field's [0,1] sample space.
pub const FIELD_SCALE: f32 = 0.1;
pub const FIELD_OFFSET: Vec3 = Vec3::splat(0.5);

/// Squared distance under which a body counts as sitting on the origin and
/// the centering pull clamps to zero instead of normalizing a zero vector.
const CENTER_EPSILON_SQ: f32 = 1e-8;

pub struct BodyPoolPlugin;

impl Plugin for BodyPoolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies)
            .add_systems(Update, apply_centering_force.in_set(PrePhysicsSet));
    }
}

pub fn spawn_bodies(mut commands: Commands, cfg: Res<SimConfig>) {
    let mut rng = rand::thread_rng();
    let c = &cfg.bodies;
    let half = c.spawn_range * 0.5;

    for _ in 0..c.count {
        let x = rng.gen_range(-half..half);
        let y = rng.gen_range(-half..half) + c.spawn_height;
        let z = rng.gen_range(-half..half);
        let color = Color::hsl(rng.gen::<f32>() * 360.0, 1.0, 0.5);

        commands.spawn((
            Transform::from_translation(Vec3::new(x, y, z)),
            GlobalTransform::default(),
            RigidBody::Dynamic,
            Collider::ball(c.collider_radius),
            ColliderMassProperties::Density(c.density),
            Damping {
                linear_damping: c.linear_damping,
                angular_damping: 0.0,
            },
            ExternalForce::default(),
            BlobBody,
            BodyColor(color),
        ));
    }
    info!("spawned {} blob bodies", c.count);
}

/// Constant-magnitude pull toward the origin; exactly zero on the origin itself.
pub fn centering_force(position: Vec3, magnitude: f32) -> Vec3 {
    if position.length_squared() < CENTER_EPSILON_SQ {
        return Vec3::ZERO;
    }
    -position.normalize() * magnitude
}

/// World position -> field sample space (scale 0.1, offset to the grid center).
pub fn world_to_field(position: Vec3) -> Vec3 {
    position * FIELD_SCALE + FIELD_OFFSET
}

/// Overwrites each body's external force every frame: forces never carry over,
/// so assignment doubles as the clear-then-apply step.
fn apply_centering_force(
    cfg: Res<SimConfig>,
    mut q: Query<(&Transform, &mut ExternalForce), With<BlobBody>>,
) {
    let magnitude = cfg.bodies.centering_force;
    for (tf, mut ext_force) in &mut q {
        ext_force.force = centering_force(tf.translation, magnitude);
        ext_force.torque = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_points_at_origin_with_constant_magnitude() {
        let f = centering_force(Vec3::new(3.0, 0.0, 0.0), 0.5);
        assert!((f - Vec3::new(-0.5, 0.0, 0.0)).length() < 1e-6);

        // Magnitude does not grow with distance
        let far = centering_force(Vec3::new(100.0, 0.0, 0.0), 0.5);
        assert!((far.length() - 0.5).abs() < 1e-6);

        // Direction always opposes the position vector
        let p = Vec3::new(1.0, -2.0, 0.5);
        let f = centering_force(p, 0.5);
        assert!(f.dot(p) < 0.0);
    }

    #[test]
    fn force_clamps_to_zero_at_origin() {
        let f = centering_force(Vec3::ZERO, 0.5);
        assert_eq!(f, Vec3::ZERO);
        assert!(f.is_finite());
    }

    #[test]
    fn field_mapping_is_the_documented_affine_transform() {
        assert_eq!(
            world_to_field(Vec3::new(3.0, 0.0, 0.0)),
            Vec3::new(0.8, 0.5, 0.5)
        );
        assert_eq!(world_to_field(Vec3::ZERO), Vec3::splat(0.5));
        let p = Vec3::new(-1.25, 2.5, 0.75);
        assert!((world_to_field(p) - (p * 0.1 + Vec3::splat(0.5))).length() < 1e-7);
    }
}
