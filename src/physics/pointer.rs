use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::PointerBall;
use crate::core::config::SimConfig;
use crate::core::system_order::PrePhysicsSet;

/// Last known cursor position in normalized device coords, both axes in [-1,1],
/// Y up (inverted relative to window pixels). Retains its value while the
/// cursor is outside the window.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerNdc(pub Vec2);

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerNdc>()
            .add_systems(Startup, spawn_pointer_ball)
            .add_systems(
                Update,
                (track_cursor, drive_pointer_ball.after(track_cursor)).in_set(PrePhysicsSet),
            );
    }
}

/// Window pixel coordinates (top-left origin) -> NDC with Y flipped up.
pub fn cursor_to_ndc(cursor: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (cursor.x / width) * 2.0 - 1.0,
        -(cursor.y / height) * 2.0 + 1.0,
    )
}

fn spawn_pointer_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<SimConfig>,
) {
    let marker = meshes.add(Sphere::new(cfg.pointer.marker_radius));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.08, 0.08, 0.1),
        perceptual_roughness: 0.2,
        metallic: 0.9,
        ..default()
    });

    // Kinematic: driven by the cursor, pushes dynamic bodies on overlap.
    commands.spawn((
        Mesh3d(marker),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::ZERO),
        RigidBody::KinematicPositionBased,
        Collider::ball(cfg.pointer.collider_radius),
        PointerBall,
    ));
}

fn track_cursor(
    mut cursor_moved: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut ndc: ResMut<PointerNdc>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    for ev in cursor_moved.read() {
        ndc.0 = cursor_to_ndc(ev.position, window.width(), window.height());
    }
}

fn drive_pointer_ball(
    ndc: Res<PointerNdc>,
    cfg: Res<SimConfig>,
    mut q: Query<&mut Transform, With<PointerBall>>,
) {
    let scale = cfg.pointer.travel_scale;
    for mut tf in &mut q {
        tf.translation = Vec3::new(ndc.0.x * scale, ndc.0.y * scale, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_pixel_maps_to_minus_one_plus_one() {
        let ndc = cursor_to_ndc(Vec2::ZERO, 800.0, 600.0);
        assert!((ndc - Vec2::new(-1.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn corners_and_center_stay_in_unit_range() {
        let (w, h) = (800.0, 600.0);
        for cursor in [
            Vec2::new(0.0, 0.0),
            Vec2::new(w, 0.0),
            Vec2::new(0.0, h),
            Vec2::new(w, h),
            Vec2::new(w * 0.5, h * 0.5),
            Vec2::new(123.0, 456.0),
        ] {
            let ndc = cursor_to_ndc(cursor, w, h);
            assert!(ndc.x >= -1.0 && ndc.x <= 1.0, "x out of range: {ndc:?}");
            assert!(ndc.y >= -1.0 && ndc.y <= 1.0, "y out of range: {ndc:?}");
        }
    }

    #[test]
    fn y_axis_is_inverted() {
        let top = cursor_to_ndc(Vec2::new(400.0, 0.0), 800.0, 600.0);
        let bottom = cursor_to_ndc(Vec2::new(400.0, 600.0), 800.0, 600.0);
        assert!(top.y > bottom.y);
        assert_eq!(top.y, 1.0);
        assert_eq!(bottom.y, -1.0);
    }
}
