pub mod grid;
pub mod marching_cubes;

use bevy::prelude::*;

/// One body's per-frame contribution to the scalar field. Collected fresh
/// every frame and discarded after the rebuild; never owned across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Center in field space ([0,1] per axis).
    pub position: Vec3,
    pub strength: f32,
    pub subtract: f32,
    pub color: [f32; 3],
}
