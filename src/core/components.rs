use bevy::prelude::*;

/// One of the pooled dynamic bodies feeding the isosurface.
#[derive(Component)]
pub struct BlobBody;

/// Tint carried by each blob body into the field's color accumulator.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodyColor(pub Color);

/// The kinematic cursor-driven collider (and its visible marker sphere).
#[derive(Component)]
pub struct PointerBall;

/// Entity holding the rebuilt isosurface mesh.
#[derive(Component)]
pub struct SurfaceMesh;
