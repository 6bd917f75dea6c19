//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (pointer drive + centering forces, consumed by the next Rapier step)
//! 2. Rapier (handled by plugin)
//! 3. SurfaceExtract (sample collection + field rebuild from stepped positions)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // forces / kinematic targets written before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SurfaceExtractSet; // field sampling + mesh rebuild after body positions settle
