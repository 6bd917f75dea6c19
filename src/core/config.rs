use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Blob Field".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BodyPoolConfig {
    /// Number of pooled bodies. Fixed for process lifetime; nothing spawns or despawns later.
    pub count: usize,
    /// Edge length of the spawn cube (bodies start uniformly inside it).
    pub spawn_range: f32,
    /// Vertical offset of the spawn cube's center above the origin.
    pub spawn_height: f32,
    pub collider_radius: f32,
    pub density: f32,
    pub linear_damping: f32,
    /// Magnitude of the constant pull toward the origin.
    pub centering_force: f32,
}
impl Default for BodyPoolConfig {
    fn default() -> Self {
        Self {
            count: 20,
            spawn_range: 3.0,
            spawn_height: 3.0,
            collider_radius: 0.2,
            density: 0.5,
            linear_damping: 2.0,
            centering_force: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    /// World-space travel range: cursor NDC is multiplied by this on both axes.
    pub travel_scale: f32,
    pub collider_radius: f32,
    pub marker_radius: f32,
}
impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            travel_scale: 4.0,
            collider_radius: 0.5,
            marker_radius: 0.35,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Logical samples per axis of the scalar grid.
    pub resolution: usize,
    /// Field value at which the surface is extracted.
    pub isolation: f32,
    /// Per-ball field contribution strength (controls blob size).
    pub strength: f32,
    /// Per-ball falloff subtraction (controls how quickly influence dies off).
    pub subtract: f32,
    /// Hard ceiling on emitted triangles per rebuild.
    pub max_triangles: usize,
    /// Mesh object space [-1,1] is scaled by this into world units.
    pub scale: f32,
}
impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            resolution: 96,
            isolation: 1000.0,
            strength: 0.5,
            subtract: 10.0,
            max_triangles: 90_000,
            scale: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    pub sprite_count: usize,
    /// Base hue in [0,1); each sprite gets a small random jitter around it.
    pub hue: f32,
    pub opacity: f32,
    /// Radius of the ring the sprites are placed on.
    pub radius: f32,
    /// Side length of each billboard quad.
    pub size: f32,
    /// Depth of the ring behind the scene.
    pub z: f32,
}
impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            sprite_count: 8,
            hue: 0.6,
            opacity: 0.2,
            radius: 10.0,
            size: 24.0,
            z: -10.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SimConfig {
    pub window: WindowConfig,
    pub bodies: BodyPoolConfig,
    pub pointer: PointerConfig,
    pub field: FieldConfig,
    pub background: BackgroundConfig,
}

impl SimConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Sanity-check ranges; logs a warning per suspicious value and returns the count.
    pub fn validate(&self) -> usize {
        let mut warnings = 0;
        if self.bodies.count == 0 {
            warn!("bodies.count is 0; the isosurface will stay empty");
            warnings += 1;
        }
        if self.field.resolution < 2 {
            warn!("field.resolution {} is too small to form cells", self.field.resolution);
            warnings += 1;
        }
        if self.field.subtract <= 0.0 {
            warn!("field.subtract must be positive (got {})", self.field.subtract);
            warnings += 1;
        }
        if !(0.0..=1.0).contains(&self.background.opacity) {
            warn!("background.opacity {} outside [0,1]", self.background.opacity);
            warnings += 1;
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.bodies.count, 20);
        assert_eq!(cfg.field.resolution, 96);
        assert_eq!(cfg.field.isolation, 1000.0);
        assert_eq!(cfg.pointer.travel_scale, 4.0);
        assert_eq!(cfg.background.sprite_count, 8);
    }

    #[test]
    fn partial_ron_overrides_only_named_fields() {
        let cfg: SimConfig = ron::from_str("(bodies: (count: 5), field: (resolution: 32))").unwrap();
        assert_eq!(cfg.bodies.count, 5);
        assert_eq!(cfg.field.resolution, 32);
        // Untouched sections keep their defaults
        assert_eq!(cfg.bodies.linear_damping, 2.0);
        assert_eq!(cfg.window.width, 1280.0);
    }

    #[test]
    fn validate_flags_bad_ranges() {
        let mut cfg = SimConfig::default();
        assert_eq!(cfg.validate(), 0);
        cfg.bodies.count = 0;
        cfg.field.subtract = -1.0;
        assert_eq!(cfg.validate(), 2);
    }
}
