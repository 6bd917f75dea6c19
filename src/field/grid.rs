//! Persistent scalar-field accumulator for metaball contributions.
//! Row-major `resolution^3` value grid plus a parallel RGB grid used for
//! vertex coloring. Buffers are allocated once and reset each frame.

use super::FieldSample;

/// Guard against division by zero at a ball's exact center.
const DIST_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone)]
pub struct ScalarField {
    resolution: usize,
    values: Vec<f32>,
    /// Accumulated (r,g,b) per cell, weighted by the same contribution as `values`.
    colors: Vec<[f32; 3]>,
}

impl ScalarField {
    pub fn new(resolution: usize) -> Self {
        let cells = resolution * resolution * resolution;
        Self {
            resolution,
            values: vec![0.0; cells],
            colors: vec![[0.0; 3]; cells],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.resolution + y) * self.resolution + x
    }

    #[inline]
    pub fn value(&self, x: usize, y: usize, z: usize) -> f32 {
        self.values[self.idx(x, y, z)]
    }

    /// Value with indices clamped to the grid, for gradient estimation at borders.
    #[inline]
    pub fn value_clamped(&self, x: isize, y: isize, z: isize) -> f32 {
        let m = (self.resolution - 1) as isize;
        self.value(
            x.clamp(0, m) as usize,
            y.clamp(0, m) as usize,
            z.clamp(0, m) as usize,
        )
    }

    #[inline]
    pub fn color(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        self.colors[self.idx(x, y, z)]
    }

    /// Zero both grids, keeping the allocations.
    pub fn reset(&mut self) {
        self.values.fill(0.0);
        self.colors.fill([0.0; 3]);
    }

    /// Add one metaball contribution: `strength / (eps + d^2) - subtract` over
    /// the ball's bounded support, accumulating the sample's color with the
    /// same weight. Positions are in field space ([0,1] per axis).
    pub fn add_ball(&mut self, sample: &FieldSample) {
        let res = self.resolution as f32;
        let FieldSample {
            position,
            strength,
            subtract,
            color,
        } = *sample;
        if strength <= 0.0 || subtract <= 0.0 {
            return;
        }

        // Support radius where the contribution crosses zero:
        // strength / r^2 - subtract = 0  =>  r = sqrt(strength / subtract)
        let radius = (strength / subtract).sqrt();
        let max = (self.resolution - 1) as isize;
        let lo = |c: f32| ((((c - radius) * res).floor() as isize).clamp(0, max)) as usize;
        let hi = |c: f32| ((((c + radius) * res).ceil() as isize).clamp(0, max)) as usize;
        let (x0, x1) = (lo(position.x), hi(position.x));
        let (y0, y1) = (lo(position.y), hi(position.y));
        let (z0, z1) = (lo(position.z), hi(position.z));

        for z in z0..=z1 {
            let fz = z as f32 / res - position.z;
            let fz2 = fz * fz;
            for y in y0..=y1 {
                let fy = y as f32 / res - position.y;
                let fy2 = fy * fy;
                let row = self.idx(x0, y, z);
                for (i, x) in (x0..=x1).enumerate() {
                    let fx = x as f32 / res - position.x;
                    let val = strength / (DIST_EPSILON + fx * fx + fy2 + fz2) - subtract;
                    if val > 0.0 {
                        let off = row + i;
                        self.values[off] += val;
                        self.colors[off][0] += color[0] * val;
                        self.colors[off][1] += color[1] * val;
                        self.colors[off][2] += color[2] * val;
                    }
                }
            }
        }
    }

    /// Accumulate every sample of one frame onto a cleared grid.
    pub fn accumulate(&mut self, samples: &[FieldSample]) {
        for s in samples {
            self.add_ball(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;

    fn sample_at(position: Vec3) -> FieldSample {
        FieldSample {
            position,
            strength: 0.5,
            subtract: 10.0,
            color: [1.0, 0.0, 0.0],
        }
    }

    #[test]
    fn reset_zeroes_the_grid_without_realloc() {
        let mut field = ScalarField::new(16);
        field.add_ball(&sample_at(Vec3::splat(0.5)));
        assert!(field.value(8, 8, 8) > 0.0);
        field.reset();
        for z in 0..16 {
            for y in 0..16 {
                for x in 0..16 {
                    assert_eq!(field.value(x, y, z), 0.0);
                    assert_eq!(field.color(x, y, z), [0.0; 3]);
                }
            }
        }
    }

    #[test]
    fn ball_contribution_peaks_at_its_center() {
        let mut field = ScalarField::new(32);
        field.add_ball(&sample_at(Vec3::splat(0.5)));
        let center = field.value(16, 16, 16);
        assert!(center > field.value(18, 16, 16));
        assert_eq!(field.value(0, 0, 0), 0.0);
    }

    #[test]
    fn accumulation_is_additive_and_colored() {
        let mut field = ScalarField::new(32);
        let s = sample_at(Vec3::splat(0.5));
        field.add_ball(&s);
        let single = field.value(16, 16, 16);
        field.add_ball(&s);
        assert!((field.value(16, 16, 16) - 2.0 * single).abs() < 1e-3);
        let c = field.color(16, 16, 16);
        assert!(c[0] > 0.0 && c[1] == 0.0 && c[2] == 0.0);
    }

    #[test]
    fn off_grid_ball_clamps_instead_of_panicking() {
        let mut field = ScalarField::new(16);
        field.add_ball(&sample_at(Vec3::new(-0.2, 1.3, 0.5)));
        field.add_ball(&sample_at(Vec3::splat(2.0)));
    }
}
