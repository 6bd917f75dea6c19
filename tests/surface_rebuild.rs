use bevy::math::Vec3;

use blob_field::field::marching_cubes::{polygonize, SurfaceBuffers};
use blob_field::field::FieldSample;
use blob_field::physics::bodies::world_to_field;
use blob_field::ScalarField;

const ISOLATION: f32 = 1000.0;
const BUDGET: usize = 90_000;

fn body_samples() -> Vec<FieldSample> {
    // A spread of world positions the pool plausibly reaches mid-flight.
    let world_positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.5, 2.0, -0.5),
        Vec3::new(-2.0, 1.0, 1.0),
        Vec3::new(0.5, 3.0, 0.0),
        Vec3::new(-1.0, -1.0, -1.5),
    ];
    world_positions
        .iter()
        .enumerate()
        .map(|(i, &p)| FieldSample {
            position: world_to_field(p),
            strength: 0.5,
            subtract: 10.0,
            color: [0.2 * i as f32, 0.5, 1.0 - 0.2 * i as f32],
        })
        .collect()
}

fn rebuild(field: &mut ScalarField, samples: &[FieldSample], out: &mut SurfaceBuffers) {
    field.reset();
    field.accumulate(samples);
    polygonize(field, ISOLATION, BUDGET, out);
}

#[test]
fn empty_sample_set_yields_empty_mesh() {
    let mut field = ScalarField::new(48);
    let mut out = SurfaceBuffers::default();
    rebuild(&mut field, &[], &mut out);
    assert_eq!(out.triangle_count(), 0);
}

#[test]
fn repeated_rebuilds_are_bit_identical() {
    let samples = body_samples();
    let mut field = ScalarField::new(48);
    let mut first = SurfaceBuffers::default();
    rebuild(&mut field, &samples, &mut first);
    assert!(first.triangle_count() > 0);

    // Same accumulator, same samples, fresh output: identical buffers.
    for _ in 0..3 {
        let mut again = SurfaceBuffers::default();
        rebuild(&mut field, &samples, &mut again);
        assert_eq!(first, again);
    }
}

#[test]
fn stale_field_state_does_not_leak_into_the_next_frame() {
    let samples = body_samples();
    let mut field = ScalarField::new(48);
    let mut reference = SurfaceBuffers::default();
    rebuild(&mut field, &samples, &mut reference);

    // Pollute the accumulator with a different frame, then rebuild the original.
    let mut other = SurfaceBuffers::default();
    rebuild(&mut field, &body_samples()[..2], &mut other);
    let mut out = SurfaceBuffers::default();
    rebuild(&mut field, &samples, &mut out);
    assert_eq!(reference, out);
}

#[test]
fn budget_is_respected_for_dense_fields() {
    let samples = body_samples();
    let mut field = ScalarField::new(48);
    let mut out = SurfaceBuffers::default();
    field.reset();
    field.accumulate(&samples);
    polygonize(&field, ISOLATION, 25, &mut out);
    assert!(out.triangle_count() <= 25);
}
