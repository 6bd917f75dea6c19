//! Per-frame isosurface rebuild: body positions are mapped into field space,
//! accumulated into the scalar grid, and re-polygonized into a persistent
//! `Mesh` asset. The whole pass is a pure function of the frame's sample set.

use bevy::prelude::*;
use bevy::asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use crate::core::components::{BlobBody, BodyColor, SurfaceMesh};
use crate::core::config::SimConfig;
use crate::core::system_order::SurfaceExtractSet;
use crate::field::grid::ScalarField;
use crate::field::marching_cubes::{polygonize, SurfaceBuffers};
use crate::field::FieldSample;
use crate::physics::bodies::world_to_field;

/// Persistent field grid + scratch output buffers; allocated once at startup.
#[derive(Resource)]
pub struct IsosurfaceField {
    pub grid: ScalarField,
    buffers: SurfaceBuffers,
}

/// This frame's metaball contributions, cleared and refilled every frame.
#[derive(Resource, Default, Debug)]
pub struct FieldSamples(pub Vec<FieldSample>);

/// Counters surfaced to the debug log.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SurfaceStats {
    pub triangles: usize,
}

#[derive(Resource)]
struct SurfaceMeshHandle(Handle<Mesh>);

pub struct SurfacePlugin;

impl Plugin for SurfacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldSamples>()
            .init_resource::<SurfaceStats>()
            .add_systems(Startup, setup_surface)
            .add_systems(
                Update,
                (collect_field_samples, rebuild_surface)
                    .chain()
                    .in_set(SurfaceExtractSet),
            );
    }
}

fn setup_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<SimConfig>,
) {
    commands.insert_resource(IsosurfaceField {
        grid: ScalarField::new(cfg.field.resolution),
        buffers: SurfaceBuffers::default(),
    });

    // Starts empty (zero vertices); refilled by the first rebuild.
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, Vec::<[f32; 3]>::new());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, Vec::<[f32; 3]>::new());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, Vec::<[f32; 4]>::new());
    let handle = meshes.add(mesh);
    commands.insert_resource(SurfaceMeshHandle(handle.clone()));

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.35,
        metallic: 0.2,
        // Winding depends on the field's sign convention; render both faces.
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(handle),
        MeshMaterial3d(material),
        // Object space [-1,1]^3 scaled into world so that world_to_field is the
        // exact inverse of this transform.
        Transform::from_scale(Vec3::splat(cfg.field.scale)),
        SurfaceMesh,
    ));
}

/// One sample per live body, positioned in field space and tinted linearly.
fn collect_field_samples(
    cfg: Res<SimConfig>,
    mut samples: ResMut<FieldSamples>,
    q: Query<(&Transform, &BodyColor), With<BlobBody>>,
) {
    samples.0.clear();
    for (tf, color) in &q {
        let lin = color.0.to_linear();
        samples.0.push(FieldSample {
            position: world_to_field(tf.translation),
            strength: cfg.field.strength,
            subtract: cfg.field.subtract,
            color: [lin.red, lin.green, lin.blue],
        });
    }
}

fn rebuild_surface(
    cfg: Res<SimConfig>,
    samples: Res<FieldSamples>,
    mut field: ResMut<IsosurfaceField>,
    handle: Res<SurfaceMeshHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut stats: ResMut<SurfaceStats>,
) {
    let IsosurfaceField { grid, buffers } = &mut *field;
    grid.reset();
    grid.accumulate(&samples.0);
    polygonize(grid, cfg.field.isolation, cfg.field.max_triangles, buffers);
    stats.triangles = buffers.triangle_count();

    let Some(mesh) = meshes.get_mut(&handle.0) else {
        return;
    };
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, buffers.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, buffers.normals.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, buffers.colors.clone());
}
