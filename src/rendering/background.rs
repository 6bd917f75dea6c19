//! Static gradient backdrop: a ring of semi-transparent billboard quads spawned
//! once at startup and never touched again.

use bevy::prelude::*;
use bevy::asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

use crate::core::config::SimConfig;

const GRADIENT_TEXTURE_SIZE: u32 = 128;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_background);
    }
}

/// Square RGBA texture with a soft radial alpha falloff (white core, transparent rim).
fn radial_gradient_image(size: u32) -> Image {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let center = (size as f32 - 1.0) * 0.5;
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - center) / center;
            let dy = (y as f32 - center) / center;
            let d = (dx * dx + dy * dy).sqrt();
            let alpha = (1.0 - d).clamp(0.0, 1.0).powf(2.0);
            data.extend_from_slice(&[255, 255, 255, (alpha * 255.0) as u8]);
        }
    }
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn setup_background(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    cfg: Res<SimConfig>,
) {
    let bg = &cfg.background;
    let gradient = images.add(radial_gradient_image(GRADIENT_TEXTURE_SIZE));
    let quad = meshes.add(Rectangle::new(bg.size, bg.size));
    let mut rng = rand::thread_rng();

    for i in 0..bg.sprite_count {
        let angle = i as f32 / bg.sprite_count as f32 * std::f32::consts::TAU;
        let hue = (bg.hue + rng.gen_range(-0.05..0.05)).rem_euclid(1.0);
        let color = Color::hsla(hue * 360.0, 1.0, 0.5, bg.opacity);

        let material = materials.add(StandardMaterial {
            base_color: color,
            base_color_texture: Some(gradient.clone()),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            Mesh3d(quad.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(angle.cos() * bg.radius, angle.sin() * bg.radius, bg.z)
                .with_rotation(Quat::from_rotation_z(rng.gen_range(0.0..std::f32::consts::TAU))),
        ));
    }
    info!("background ring spawned ({} sprites)", bg.sprite_count);
}
