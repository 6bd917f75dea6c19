use bevy::prelude::*;

use blob_field::core::config::SimConfig;
use blob_field::GamePlugin;

fn main() {
    // Load configuration (fall back to defaults if missing or malformed)
    let (cfg, err) = SimConfig::load_or_default("assets/config/sim.ron");
    if let Some(e) = err {
        eprintln!("config: using defaults ({e})");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
}
