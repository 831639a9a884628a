//! Desktop runner for the tunnel scene.
use std::path::PathBuf;

use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use tunnelview::spawn_world::demo_scene_config;
use tunnelview::{init_logging, spawn_world_system, DesktopInputPlugin, SceneConfig, TunnelPlugins};

/// VR locomotion and in-world menus for tunnel strata exploration
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Scene description (JSON) providing waypoints and tunables
    #[arg(short, long)]
    scene: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scene = match &args.scene {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("loading scene from {}", path.display()))?,
        None => demo_scene_config(),
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins((TunnelPlugins, DesktopInputPlugin))
        .add_systems(Startup, spawn_world_system);
    scene.apply(&mut app);
    app.run();
    Ok(())
}
