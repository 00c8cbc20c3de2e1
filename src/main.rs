use bevy::prelude::*;
use std::path::PathBuf;

use townflyer::{
    plugins::{add_flight_plugins, ScenePlugin},
    resources::{ConfigError, SessionConfig},
};

/// Where the session config came from, reported once logging is up.
enum ConfigSource {
    File(PathBuf),
    Defaults,
    Fallback(PathBuf, ConfigError),
}

fn load_config() -> (SessionConfig, ConfigSource) {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| SessionConfig::default_path().filter(|p| p.exists()));

    match path {
        Some(path) => match SessionConfig::from_file(&path) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(e) => (SessionConfig::default(), ConfigSource::Fallback(path, e)),
        },
        None => (SessionConfig::default(), ConfigSource::Defaults),
    }
}

fn main() {
    let (config, source) = load_config();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!("Town Flyer - {}", config.variant.display_name()),
            ..default()
        }),
        ..default()
    }));

    match source {
        ConfigSource::File(path) => info!("Loaded session config from {}", path.display()),
        ConfigSource::Defaults => info!("No session config given, using defaults"),
        ConfigSource::Fallback(path, e) => {
            error!("Failed to load {}: {}. Using defaults", path.display(), e)
        }
    }

    add_flight_plugins(&mut app, config);
    app.add_plugins(ScenePlugin).run();
}
