mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use common::*;
use std::io::Write;
use tempfile::NamedTempFile;
use townflyer::{
    components::AirplaneVariant,
    resources::{ConfigError, ControlKey, InputSnapshot, SessionConfig},
};

const SESSION_YAML: &str = r#"
variant: glider
tick_hz: 30.0
flight:
  accel: 0.02
camera:
  distance: 40.0
bindings:
  throttle_up: ArrowUp
"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_session_file_drives_the_app() {
    let file = write_temp(SESSION_YAML);
    let config = SessionConfig::from_file(file.path()).expect("valid session file");
    assert_eq!(config.variant, AirplaneVariant::Glider);
    assert_eq!(config.bindings.throttle_up, KeyCode::ArrowUp);
    // Untouched sections keep their defaults.
    assert_eq!(config.bindings.brake, KeyCode::Space);
    assert_relative_eq!(config.flight.rot_accel, 0.03);

    let mut app = TestAppBuilder::new().with_config(config).build();
    assert_eq!(app.session().variant, AirplaneVariant::Glider);

    let fixed = app.app.world().resource::<Time<Fixed>>();
    assert_relative_eq!(fixed.timestep().as_secs_f64(), 1.0 / 30.0, epsilon = 1e-9);

    // Remapped throttle key feeds the snapshot.
    app.press_key(KeyCode::ArrowUp);
    app.run_frame();
    assert!(app
        .app
        .world()
        .resource::<InputSnapshot>()
        .is_pressed(ControlKey::ThrottleUp));
    app.run_ticks(5);
    assert_relative_eq!(app.session().flight.speed, 0.1, epsilon = 1e-9);

    // The longer chase distance shows up in the camera pose.
    let pose = app.session().camera_pose().expect("follow mode");
    let offset = pose.eye - app.session().position();
    assert_relative_eq!(offset.z, -40.0, epsilon = 1e-9);
}

#[test]
fn test_old_key_no_longer_throttles() {
    let file = write_temp(SESSION_YAML);
    let config = SessionConfig::from_file(file.path()).expect("valid session file");
    let mut app = TestAppBuilder::new().with_config(config).build();

    app.press_key(KeyCode::KeyW);
    app.run_frame();
    app.run_ticks(5);
    assert_eq!(app.session().flight.speed, 0.0);
}

#[test]
fn test_saved_session_loads_back() {
    let file = NamedTempFile::new().expect("temp file");
    let config = create_test_session_config();
    config.save(file.path()).expect("save session");

    let loaded = SessionConfig::from_file(file.path()).expect("load session");
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_session_files_are_rejected() {
    let negative_speed = write_temp("flight:\n  max_air_speed: -1.0\n");
    assert!(matches!(
        SessionConfig::from_file(negative_speed.path()),
        Err(ConfigError::ValidationError(_))
    ));

    let shared_key = write_temp("bindings:\n  reset: KeyC\n");
    assert!(matches!(
        SessionConfig::from_file(shared_key.path()),
        Err(ConfigError::ValidationError(_))
    ));

    let unknown_variant = write_temp("variant: zeppelin\n");
    assert!(matches!(
        SessionConfig::from_file(unknown_variant.path()),
        Err(ConfigError::YamlError(_))
    ));
}
