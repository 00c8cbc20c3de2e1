use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use townflyer::{
    components::{MainCamera, OrbitController, PlayerController},
    plugins::add_flight_plugins,
    resources::{ControlKey, FlightSession, InputSnapshot, SessionConfig},
};

/// Builder for a headless flight app.
pub struct TestAppBuilder {
    config: SessionConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, InputPlugin));

        // Virtual time never advances, so FixedUpdate only runs when a test
        // asks for a tick.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

        add_flight_plugins(&mut app, self.config);

        // Run startup.
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run `ticks` fixed flight ticks.
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run one full frame: input, camera and transform systems.
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn session(&self) -> &FlightSession {
        self.app.world().resource::<FlightSession>()
    }

    pub fn session_mut(&mut self) -> Mut<FlightSession> {
        self.app.world_mut().resource_mut::<FlightSession>()
    }

    /// Set the held controls directly, bypassing the keyboard.
    pub fn hold(&mut self, keys: &[ControlKey]) {
        let mut input = self.app.world_mut().resource_mut::<InputSnapshot>();
        for key in ControlKey::ALL {
            input.set(key, keys.contains(&key));
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    pub fn airplane_transform(&mut self) -> Transform {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<PlayerController>>();
        *query.single(world)
    }

    pub fn camera_transform(&mut self) -> Transform {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<MainCamera>>();
        *query.single(world)
    }

    pub fn orbit(&mut self) -> OrbitController {
        let world = self.app.world_mut();
        let mut query = world.query::<&OrbitController>();
        query.single(world).clone()
    }
}
