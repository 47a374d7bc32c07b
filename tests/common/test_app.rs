use bevy::prelude::*;
use blackbird::{
    components::Mission,
    plugins::{FlightPlugin, FlightTick},
    resources::{SimClock, SimConfig},
    utils::Coordinate,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.config.mission = mission;
        self
    }

    pub fn with_route(mut self, start: Coordinate, waypoints: Vec<Coordinate>) -> Self {
        self.config.navigation.start = start;
        self.config.navigation.waypoints = waypoints;
        self
    }

    pub fn with_fuel_level(mut self, gallons: f64) -> Self {
        self.config.fuel.initial_level = gallons;
        self
    }

    pub fn with_tick_minutes(mut self, minutes: f64) -> Self {
        self.config.tick_minutes = minutes;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(FlightPlugin::new(self.config));

        // Run an initial update so the aircraft is spawned
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().resource_mut::<SimClock>().advance();
            self.app.world_mut().run_schedule(FlightTick);
        }
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
