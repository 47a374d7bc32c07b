use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

use crate::components::{Mission, NavigationSystem};
use crate::utils::{Coordinate, MAX_TICK_MINUTES};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ConfigError {
    fn invalid(name: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Tank and flow rates, all in gallons and gallons per minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelConfig {
    pub capacity: f64,
    pub initial_level: f64,
    pub leak_rate: f64,
    pub refuel_rate: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            capacity: 12000.0,
            initial_level: 10000.0,
            leak_rate: 0.5,
            refuel_rate: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Mach margin required before falling back to a slower mode; 0 disables hysteresis
    pub mode_dead_band: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicLimits {
    /// Maximum velocity (mph)
    pub max_velocity: f64,
    /// Largest altitude change per climb or descent step (ft)
    pub max_climb_rate: f64,
}

impl Default for KinematicLimits {
    fn default() -> Self {
        Self {
            max_velocity: 2500.0,
            max_climb_rate: 10000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub system: NavigationSystem,
    pub start: Coordinate,
    pub waypoints: Vec<Coordinate>,
}

impl NavigationConfig {
    /// Florida, across the Atlantic to Moscow, Siberia, the Pacific and back to Virginia.
    pub fn world_tour() -> Self {
        let route = [
            (28.5383, -81.3792),  // Kennedy Space Center
            (40.0, -40.0),        // Mid-Atlantic
            (55.7558, 37.6173),   // Moscow
            (60.0, 100.0),        // Siberia
            (35.0, -160.0),       // Mid-Pacific
            (36.7783, -119.4179), // California coast
            (37.4316, -78.6569),  // Virginia
        ];
        let waypoints: Vec<Coordinate> = route.into_iter().map(Coordinate::from).collect();
        Self {
            system: NavigationSystem::Gps,
            start: waypoints[0],
            waypoints,
        }
    }
}

/// Everything needed to set up one simulated aircraft.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub name: String,
    pub mission: Mission,
    /// Simulated time per tick (minutes)
    pub tick_minutes: f64,
    pub fuel: FuelConfig,
    pub engine: EngineConfig,
    pub kinematics: KinematicLimits,
    pub navigation: NavigationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            name: "SR-71".to_string(),
            mission: Mission::Standard,
            tick_minutes: 2.0,
            fuel: FuelConfig::default(),
            engine: EngineConfig::default(),
            kinematics: KinematicLimits::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn world_tour() -> Self {
        Self {
            mission: Mission::Reconnaissance,
            navigation: NavigationConfig::world_tour(),
            ..Self::default()
        }
    }

    /// Loads a config from YAML, or JSON when the file ends in `.json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: SimConfig = if is_json {
            serde_json::from_reader(file)?
        } else {
            serde_yaml::from_reader(file)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fuel = &self.fuel;
        for (name, value) in [
            ("tick_minutes", self.tick_minutes),
            ("fuel.capacity", fuel.capacity),
            ("fuel.initial_level", fuel.initial_level),
            ("fuel.leak_rate", fuel.leak_rate),
            ("fuel.refuel_rate", fuel.refuel_rate),
            ("engine.mode_dead_band", self.engine.mode_dead_band),
            ("kinematics.max_velocity", self.kinematics.max_velocity),
            ("kinematics.max_climb_rate", self.kinematics.max_climb_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, "must be a finite number"));
            }
        }
        if !(fuel.capacity > 0.0) {
            return Err(ConfigError::invalid("fuel.capacity", "must be positive"));
        }
        if !(0.0..=fuel.capacity).contains(&fuel.initial_level) {
            return Err(ConfigError::invalid(
                "fuel.initial_level",
                format!("must be within [0, {}]", fuel.capacity),
            ));
        }
        for (name, rate) in [
            ("fuel.leak_rate", fuel.leak_rate),
            ("fuel.refuel_rate", fuel.refuel_rate),
            ("engine.mode_dead_band", self.engine.mode_dead_band),
        ] {
            if !(rate >= 0.0) {
                return Err(ConfigError::invalid(name, "must not be negative"));
            }
        }
        if !(self.tick_minutes > 0.0 && self.tick_minutes <= MAX_TICK_MINUTES) {
            return Err(ConfigError::invalid(
                "tick_minutes",
                format!("must be within (0, {MAX_TICK_MINUTES}]"),
            ));
        }
        if !(self.kinematics.max_velocity > 0.0) {
            return Err(ConfigError::invalid("kinematics.max_velocity", "must be positive"));
        }
        if !(self.kinematics.max_climb_rate > 0.0) {
            return Err(ConfigError::invalid("kinematics.max_climb_rate", "must be positive"));
        }
        if !self.navigation.start.is_valid() {
            return Err(ConfigError::invalid(
                "navigation.start",
                format!("{} is not a valid coordinate", self.navigation.start),
            ));
        }
        if let Some((index, waypoint)) = self
            .navigation
            .waypoints
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_valid())
        {
            return Err(ConfigError::invalid(
                &format!("navigation.waypoints[{index}]"),
                format!("{waypoint} is not a valid coordinate"),
            ));
        }
        Ok(())
    }
}
