mod config;
mod run;
mod time;

pub use config::{
    ConfigError, EngineConfig, FuelConfig, KinematicLimits, NavigationConfig, SimConfig,
};
pub use run::{ActiveAircraft, RunContext};
pub use time::SimClock;
