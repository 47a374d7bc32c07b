use bevy::log::{info, warn};
use bevy::prelude::Component;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::components::{EngineMode, Mission};
use crate::resources::FuelConfig;
use crate::utils::{
    non_negative, CRITICAL_FUEL_PERCENT, LOW_FUEL_PERCENT, RAMJET_CONSUMPTION,
    TURBOJET_CONSUMPTION,
};

/// The aircraft's main fuel tank. Quantities are in gallons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelTank {
    capacity: f64,
    current_level: f64,
    /// Leak rate (gal/min), normal for the airframe on the ground
    leak_rate: f64,
    /// Transfer rate while connected to a tanker (gal/min)
    refuel_rate: f64,
    refueling: bool,
}

impl FuelTank {
    /// Builds a tank, clamping the level into [0, capacity] and rates to non-negative values.
    pub fn new(capacity: f64, current_level: f64, leak_rate: f64, refuel_rate: f64) -> Self {
        let capacity = non_negative(capacity);
        Self {
            capacity,
            current_level: non_negative(current_level).min(capacity),
            leak_rate: non_negative(leak_rate),
            refuel_rate: non_negative(refuel_rate),
            refueling: false,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn current_level(&self) -> f64 {
        self.current_level
    }

    pub fn leak_rate(&self) -> f64 {
        self.leak_rate
    }

    pub fn refuel_rate(&self) -> f64 {
        self.refuel_rate
    }

    pub fn is_refueling(&self) -> bool {
        self.refueling
    }

    fn drain(&mut self, amount: f64) {
        self.current_level = (self.current_level - non_negative(amount)).max(0.0);
    }

    fn fill(&mut self, amount: f64) {
        self.current_level = (self.current_level + non_negative(amount)).min(self.capacity);
    }
}

impl From<&FuelConfig> for FuelTank {
    fn from(config: &FuelConfig) -> Self {
        FuelTank::new(
            config.capacity,
            config.initial_level,
            config.leak_rate,
            config.refuel_rate,
        )
    }
}

/// Behavioural regime of the fuel system, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelRegime {
    Exhausted,
    Refueling,
    Critical,
    Low,
    NormalBurn,
}

/// Consumption, leak and refuel flows for one tank.
#[derive(Component, Debug, Clone)]
pub struct FuelSystem {
    tank: FuelTank,
    /// Consumption for the current engine mode before the mission multiplier (gal/hr)
    base_rate: f64,
    /// Effective consumption, always `base_rate * mission multiplier` (gal/hr)
    consumption_rate: f64,
    engine_mode: EngineMode,
    mission: Mission,
}

impl Default for FuelSystem {
    fn default() -> Self {
        Self::new(FuelTank::from(&FuelConfig::default()))
    }
}

impl FuelSystem {
    pub fn new(tank: FuelTank) -> Self {
        let engine_mode = EngineMode::Turbojet;
        let mission = Mission::Standard;
        let base_rate = base_consumption(engine_mode);
        Self {
            tank,
            base_rate,
            consumption_rate: base_rate * mission.consumption_multiplier(),
            engine_mode,
            mission,
        }
    }

    pub fn tank(&self) -> &FuelTank {
        &self.tank
    }

    pub fn consumption_rate(&self) -> f64 {
        self.consumption_rate
    }

    pub fn base_consumption_rate(&self) -> f64 {
        self.base_rate
    }

    pub fn engine_mode(&self) -> EngineMode {
        self.engine_mode
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    /// Remaining fuel as a percentage of capacity.
    pub fn fuel_level_percent(&self) -> f64 {
        if self.tank.capacity <= 0.0 {
            return 0.0;
        }
        self.tank.current_level / self.tank.capacity * 100.0
    }

    pub fn fuel_amount(&self) -> f64 {
        self.tank.current_level
    }

    pub fn needs_refueling(&self) -> bool {
        self.fuel_level_percent() < LOW_FUEL_PERCENT
    }

    pub fn is_critical(&self) -> bool {
        self.fuel_level_percent() < CRITICAL_FUEL_PERCENT
    }

    pub fn regime(&self) -> FuelRegime {
        if self.tank.current_level <= 0.0 {
            FuelRegime::Exhausted
        } else if self.tank.refueling {
            FuelRegime::Refueling
        } else if self.is_critical() {
            FuelRegime::Critical
        } else if self.needs_refueling() {
            FuelRegime::Low
        } else {
            FuelRegime::NormalBurn
        }
    }

    /// Time until empty at the current consumption rate, zero if nothing is burning.
    ///
    /// Saturates at [`Duration::MAX`] for tanks too large to express.
    pub fn estimated_flight_time(&self) -> Duration {
        if self.consumption_rate <= 0.0 {
            return Duration::ZERO;
        }
        let hours = self.tank.current_level / self.consumption_rate;
        Duration::try_from_secs_f64(hours * 3600.0).unwrap_or(Duration::MAX)
    }

    /// Reclassifies the engine from Mach and updates the burn rate.
    pub fn update_engine_type(&mut self, mach: f64) {
        self.set_engine_mode(EngineMode::classify(mach));
    }

    /// Applies an engine mode that was already classified for this tick.
    pub fn set_engine_mode(&mut self, mode: EngineMode) {
        if mode != self.engine_mode {
            info!("Fuel burn switched from {} to {}", self.engine_mode, mode);
        }
        self.engine_mode = mode;
        self.base_rate = base_consumption(mode);
        self.recompute_rate();
    }

    /// Scales the base consumption for the mission. Calling it again replaces the multiplier.
    pub fn set_mission_type(&mut self, mission: Mission) {
        self.mission = mission;
        self.recompute_rate();
    }

    pub fn consume_fuel(&mut self, duration: Duration) {
        let was_critical = self.is_critical();
        self.tank.drain(self.consumption_rate * hours(duration));

        if self.is_critical() && !was_critical {
            warn!(
                "Fuel critical: {:.0} gal ({:.1}%)",
                self.tank.current_level,
                self.fuel_level_percent()
            );
        }
    }

    pub fn leak_fuel(&mut self, duration: Duration) {
        self.tank.drain(self.tank.leak_rate * minutes(duration));
    }

    pub fn start_refueling(&mut self) {
        self.tank.refueling = true;
        info!("Starting aerial refueling at {:.1}%", self.fuel_level_percent());
    }

    pub fn stop_refueling(&mut self) {
        self.tank.refueling = false;
        info!("Refueling complete at {:.1}%", self.fuel_level_percent());
    }

    /// Transfers fuel from the tanker; does nothing unless refueling has started.
    pub fn refuel(&mut self, duration: Duration) {
        if !self.tank.refueling {
            return;
        }
        let rate = self.tank.refuel_rate;
        self.tank.fill(rate * minutes(duration));
    }

    pub fn summary(&self) -> FuelSummary {
        FuelSummary {
            fuel_amount: self.tank.current_level,
            fuel_percent: self.fuel_level_percent(),
            consumption_rate: self.consumption_rate,
            engine_mode: self.engine_mode,
            mission: self.mission,
            refueling: self.tank.refueling,
            regime: self.regime(),
            estimated_flight_time_minutes: self.estimated_flight_time().as_secs_f64() / 60.0,
        }
    }

    fn recompute_rate(&mut self) {
        self.consumption_rate = self.base_rate * self.mission.consumption_multiplier();
    }
}

fn base_consumption(mode: EngineMode) -> f64 {
    match mode {
        EngineMode::Turbojet => TURBOJET_CONSUMPTION,
        EngineMode::Ramjet | EngineMode::Scramjet => RAMJET_CONSUMPTION,
    }
}

fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Reporting view of the fuel system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSummary {
    pub fuel_amount: f64,
    pub fuel_percent: f64,
    pub consumption_rate: f64,
    pub engine_mode: EngineMode,
    pub mission: Mission,
    pub refueling: bool,
    pub regime: FuelRegime,
    pub estimated_flight_time_minutes: f64,
}

impl fmt::Display for FuelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fuel System Status:")?;
        writeln!(
            f,
            "  Fuel Level: {:.0} gallons ({:.1}%)",
            self.fuel_amount, self.fuel_percent
        )?;
        writeln!(f, "  Consumption Rate: {:.0} gal/hr", self.consumption_rate)?;
        writeln!(f, "  Engine Type: {}", self.engine_mode)?;
        writeln!(f, "  Mission Type: {}", self.mission)?;
        writeln!(f, "  Refueling: {}", self.refueling)?;
        write!(
            f,
            "  Estimated Flight Time: {:.0} min",
            self.estimated_flight_time_minutes
        )
    }
}
