use bevy::prelude::*;
use std::time::Duration;

use crate::components::{
    AircraftKinematics, AvionicsController, EngineController, FlightRecorder, FuelSystem,
    Maneuver, ManeuverQueue, Mission,
};
use crate::plugins::{FlightPlugin, FlightTick};
use crate::report::{FlightOutcome, SimulationReport};
use crate::resources::{ActiveAircraft, RunContext, SimClock, SimConfig};
use crate::utils::SimError;

/// Tick-driven driver for a single aircraft.
///
/// Commands are queued as [`Maneuver`]s and applied on the next tick. Fuel and avionics
/// operations that are not part of the per-tick update go through [`Self::fuel_mut`] and
/// [`Self::avionics_mut`].
pub struct FlightSimulation {
    app: App,
    aircraft: Entity,
}

impl FlightSimulation {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        Self::from_app(App::new(), config)
    }

    /// Builds on a caller-prepared app, e.g. one that already has logging installed.
    pub fn from_app(mut app: App, config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        app.add_plugins(FlightPlugin::new(config));
        app.update();

        let aircraft = app
            .world()
            .get_resource::<ActiveAircraft>()
            .map(|active| active.0)
            .ok_or_else(|| SimError::StateError("aircraft was not spawned".to_string()))?;

        Ok(Self { app, aircraft })
    }

    pub fn command(&mut self, maneuver: Maneuver) -> Result<(), SimError> {
        self.component_mut::<ManeuverQueue>()?.push(maneuver);
        Ok(())
    }

    /// Switches mission profile: cruise speed on the next tick, burn multiplier with it.
    pub fn set_mission(&mut self, mission: Mission) -> Result<(), SimError> {
        info!("Mission set to {}", mission);
        self.command(Maneuver::AdjustForMission(mission))
    }

    /// Advances the clock by the configured tick and runs one update.
    pub fn tick(&mut self) {
        self.app.world_mut().resource_mut::<SimClock>().advance();
        self.app.world_mut().run_schedule(FlightTick);
    }

    /// Runs one update covering `elapsed` of simulated time.
    pub fn tick_for(&mut self, elapsed: Duration) {
        self.app
            .world_mut()
            .resource_mut::<SimClock>()
            .advance_by(elapsed);
        self.app.world_mut().run_schedule(FlightTick);
    }

    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Ticks until every queued maneuver has completed, up to `max_ticks`. Returns the ticks run.
    pub fn run_until_idle(&mut self, max_ticks: u64) -> Result<u64, SimError> {
        let mut ticks = 0;
        while ticks < max_ticks && !self.component::<ManeuverQueue>()?.is_empty() {
            self.tick();
            ticks += 1;
        }
        Ok(ticks)
    }

    pub fn config(&self) -> &SimConfig {
        self.app.world().resource::<SimConfig>()
    }

    pub fn clock(&self) -> &SimClock {
        self.app.world().resource::<SimClock>()
    }

    pub fn kinematics(&self) -> Result<&AircraftKinematics, SimError> {
        self.component()
    }

    pub fn engine(&self) -> Result<&EngineController, SimError> {
        self.component()
    }

    pub fn fuel(&self) -> Result<&FuelSystem, SimError> {
        self.component()
    }

    pub fn avionics(&self) -> Result<&AvionicsController, SimError> {
        self.component()
    }

    pub fn recorder(&self) -> Result<&FlightRecorder, SimError> {
        self.component()
    }

    /// Direct access to the fuel system, for refueling and tank operations.
    ///
    /// The burn multiplier is not set here: the fuel mission mirrors the kinematics
    /// mission on every tick, so a `set_mission_type` made through this handle is
    /// replaced on the next tick. Change missions with [`Self::set_mission`].
    pub fn fuel_mut(&mut self) -> Result<Mut<'_, FuelSystem>, SimError> {
        self.component_mut()
    }

    pub fn avionics_mut(&mut self) -> Result<Mut<'_, AvionicsController>, SimError> {
        self.component_mut()
    }

    /// Ends the run and assembles its report.
    pub fn finish(mut self) -> Result<SimulationReport, SimError> {
        let context = self
            .app
            .world_mut()
            .remove_resource::<RunContext>()
            .ok_or_else(|| SimError::StateError("run context missing".to_string()))?;

        let clock = self.clock();
        let (ticks, elapsed_minutes) = (clock.tick_count(), clock.elapsed_minutes());
        let fuel = self.fuel()?.summary();
        let outcome = FlightOutcome {
            aircraft: &self.config().name,
            ticks,
            elapsed_minutes,
            kinematics: self.kinematics()?,
            engine: self.engine()?,
            avionics: self.avionics()?,
            fuel,
            samples: self.recorder()?.samples(),
        };

        let report = SimulationReport::assemble(context.run_id, context.started_at, outcome);
        info!(
            "Run {} finished after {} tick(s), {:.0} min",
            report.run_id, report.ticks, report.elapsed_minutes
        );
        Ok(report)
    }

    fn component<T: Component>(&self) -> Result<&T, SimError> {
        self.app
            .world()
            .get::<T>(self.aircraft)
            .ok_or_else(missing::<T>)
    }

    fn component_mut<T: Component>(&mut self) -> Result<Mut<'_, T>, SimError> {
        self.app
            .world_mut()
            .get_mut::<T>(self.aircraft)
            .ok_or_else(missing::<T>)
    }
}

fn missing<T>() -> SimError {
    SimError::StateError(format!(
        "aircraft has no {} component",
        std::any::type_name::<T>()
    ))
}
