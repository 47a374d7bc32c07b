use bevy::ecs::schedule::{ExecutorKind, ScheduleLabel};
use bevy::prelude::*;

use crate::components::{
    AircraftKinematics, AvionicsController, EngineController, FlightRecorder, FuelSystem,
    FuelTank, ManeuverQueue,
};
use crate::resources::{ActiveAircraft, RunContext, SimClock, SimConfig};
use crate::systems::{
    avionics_system, fuel_system, kinematics_system, propulsion_system, recorder_system,
};

/// One simulated tick. Run on demand by the driver, never by the app's main loop.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightTick;

/// Per-tick ordering: kinematics feeds the engine, the engine feeds fuel, then avionics.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightSet {
    Kinematics,
    Propulsion,
    Fuel,
    Avionics,
    Record,
}

pub struct FlightPlugin {
    config: SimConfig,
}

impl FlightPlugin {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    fn setup_aircraft(mut commands: Commands, config: Res<SimConfig>) {
        let mut fuel = FuelSystem::new(FuelTank::from(&config.fuel));
        fuel.set_mission_type(config.mission);

        let mut avionics = AvionicsController::new();
        avionics.set_navigation_system(config.navigation.system);
        avionics.set_position(config.navigation.start);
        avionics.set_waypoints(config.navigation.waypoints.clone());

        let entity = commands
            .spawn((
                Name::new(config.name.clone()),
                AircraftKinematics::new(config.kinematics.clone()).with_mission(config.mission),
                EngineController::with_dead_band(config.engine.mode_dead_band),
                fuel,
                avionics,
                ManeuverQueue::default(),
                FlightRecorder::default(),
            ))
            .id();

        commands.insert_resource(ActiveAircraft(entity));
        info!(
            "Spawned {} for a {} mission with {} waypoint(s)",
            config.name,
            config.mission,
            config.navigation.waypoints.len()
        );
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(SimClock::from_minutes(self.config.tick_minutes))
            .insert_resource(RunContext::new())
            .init_schedule(FlightTick)
            .edit_schedule(FlightTick, |schedule| {
                schedule.set_executor_kind(ExecutorKind::SingleThreaded);
            })
            .configure_sets(
                FlightTick,
                (
                    FlightSet::Kinematics,
                    FlightSet::Propulsion,
                    FlightSet::Fuel,
                    FlightSet::Avionics,
                    FlightSet::Record,
                )
                    .chain(),
            )
            .add_systems(Startup, Self::setup_aircraft)
            .add_systems(
                FlightTick,
                (
                    kinematics_system.in_set(FlightSet::Kinematics),
                    propulsion_system.in_set(FlightSet::Propulsion),
                    fuel_system.in_set(FlightSet::Fuel),
                    avionics_system.in_set(FlightSet::Avionics),
                    recorder_system.in_set(FlightSet::Record),
                ),
            );
    }
}
