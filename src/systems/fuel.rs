use bevy::prelude::*;
use std::time::Duration;

use crate::components::{AircraftKinematics, EngineController, FuelSystem};
use crate::resources::SimClock;

/// One tick of fuel bookkeeping.
///
/// The mission and engine mode are taken from the kinematics and engine state computed
/// earlier in the tick, so the kinematics mission always wins over one set on the fuel
/// system alone. Fuel burns only while moving, transfers while the boom is connected,
/// and seeps on the ground.
pub fn update_fuel(
    fuel: &mut FuelSystem,
    engine: &EngineController,
    kinematics: &AircraftKinematics,
    elapsed: Duration,
) {
    if fuel.mission() != kinematics.mission() {
        fuel.set_mission_type(kinematics.mission());
    }
    fuel.set_engine_mode(engine.mode());

    if kinematics.velocity() > 0.0 {
        fuel.consume_fuel(elapsed);
    }
    fuel.refuel(elapsed);
    if kinematics.is_on_ground() {
        fuel.leak_fuel(elapsed);
    }
}

pub fn fuel_system(
    mut query: Query<(&AircraftKinematics, &EngineController, &mut FuelSystem)>,
    clock: Res<SimClock>,
) {
    let elapsed = clock.delta();
    for (kinematics, engine, mut fuel) in query.iter_mut() {
        update_fuel(&mut fuel, engine, kinematics, elapsed);
    }
}
