use bevy::prelude::*;

use crate::components::{
    AircraftKinematics, AvionicsController, FlightRecorder, FlightSample, FuelSystem,
};
use crate::resources::SimClock;

pub fn sample_flight(
    clock: &SimClock,
    kinematics: &AircraftKinematics,
    fuel: &FuelSystem,
    avionics: &AvionicsController,
) -> FlightSample {
    FlightSample {
        tick: clock.tick_count(),
        elapsed_minutes: clock.elapsed_minutes(),
        altitude: kinematics.altitude(),
        velocity: kinematics.velocity(),
        mach: kinematics.mach_number(),
        fuel_percent: fuel.fuel_level_percent(),
        position: avionics.position(),
    }
}

pub fn recorder_system(
    mut query: Query<(
        &AircraftKinematics,
        &FuelSystem,
        &AvionicsController,
        &mut FlightRecorder,
    )>,
    clock: Res<SimClock>,
) {
    for (kinematics, fuel, avionics, mut recorder) in query.iter_mut() {
        recorder.record(sample_flight(&clock, kinematics, fuel, avionics));
    }
}
