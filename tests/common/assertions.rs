use approx::assert_relative_eq;
use blackbird::{
    components::{AvionicsState, FuelSystem},
    utils::{Coordinate, MAX_SKIN_TEMPERATURE, MIN_CABIN_PRESSURE_PSI, SEA_LEVEL_PRESSURE_PSI},
};

/// Assert that the tank level is within its physical bounds
#[track_caller]
pub fn assert_fuel_valid(fuel: &FuelSystem) {
    let level = fuel.fuel_amount();
    assert!(level.is_finite(), "Fuel level is not finite");
    assert!(level >= 0.0, "Fuel level {} is negative", level);
    assert!(
        level <= fuel.tank().capacity(),
        "Fuel level {} exceeds capacity {}",
        level,
        fuel.tank().capacity()
    );
    assert!(
        (0.0..=100.0).contains(&fuel.fuel_level_percent()),
        "Fuel percent out of range"
    );
}

/// Assert that the derived avionics fields are in range
#[track_caller]
pub fn assert_avionics_valid(state: &AvionicsState) {
    assert!(
        state.cabin_pressure >= MIN_CABIN_PRESSURE_PSI
            && state.cabin_pressure <= SEA_LEVEL_PRESSURE_PSI,
        "Cabin pressure {} out of range",
        state.cabin_pressure
    );
    assert!(
        state.external_heat <= MAX_SKIN_TEMPERATURE,
        "External heat above skin limit"
    );
    assert!(state.fuel_leaching_rate >= 0.0, "Negative leaching rate");
    assert!(state.position.is_valid(), "Position {} is invalid", state.position);
}

#[track_caller]
pub fn assert_coordinate_eq(actual: Coordinate, expected: Coordinate, epsilon: f64) {
    assert_relative_eq!(actual.latitude, expected.latitude, epsilon = epsilon);
    assert_relative_eq!(actual.longitude, expected.longitude, epsilon = epsilon);
}
