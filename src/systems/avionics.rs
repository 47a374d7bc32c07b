use bevy::prelude::*;

use crate::components::{AircraftKinematics, AvionicsController};
use crate::resources::SimClock;

/// Feeds altitude and speed to the avionics bus and flies the active leg.
///
/// Navigation only advances while the aircraft is moving. Reaching a waypoint moves the
/// cursor on to the next one. Returns whether a waypoint was reached this tick.
pub fn update_avionics(
    avionics: &mut AvionicsController,
    kinematics: &AircraftKinematics,
    minutes: f64,
) -> bool {
    avionics.set_altitude(kinematics.altitude());
    avionics.set_speed(kinematics.velocity());

    if kinematics.velocity() <= 0.0 {
        return false;
    }
    let Some(waypoint) = avionics.current_waypoint() else {
        return false;
    };

    let reached = avionics.navigate_to_waypoint(kinematics.velocity(), minutes);
    if reached {
        info!(
            "Reached waypoint {}/{} at {}",
            avionics.waypoints().cursor() + 1,
            avionics.waypoints().len(),
            waypoint
        );
        avionics.next_waypoint();
    }
    reached
}

pub fn avionics_system(
    mut query: Query<(&AircraftKinematics, &mut AvionicsController)>,
    clock: Res<SimClock>,
) {
    let minutes = clock.delta_minutes();
    for (kinematics, mut avionics) in query.iter_mut() {
        update_avionics(&mut avionics, kinematics, minutes);
    }
}
