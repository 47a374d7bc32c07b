use bevy::prelude::*;

use crate::components::{AircraftKinematics, ManeuverQueue};

/// Applies this tick's queued maneuvers to every aircraft.
pub fn kinematics_system(mut query: Query<(&mut AircraftKinematics, &mut ManeuverQueue)>) {
    for (mut kinematics, mut maneuvers) in query.iter_mut() {
        if maneuvers.is_empty() {
            continue;
        }
        maneuvers.drain_tick(&mut kinematics);
        debug!(
            "Kinematics: {:.0} ft, {:.0} mph, {} maneuver(s) pending",
            kinematics.altitude(),
            kinematics.velocity(),
            maneuvers.len()
        );
    }
}
