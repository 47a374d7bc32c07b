use bevy::prelude::*;

use crate::components::{AircraftKinematics, EngineController};

/// Feeds Mach and altitude from kinematics into the engine controller.
pub fn update_engine(engine: &mut EngineController, kinematics: &AircraftKinematics) {
    engine.set_speed(kinematics.mach_number());
    engine.set_altitude(kinematics.altitude());
}

pub fn propulsion_system(mut query: Query<(&AircraftKinematics, &mut EngineController)>) {
    for (kinematics, mut engine) in query.iter_mut() {
        update_engine(&mut engine, kinematics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::EngineMode;
    use approx::assert_relative_eq;

    #[test]
    fn test_engine_follows_kinematics() {
        let mut kinematics = AircraftKinematics::default();
        let mut engine = EngineController::new();

        kinematics.accelerate(767.0 * 2.5);
        kinematics.fly_at_height(70000.0);
        update_engine(&mut engine, &kinematics);

        assert_eq!(engine.mode(), EngineMode::Ramjet);
        assert_relative_eq!(engine.state().velocity, 2.5);
        assert_eq!(engine.state().altitude, 70000.0);
    }

    #[test]
    fn test_propulsion_system() {
        let mut world = World::new();
        let mut kinematics = AircraftKinematics::default();
        kinematics.accelerate(1000.0);
        let entity = world.spawn((kinematics, EngineController::new())).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(propulsion_system);
        schedule.run(&mut world);

        let engine = world.get::<EngineController>(entity).unwrap();
        assert_eq!(engine.mode(), EngineMode::Turbojet);
        assert_relative_eq!(engine.state().velocity, 1000.0 / 767.0);
    }
}
