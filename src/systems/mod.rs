mod avionics;
mod engine;
mod fuel;
mod kinematics;
mod recorder;

pub use avionics::{avionics_system, update_avionics};
pub use engine::{propulsion_system, update_engine};
pub use fuel::{fuel_system, update_fuel};
pub use kinematics::kinematics_system;
pub use recorder::{recorder_system, sample_flight};
