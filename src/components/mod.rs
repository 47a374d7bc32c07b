pub mod avionics;
pub mod engine;
pub mod fuel;
pub mod kinematics;
pub mod mission;
pub mod recorder;

pub use avionics::{
    AutopilotStatus, AvionicsController, AvionicsState, CommunicationStatus, NavigationSystem,
    WaypointList,
};
pub use engine::{EngineController, EngineMode, EngineState, ExhaustPattern, MAX_SWEEP_POINTS};
pub use fuel::{FuelRegime, FuelSummary, FuelSystem, FuelTank};
pub use kinematics::{AircraftKinematics, Maneuver, ManeuverQueue};
pub use mission::Mission;
pub use recorder::{FlightRecorder, FlightSample};
