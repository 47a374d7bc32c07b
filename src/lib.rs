pub mod components;
pub mod plugins;
pub mod report;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod utils;

pub use report::SimulationReport;
pub use simulation::FlightSimulation;
