mod flight;

pub use flight::{FlightPlugin, FlightSet, FlightTick};
