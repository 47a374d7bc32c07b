mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_avionics_valid, assert_coordinate_eq, assert_fuel_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
