pub mod constants;
pub mod errors;
pub mod geodesy;
pub mod math;
pub mod types;

pub use constants::*;
pub use errors::*;
pub use geodesy::{destination_point, haversine_distance, initial_bearing};
pub use math::*;
pub use types::*;
