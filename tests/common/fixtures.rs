use blackbird::{components::Maneuver, utils::Coordinate};

pub const EQUATOR_START: Coordinate = Coordinate::new(0.0, 0.0);

/// Three legs of one degree each along the equator
pub fn equator_route() -> Vec<Coordinate> {
    (1..=3)
        .map(|lon| Coordinate::new(0.0, f64::from(lon)))
        .collect()
}

/// Speed change that takes a stationary aircraft to `mach`
pub fn accelerate_to_mach(mach: f64) -> Maneuver {
    Maneuver::Accelerate(mach * 767.0)
}
