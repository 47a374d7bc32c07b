use std::f64::consts::PI;

use super::constants::SPEED_OF_SOUND_MPH;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Mach number for a ground speed in mph, using the fixed sea-level speed of sound.
#[inline]
pub fn mach_from_mph(speed_mph: f64) -> f64 {
    speed_mph / SPEED_OF_SOUND_MPH
}

/// Clamp a physical quantity that cannot be negative.
#[inline]
pub fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
