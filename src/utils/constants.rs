/// Reference speed of sound used for every Mach conversion (mph). Not altitude corrected.
pub const SPEED_OF_SOUND_MPH: f64 = 767.0;
pub const MPH_TO_KNOTS: f64 = 0.868976;
pub const EARTH_RADIUS_NM: f64 = 3440.065; // nautical miles

/// Longest simulated step a config may ask for (one week, in minutes).
pub const MAX_TICK_MINUTES: f64 = 7.0 * 24.0 * 60.0;

// Propulsion regime boundaries (Mach)
pub const RAMJET_THRESHOLD_MACH: f64 = 2.0;
pub const SCRAMJET_THRESHOLD_MACH: f64 = 5.0;

pub const MAX_THRUST: f64 = 34000.0;

// Cabin environment
pub const SEA_LEVEL_PRESSURE_PSI: f64 = 14.7;
pub const MIN_CABIN_PRESSURE_PSI: f64 = 8.0;
pub const PRESSURISED_CEILING_FT: f64 = 10000.0;
pub const MAX_SKIN_TEMPERATURE: f64 = 600.0; // degF

// Fuel thresholds (percent of capacity)
pub const LOW_FUEL_PERCENT: f64 = 30.0;
pub const CRITICAL_FUEL_PERCENT: f64 = 10.0;

pub const TURBOJET_CONSUMPTION: f64 = 3000.0; // gal/hr
pub const RAMJET_CONSUMPTION: f64 = 5600.0; // gal/hr
