use bevy::log::info;
use bevy::prelude::Component;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{non_negative, MAX_THRUST, RAMJET_THRESHOLD_MACH, SCRAMJET_THRESHOLD_MACH};

/// Propulsion regime, ordered from slowest to fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    #[default]
    Turbojet,
    Ramjet,
    Scramjet,
}

impl EngineMode {
    /// The single mode classification used by both propulsion and fuel burn.
    pub fn classify(mach: f64) -> Self {
        if mach < RAMJET_THRESHOLD_MACH {
            EngineMode::Turbojet
        } else if mach < SCRAMJET_THRESHOLD_MACH {
            EngineMode::Ramjet
        } else {
            EngineMode::Scramjet
        }
    }

    /// Classification with a dead-band on downward transitions.
    ///
    /// Upward transitions use the plain thresholds. Leaving `current` for a slower mode
    /// requires Mach to drop more than `dead_band` below the boundary. A non-positive
    /// band reduces to [`EngineMode::classify`].
    pub fn classify_with_dead_band(current: EngineMode, mach: f64, dead_band: f64) -> Self {
        let candidate = Self::classify(mach);
        if dead_band <= 0.0 || candidate >= current {
            return candidate;
        }
        Self::classify(mach + dead_band).min(current)
    }

    fn intake_coefficient(self) -> f64 {
        match self {
            EngineMode::Turbojet => 2.0,
            EngineMode::Ramjet => 2.2,
            EngineMode::Scramjet => 2.4,
        }
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineMode::Turbojet => "turbojet",
            EngineMode::Ramjet => "ramjet",
            EngineMode::Scramjet => "scramjet",
        };
        f.write_str(name)
    }
}

/// Exhaust plume character, following the combustion temperature segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExhaustPattern {
    #[default]
    Normal,
    Supersonic,
    Hypersonic,
}

/// Snapshot of the engine's derived parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Commanded speed (Mach)
    pub velocity: f64,
    pub mode: EngineMode,
    pub air_intake: f64,
    /// Altitude (ft), kept for reporting only
    pub altitude: f64,
    pub combustion_chamber_temp: f64,
    pub exhaust_pattern: ExhaustPattern,
    pub thrust: f64,
    /// Fuel flow (gal/hr)
    pub fuel_flow: f64,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::derive(0.0, EngineMode::Turbojet, 0.0)
    }
}

impl EngineState {
    /// Recomputes every derived field from Mach and mode in one step.
    fn derive(mach: f64, mode: EngineMode, altitude: f64) -> Self {
        let (combustion_chamber_temp, exhaust_pattern) = combustion(mach);
        Self {
            velocity: mach,
            mode,
            air_intake: mach * mode.intake_coefficient(),
            altitude,
            combustion_chamber_temp,
            exhaust_pattern,
            thrust: (15000.0 + mach * 5000.0).min(MAX_THRUST),
            fuel_flow: fuel_flow(mach),
        }
    }
}

fn combustion(mach: f64) -> (f64, ExhaustPattern) {
    if mach < 3.0 {
        (500.0 + mach * 10.0, ExhaustPattern::Normal)
    } else if mach < 6.5 {
        (800.0 + (mach - 3.0) * 50.0, ExhaustPattern::Supersonic)
    } else {
        (1200.0 + (mach - 6.5) * 100.0, ExhaustPattern::Hypersonic)
    }
}

fn fuel_flow(mach: f64) -> f64 {
    if mach < 1.0 {
        1500.0 + mach * 1500.0
    } else if mach < 3.0 {
        3000.0 + (mach - 1.0) * 1300.0
    } else {
        5600.0 + (mach - 3.0) * 400.0
    }
}

/// Maps commanded Mach to a propulsion mode and engine parameters.
#[derive(Component, Debug, Clone, Default)]
pub struct EngineController {
    state: EngineState,
    dead_band: f64,
}

impl EngineController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller that holds the current mode until Mach falls `dead_band` below a boundary.
    pub fn with_dead_band(dead_band: f64) -> Self {
        Self {
            dead_band: non_negative(dead_band),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn mode(&self) -> EngineMode {
        self.state.mode
    }

    pub fn dead_band(&self) -> f64 {
        self.dead_band
    }

    /// Sets commanded Mach; negative values clamp to zero.
    pub fn set_speed(&mut self, mach: f64) {
        let mach = non_negative(mach);
        let previous = self.state.mode;
        let mode = EngineMode::classify_with_dead_band(previous, mach, self.dead_band);

        if mode != previous {
            info!("Engine mode switched from {} to {} at Mach {:.2}", previous, mode, mach);
        }

        self.state = EngineState::derive(mach, mode, self.state.altitude);
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.state.altitude = non_negative(altitude);
    }

    /// Engine states across a Mach range, as used for test-stand reports.
    ///
    /// Non-finite bounds give an empty sweep; very fine steps stop after
    /// [`MAX_SWEEP_POINTS`] states.
    pub fn sweep(from: f64, to: f64, step: f64) -> Vec<EngineState> {
        if !(step > 0.0) || !from.is_finite() || !to.is_finite() || to < from {
            return Vec::new();
        }

        let count = ((to - from) / step + 1e-9)
            .floor()
            .min((MAX_SWEEP_POINTS - 1) as f64) as usize
            + 1;
        let mut controller = EngineController::new();
        (0..count)
            .map(|i| {
                let mach = from + step * i as f64;
                controller.set_speed(mach);
                controller.set_altitude(test_stand_altitude(mach));
                *controller.state()
            })
            .collect()
    }
}

pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Representative altitude flown at a given Mach on the test profile.
fn test_stand_altitude(mach: f64) -> f64 {
    if mach < 3.0 {
        5000.0 + mach * 1000.0
    } else if mach < 6.5 {
        15000.0 + (mach - 3.0) * 2000.0
    } else {
        25000.0 + (mach - 6.5) * 1000.0
    }
}
