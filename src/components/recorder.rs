use bevy::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::utils::Coordinate;

/// One row of the flight log, taken at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSample {
    pub tick: u64,
    pub elapsed_minutes: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub mach: f64,
    pub fuel_percent: f64,
    pub position: Coordinate,
}

/// Per-aircraft flight log.
#[derive(Component, Debug, Clone, Default)]
pub struct FlightRecorder {
    samples: Vec<FlightSample>,
}

impl FlightRecorder {
    pub fn record(&mut self, sample: FlightSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[FlightSample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&FlightSample> {
        self.samples.last()
    }

    /// Highest altitude flown so far (ft).
    pub fn peak_altitude(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.altitude)
            .fold(0.0, f64::max)
    }
}
