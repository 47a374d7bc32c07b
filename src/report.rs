use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use uuid::Uuid;

use crate::components::{
    AircraftKinematics, AutopilotStatus, AvionicsController, AvionicsState, CommunicationStatus,
    EngineController, EngineState, FlightSample, FuelSummary, Mission, NavigationSystem,
};
use crate::utils::SimError;

/// Mach range of the engine test-stand sweep.
pub const ENGINE_SWEEP: (f64, f64, f64) = (0.5, 15.5, 0.2);

/// Bench profiles for the avionics report: altitude (ft), speed (mph), nav, comms, autopilot.
const AVIONICS_PROFILES: [(f64, f64, NavigationSystem, CommunicationStatus, AutopilotStatus); 5] = [
    (10000.0, 300.0, NavigationSystem::Gps, CommunicationStatus::Active, AutopilotStatus::Engaged),
    (15000.0, 500.0, NavigationSystem::Ins, CommunicationStatus::Active, AutopilotStatus::Disengaged),
    (20000.0, 700.0, NavigationSystem::Gps, CommunicationStatus::Inactive, AutopilotStatus::Engaged),
    (25000.0, 900.0, NavigationSystem::Ins, CommunicationStatus::Active, AutopilotStatus::Engaged),
    (30000.0, 1100.0, NavigationSystem::Gps, CommunicationStatus::Active, AutopilotStatus::Disengaged),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudePoint {
    pub elapsed_minutes: f64,
    pub altitude: f64,
}

/// End-of-run summary of one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub aircraft: String,
    pub mission: Mission,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub ticks: u64,
    pub elapsed_minutes: f64,
    pub kinematics: AircraftKinematics,
    pub engine: EngineState,
    pub avionics: AvionicsState,
    pub fuel: FuelSummary,
    pub waypoints_reached: usize,
    pub peak_altitude: f64,
    pub altitude_trace: Vec<AltitudePoint>,
    pub engine_sweep: Vec<EngineState>,
    pub avionics_samples: Vec<AvionicsState>,
}

/// Final state of the aircraft, collected by the driver when a run ends.
pub struct FlightOutcome<'a> {
    pub aircraft: &'a str,
    pub ticks: u64,
    pub elapsed_minutes: f64,
    pub kinematics: &'a AircraftKinematics,
    pub engine: &'a EngineController,
    pub avionics: &'a AvionicsController,
    pub fuel: FuelSummary,
    pub samples: &'a [FlightSample],
}

impl SimulationReport {
    pub fn assemble(
        run_id: Uuid,
        started_at: DateTime<Utc>,
        outcome: FlightOutcome<'_>,
    ) -> Self {
        let (engine_sweep, avionics_samples) = bench_samples();

        let altitude_trace = altitude_trace(outcome.samples);
        let peak_altitude = altitude_trace
            .iter()
            .map(|p| p.altitude)
            .fold(outcome.kinematics.altitude(), f64::max);

        Self {
            run_id,
            aircraft: outcome.aircraft.to_string(),
            mission: outcome.kinematics.mission(),
            started_at,
            finished_at: Utc::now(),
            ticks: outcome.ticks,
            elapsed_minutes: outcome.elapsed_minutes,
            kinematics: outcome.kinematics.clone(),
            engine: *outcome.engine.state(),
            avionics: *outcome.avionics.state(),
            fuel: outcome.fuel,
            waypoints_reached: outcome.avionics.waypoints().cursor(),
            peak_altitude,
            altitude_trace,
            engine_sweep,
            avionics_samples,
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Engine sweep and avionics bench samples, computed side by side.
pub fn bench_samples() -> (Vec<EngineState>, Vec<AvionicsState>) {
    let (from, to, step) = ENGINE_SWEEP;
    rayon::join(|| EngineController::sweep(from, to, step), avionics_samples)
}

pub fn avionics_samples() -> Vec<AvionicsState> {
    AVIONICS_PROFILES
        .iter()
        .map(|&(altitude, speed, navigation, communication, autopilot)| {
            let mut avionics = AvionicsController::new();
            avionics.set_altitude(altitude);
            avionics.set_speed(speed);
            avionics.set_navigation_system(navigation);
            avionics.set_communication(communication);
            if autopilot == AutopilotStatus::Engaged {
                avionics.engage_autopilot();
            }
            *avionics.state()
        })
        .collect()
}

/// Altitude over elapsed time, one point per recorded tick.
pub fn altitude_trace(samples: &[FlightSample]) -> Vec<AltitudePoint> {
    samples
        .iter()
        .map(|s| AltitudePoint {
            elapsed_minutes: s.elapsed_minutes,
            altitude: s.altitude,
        })
        .collect()
}
