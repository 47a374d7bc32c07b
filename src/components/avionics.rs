use bevy::log::{debug, info};
use bevy::prelude::Component;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::{
    destination_point, haversine_distance, initial_bearing, mach_from_mph, non_negative,
    Coordinate, SimError, MAX_SKIN_TEMPERATURE, MIN_CABIN_PRESSURE_PSI, MPH_TO_KNOTS,
    PRESSURISED_CEILING_FT, SEA_LEVEL_PRESSURE_PSI,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationSystem {
    #[default]
    #[serde(rename = "GPS")]
    Gps,
    #[serde(rename = "INS")]
    Ins,
}

impl FromStr for NavigationSystem {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GPS" => Ok(NavigationSystem::Gps),
            "INS" => Ok(NavigationSystem::Ins),
            other => Err(SimError::InvalidNavigationSystem(other.to_string())),
        }
    }
}

impl fmt::Display for NavigationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationSystem::Gps => f.write_str("GPS"),
            NavigationSystem::Ins => f.write_str("INS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutopilotStatus {
    Engaged,
    #[default]
    Disengaged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommunicationStatus {
    #[default]
    Active,
    Inactive,
}

/// Snapshot of the avionics bus. Pressure, heat and leaching are derived, never set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvionicsState {
    /// Altitude (ft)
    pub altitude: f64,
    /// Ground speed (mph)
    pub speed: f64,
    pub position: Coordinate,
    pub navigation_system: NavigationSystem,
    pub autopilot: AutopilotStatus,
    pub communication: CommunicationStatus,
    /// Cabin pressure (psi)
    pub cabin_pressure: f64,
    /// Skin temperature (degF)
    pub external_heat: f64,
    /// Expected seepage from thermal expansion of the tanks (gal/min)
    pub fuel_leaching_rate: f64,
}

impl Default for AvionicsState {
    fn default() -> Self {
        Self {
            altitude: 0.0,
            speed: 0.0,
            position: Coordinate::default(),
            navigation_system: NavigationSystem::Gps,
            autopilot: AutopilotStatus::Disengaged,
            communication: CommunicationStatus::Active,
            cabin_pressure: cabin_pressure(0.0),
            external_heat: external_heat(0.0),
            fuel_leaching_rate: fuel_leaching_rate(0.0),
        }
    }
}

/// Pressurised cabin model: sea level up to 10,000 ft, then a linear drop to a floor.
pub fn cabin_pressure(altitude: f64) -> f64 {
    if altitude <= PRESSURISED_CEILING_FT {
        SEA_LEVEL_PRESSURE_PSI
    } else {
        let pressure =
            SEA_LEVEL_PRESSURE_PSI - (altitude - PRESSURISED_CEILING_FT) / 85000.0 * 6.0;
        pressure.max(MIN_CABIN_PRESSURE_PSI)
    }
}

/// Skin temperature from aerodynamic heating.
pub fn external_heat(mach: f64) -> f64 {
    if mach < 1.0 {
        60.0 + mach * 100.0
    } else if mach < 3.0 {
        160.0 + (mach - 1.0) * 200.0
    } else {
        (560.0 + (mach - 3.0) * 100.0).min(MAX_SKIN_TEMPERATURE)
    }
}

fn fuel_leaching_rate(mach: f64) -> f64 {
    if mach > 2.0 {
        (mach - 2.0) * 0.5
    } else {
        0.0
    }
}

/// Ordered waypoints with a single forward-only cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointList {
    waypoints: Vec<Coordinate>,
    cursor: usize,
}

impl WaypointList {
    pub fn new(waypoints: Vec<Coordinate>) -> Self {
        Self {
            waypoints,
            cursor: 0,
        }
    }

    /// The active waypoint, or `None` once the cursor has passed the end.
    pub fn current(&self) -> Option<Coordinate> {
        self.waypoints.get(self.cursor).copied()
    }

    /// Moves the cursor forward; returns whether another waypoint is active.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.waypoints.len() {
            self.cursor += 1;
        }
        self.cursor < self.waypoints.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.waypoints
    }
}

/// Cabin environment, navigation mode and waypoint navigation.
#[derive(Component, Debug, Clone, Default)]
pub struct AvionicsController {
    state: AvionicsState,
    waypoints: WaypointList,
}

impl AvionicsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AvionicsState {
        &self.state
    }

    pub fn position(&self) -> Coordinate {
        self.state.position
    }

    pub fn waypoints(&self) -> &WaypointList {
        &self.waypoints
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.state.altitude = non_negative(altitude);
        self.state.cabin_pressure = cabin_pressure(self.state.altitude);
    }

    /// Sets ground speed in mph; heat and leaching follow the resulting Mach number.
    pub fn set_speed(&mut self, speed_mph: f64) {
        self.state.speed = non_negative(speed_mph);
        let mach = mach_from_mph(self.state.speed);
        self.state.external_heat = external_heat(mach);
        self.state.fuel_leaching_rate = fuel_leaching_rate(mach);
    }

    /// Recomputes every derived field from altitude and speed.
    pub fn refresh(&mut self) {
        self.set_altitude(self.state.altitude);
        self.set_speed(self.state.speed);
    }

    pub fn set_position(&mut self, position: Coordinate) {
        self.state.position = position;
    }

    pub fn engage_autopilot(&mut self) {
        self.state.autopilot = AutopilotStatus::Engaged;
        info!("Autopilot engaged");
    }

    pub fn disengage_autopilot(&mut self) {
        self.state.autopilot = AutopilotStatus::Disengaged;
        info!("Autopilot disengaged");
    }

    pub fn set_communication(&mut self, status: CommunicationStatus) {
        self.state.communication = status;
    }

    /// Switches between GPS and INS. Any other tag is rejected and leaves the state as is.
    pub fn switch_navigation_system(&mut self, tag: &str) -> Result<(), SimError> {
        let system = tag.parse::<NavigationSystem>()?;
        self.set_navigation_system(system);
        Ok(())
    }

    pub fn set_navigation_system(&mut self, system: NavigationSystem) {
        if system != self.state.navigation_system {
            info!(
                "Navigation switched: {} -> {}",
                self.state.navigation_system, system
            );
        }
        self.state.navigation_system = system;
    }

    pub fn set_waypoints(&mut self, waypoints: Vec<Coordinate>) {
        self.waypoints = WaypointList::new(waypoints);
    }

    pub fn current_waypoint(&self) -> Option<Coordinate> {
        self.waypoints.current()
    }

    pub fn next_waypoint(&mut self) -> bool {
        self.waypoints.advance()
    }

    /// Great-circle distance to the active waypoint (NM), zero when there is none.
    pub fn distance_to_waypoint(&self) -> f64 {
        self.current_waypoint()
            .map(|waypoint| haversine_distance(self.state.position, waypoint))
            .unwrap_or(0.0)
    }

    /// Flies towards the active waypoint for `minutes` at `speed_mph`.
    ///
    /// Returns `true` when the waypoint was reached this call (the position snaps onto
    /// it) or when there is no active waypoint.
    pub fn navigate_to_waypoint(&mut self, speed_mph: f64, minutes: f64) -> bool {
        let Some(waypoint) = self.current_waypoint() else {
            return true;
        };

        let speed_knots = non_negative(speed_mph) * MPH_TO_KNOTS;
        let travel_nm = speed_knots * (non_negative(minutes) / 60.0);
        let remaining_nm = haversine_distance(self.state.position, waypoint);

        if travel_nm >= remaining_nm {
            self.state.position = waypoint;
            return true;
        }

        let bearing = initial_bearing(self.state.position, waypoint);
        self.state.position = destination_point(self.state.position, travel_nm, bearing);
        debug!(
            "Heading {:.1}° for {:.1} NM, {:.1} NM to go",
            bearing,
            travel_nm,
            remaining_nm - travel_nm
        );
        false
    }
}
