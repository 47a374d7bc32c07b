use bevy::log::warn;
use bevy::prelude::Component;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::components::Mission;
use crate::resources::KinematicLimits;
use crate::utils::{mach_from_mph, non_negative};

/// Commanded flight state of one aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftKinematics {
    /// Altitude (ft)
    altitude: f64,
    /// Velocity (mph)
    velocity: f64,
    target_altitude: f64,
    target_velocity: f64,
    /// Roll, pitch, yaw (rad)
    attitude: Vector3<f64>,
    mission: Mission,
    limits: KinematicLimits,
}

impl Default for AircraftKinematics {
    fn default() -> Self {
        Self::new(KinematicLimits::default())
    }
}

impl AircraftKinematics {
    /// Negative or NaN limits are clamped to zero, which pins the aircraft in place.
    pub fn new(limits: KinematicLimits) -> Self {
        let limits = KinematicLimits {
            max_velocity: non_negative(limits.max_velocity),
            max_climb_rate: non_negative(limits.max_climb_rate),
        };
        Self {
            altitude: 0.0,
            velocity: 0.0,
            target_altitude: 0.0,
            target_velocity: 0.0,
            attitude: Vector3::zeros(),
            mission: Mission::Standard,
            limits,
        }
    }

    /// Assigns the mission profile without changing speed.
    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.mission = mission;
        self
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target_altitude(&self) -> f64 {
        self.target_altitude
    }

    pub fn target_velocity(&self) -> f64 {
        self.target_velocity
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    pub fn limits(&self) -> &KinematicLimits {
        &self.limits
    }

    pub fn roll(&self) -> f64 {
        self.attitude.x
    }

    pub fn pitch(&self) -> f64 {
        self.attitude.y
    }

    pub fn yaw(&self) -> f64 {
        self.attitude.z
    }

    /// Mach number against the fixed sea-level speed of sound.
    pub fn mach_number(&self) -> f64 {
        mach_from_mph(self.velocity)
    }

    pub fn is_on_ground(&self) -> bool {
        self.altitude <= 0.0
    }

    pub fn accelerate(&mut self, delta: f64) {
        self.set_velocity(self.velocity + non_negative(delta));
    }

    pub fn decelerate(&mut self, delta: f64) {
        self.set_velocity(self.velocity - non_negative(delta));
    }

    fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity.clamp(0.0, self.limits.max_velocity);
        self.target_velocity = self.velocity;
    }

    /// Jumps straight to `altitude` without ramping.
    pub fn fly_at_height(&mut self, altitude: f64) {
        self.altitude = non_negative(altitude);
        self.target_altitude = self.altitude;
    }

    /// One climb step of at most `rate` feet towards `target`. Returns whether it was reached.
    ///
    /// A target below the current altitude leaves the aircraft where it is. A step that
    /// cannot move the aircraft (zero rate or zero climb limit) abandons the climb and
    /// reports it as done.
    pub fn climb_to(&mut self, target: f64, rate: f64) -> bool {
        let target = non_negative(target);
        let step = self.step(rate);
        if self.altitude < target && step <= 0.0 {
            warn!(
                "Climb to {target:.0} ft abandoned at {:.0} ft: no climb rate",
                self.altitude
            );
            return true;
        }
        self.target_altitude = target;
        if self.altitude < target {
            self.altitude = (self.altitude + step).min(target);
        }
        self.altitude >= target
    }

    /// One descent step of at most `rate` feet towards `target`. Returns whether it was reached.
    ///
    /// Like [`climb_to`](Self::climb_to), a step that cannot move the aircraft abandons it.
    pub fn descend_to(&mut self, target: f64, rate: f64) -> bool {
        let target = non_negative(target);
        let step = self.step(rate);
        if self.altitude > target && step <= 0.0 {
            warn!(
                "Descent to {target:.0} ft abandoned at {:.0} ft: no descent rate",
                self.altitude
            );
            return true;
        }
        self.target_altitude = target;
        if self.altitude > target {
            self.altitude = (self.altitude - step).max(target);
        }
        self.altitude <= target
    }

    fn step(&self, rate: f64) -> f64 {
        non_negative(rate).min(self.limits.max_climb_rate)
    }

    /// Sets cruise velocity for the mission profile.
    pub fn adjust_velocity_for_mission(&mut self, mission: Mission) {
        self.mission = mission;
        self.set_velocity(mission.cruise_velocity());
    }

    /// Sets attitude in radians: pitch is limited to ±π/2, roll to ±π, yaw wraps into [0, 2π).
    pub fn set_attitude(&mut self, roll: f64, pitch: f64, yaw: f64) {
        self.attitude = Vector3::new(
            roll.clamp(-PI, PI),
            pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            yaw.rem_euclid(TAU),
        );
    }
}

/// A command issued to [`AircraftKinematics`] by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Maneuver {
    Accelerate(f64),
    Decelerate(f64),
    FlyAtHeight(f64),
    /// Ramp up to `target` ft at `rate` ft per tick
    ClimbTo { target: f64, rate: f64 },
    /// Ramp down to `target` ft at `rate` ft per tick
    DescendTo { target: f64, rate: f64 },
    AdjustForMission(Mission),
    SetAttitude { roll: f64, pitch: f64, yaw: f64 },
}

impl Maneuver {
    /// Applies the maneuver once. Returns `true` when it is complete and can be dropped.
    pub fn apply(&self, kinematics: &mut AircraftKinematics) -> bool {
        match *self {
            Maneuver::Accelerate(delta) => kinematics.accelerate(delta),
            Maneuver::Decelerate(delta) => kinematics.decelerate(delta),
            Maneuver::FlyAtHeight(altitude) => kinematics.fly_at_height(altitude),
            Maneuver::ClimbTo { target, rate } => return kinematics.climb_to(target, rate),
            Maneuver::DescendTo { target, rate } => return kinematics.descend_to(target, rate),
            Maneuver::AdjustForMission(mission) => kinematics.adjust_velocity_for_mission(mission),
            Maneuver::SetAttitude { roll, pitch, yaw } => kinematics.set_attitude(roll, pitch, yaw),
        }
        true
    }
}

/// Pending maneuvers, applied in order. Ramps stay at the front until they complete.
#[derive(Component, Debug, Clone, Default)]
pub struct ManeuverQueue(VecDeque<Maneuver>);

impl ManeuverQueue {
    pub fn push(&mut self, maneuver: Maneuver) {
        self.0.push_back(maneuver);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Applies queued maneuvers for one tick.
    ///
    /// Instant maneuvers are applied and dropped. The first ramp takes one step and, if
    /// still short of its target, blocks the rest of the queue until a later tick.
    pub fn drain_tick(&mut self, kinematics: &mut AircraftKinematics) {
        while let Some(maneuver) = self.0.front().copied() {
            let done = maneuver.apply(kinematics);
            if !done {
                break;
            }
            self.0.pop_front();
            if matches!(maneuver, Maneuver::ClimbTo { .. } | Maneuver::DescendTo { .. }) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_velocity_limits() {
        let mut aircraft = AircraftKinematics::default();

        aircraft.accelerate(3000.0);
        assert_eq!(aircraft.velocity(), 2500.0);

        aircraft.decelerate(700.0);
        assert_eq!(aircraft.velocity(), 1800.0);
        assert_eq!(aircraft.target_velocity(), 1800.0);

        aircraft.decelerate(5000.0);
        assert_eq!(aircraft.velocity(), 0.0);

        // A negative delta is treated as no change.
        aircraft.accelerate(-200.0);
        assert_eq!(aircraft.velocity(), 0.0);
    }

    #[test]
    fn test_fly_at_different_heights() {
        let mut aircraft = AircraftKinematics::default();
        let heights = [
            10000.0, 20000.0, 30000.0, 40000.0, 50000.0, 60000.0, 70000.0, 80000.0, 85000.0,
        ];
        for height in heights {
            aircraft.fly_at_height(height);
            assert_eq!(aircraft.altitude(), height);
            assert_eq!(aircraft.target_altitude(), height);
        }

        aircraft.fly_at_height(-10.0);
        assert_eq!(aircraft.altitude(), 0.0);
        assert!(aircraft.is_on_ground());
    }

    #[test]
    fn test_velocity_for_missions() {
        let mut aircraft = AircraftKinematics::default();
        let expected = [
            (Mission::Reconnaissance, 2200.0),
            (Mission::HighSpeed, 2500.0),
            (Mission::Stealth, 1800.0),
            (Mission::Training, 1500.0),
            (Mission::Standard, 2000.0),
        ];

        for (mission, velocity) in expected {
            aircraft.adjust_velocity_for_mission(mission);
            assert_eq!(aircraft.velocity(), velocity, "{mission}");
            assert_eq!(aircraft.target_velocity(), velocity);
            assert_eq!(aircraft.mission(), mission);
        }
    }

    #[test]
    fn test_mach_number() {
        let mut aircraft = AircraftKinematics::default();
        aircraft.adjust_velocity_for_mission(Mission::Reconnaissance);
        assert_relative_eq!(aircraft.mach_number(), 2200.0 / 767.0);
    }

    #[test]
    fn test_climb_never_overshoots() {
        let mut aircraft = AircraftKinematics::default();
        aircraft.fly_at_height(10000.0);

        let mut previous = aircraft.altitude();
        let mut steps = 0;
        while !aircraft.climb_to(25000.0, 4000.0) {
            assert!(aircraft.altitude() > previous);
            assert!(aircraft.altitude() <= 25000.0);
            previous = aircraft.altitude();
            steps += 1;
        }
        assert_eq!(aircraft.altitude(), 25000.0);
        assert_eq!(steps, 3);

        // Climbing to a lower target does nothing.
        assert!(aircraft.climb_to(5000.0, 4000.0));
        assert_eq!(aircraft.altitude(), 25000.0);
    }

    #[test]
    fn test_descend_never_undershoots() {
        let mut aircraft = AircraftKinematics::default();
        aircraft.fly_at_height(20000.0);

        assert!(!aircraft.descend_to(5000.0, 6000.0));
        assert_eq!(aircraft.altitude(), 14000.0);
        assert!(!aircraft.descend_to(5000.0, 6000.0));
        assert!(aircraft.descend_to(5000.0, 6000.0));
        assert_eq!(aircraft.altitude(), 5000.0);
    }

    #[test]
    fn test_climb_rate_is_limited() {
        let limits = KinematicLimits {
            max_velocity: 2500.0,
            max_climb_rate: 1000.0,
        };
        let mut aircraft = AircraftKinematics::new(limits);
        aircraft.climb_to(50000.0, 20000.0);
        assert_eq!(aircraft.altitude(), 1000.0);
    }

    #[test]
    fn test_invalid_limits_pin_the_aircraft() {
        for max_velocity in [-1.0, f64::NAN] {
            let limits = KinematicLimits {
                max_velocity,
                max_climb_rate: -500.0,
            };
            let mut aircraft = AircraftKinematics::new(limits);
            assert_eq!(aircraft.limits().max_velocity, 0.0);
            assert_eq!(aircraft.limits().max_climb_rate, 0.0);

            aircraft.accelerate(10.0);
            assert_eq!(aircraft.velocity(), 0.0);
            aircraft.adjust_velocity_for_mission(Mission::HighSpeed);
            assert_eq!(aircraft.velocity(), 0.0);

            assert!(aircraft.climb_to(30000.0, 2000.0));
            assert_eq!(aircraft.altitude(), 0.0);
        }
    }

    #[test]
    fn test_attitude() {
        let mut aircraft = AircraftKinematics::default();
        aircraft.set_attitude(0.2, 2.0, -FRAC_PI_2);
        assert_relative_eq!(aircraft.roll(), 0.2);
        assert_relative_eq!(aircraft.pitch(), FRAC_PI_2);
        assert_relative_eq!(aircraft.yaw(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_queue_applies_instant_maneuvers_together() {
        let mut aircraft = AircraftKinematics::default();
        let mut queue = ManeuverQueue::default();
        queue.push(Maneuver::Accelerate(200.0));
        queue.push(Maneuver::FlyAtHeight(10000.0));

        queue.drain_tick(&mut aircraft);
        assert!(queue.is_empty());
        assert_eq!(aircraft.velocity(), 200.0);
        assert_eq!(aircraft.altitude(), 10000.0);
    }

    #[test]
    fn test_queue_ramp_blocks_until_complete() {
        let mut aircraft = AircraftKinematics::default();
        let mut queue = ManeuverQueue::default();
        queue.push(Maneuver::ClimbTo {
            target: 3000.0,
            rate: 2000.0,
        });
        queue.push(Maneuver::Accelerate(500.0));

        queue.drain_tick(&mut aircraft);
        assert_eq!(aircraft.altitude(), 2000.0);
        assert_eq!(aircraft.velocity(), 0.0);
        assert_eq!(queue.len(), 2);

        queue.drain_tick(&mut aircraft);
        assert_eq!(aircraft.altitude(), 3000.0);
        assert_eq!(aircraft.velocity(), 0.0);
        assert_eq!(queue.len(), 1);

        queue.drain_tick(&mut aircraft);
        assert_eq!(aircraft.velocity(), 500.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_zero_rate_ramp_is_dropped() {
        let mut aircraft = AircraftKinematics::default();
        aircraft.fly_at_height(8000.0);
        let mut queue = ManeuverQueue::default();
        queue.push(Maneuver::ClimbTo {
            target: 20000.0,
            rate: 0.0,
        });
        queue.push(Maneuver::DescendTo {
            target: 0.0,
            rate: f64::NAN,
        });
        queue.push(Maneuver::Accelerate(500.0));

        for _ in 0..3 {
            queue.drain_tick(&mut aircraft);
        }
        assert!(queue.is_empty());
        assert_eq!(aircraft.altitude(), 8000.0);
        assert_eq!(aircraft.target_altitude(), 8000.0);
        assert_eq!(aircraft.velocity(), 500.0);
    }
}
