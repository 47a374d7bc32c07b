use bevy::log::{info, warn, LogPlugin};
use bevy::prelude::App;
use std::env;

use blackbird::{
    components::{Maneuver, Mission},
    resources::SimConfig,
    utils::SimError,
    FlightSimulation,
};

/// Guards against a route that can never be completed.
const MAX_CRUISE_TICKS: u64 = 2000;
const REFUEL_TARGET_PERCENT: f64 = 90.0;
const MAX_REFUEL_TICKS: u64 = 20;
const TANKER_SLOWDOWN_MPH: f64 = 700.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::world_tour(),
    };

    let mut app = App::new();
    app.add_plugins(LogPlugin::default());
    let mut sim = FlightSimulation::from_app(app, config)?;
    info!("Pre-flight status:\n{}", sim.fuel()?.summary());

    takeoff(&mut sim)?;
    climb(&mut sim)?;
    cruise(&mut sim)?;
    descend_and_land(&mut sim)?;

    info!("Post-flight status:\n{}", sim.fuel()?.summary());
    let report = sim.finish()?;
    println!("{}", report.to_json_pretty()?);
    Ok(())
}

fn takeoff(sim: &mut FlightSimulation) -> Result<(), SimError> {
    info!("Takeoff roll");
    sim.command(Maneuver::Accelerate(200.0))?;
    sim.command(Maneuver::FlyAtHeight(10000.0))?;
    sim.tick();
    Ok(())
}

fn climb(sim: &mut FlightSimulation) -> Result<(), SimError> {
    info!("Climbing to cruise altitude");
    for altitude in (20000..=80000).step_by(20000) {
        let altitude = f64::from(altitude);
        hold_speed(sim, 500.0 + altitude / 200.0)?;
        sim.command(Maneuver::ClimbTo {
            target: altitude,
            rate: 20000.0,
        })?;
        sim.run_until_idle(10)?;
    }
    Ok(())
}

fn cruise(sim: &mut FlightSimulation) -> Result<(), SimError> {
    info!("Cruising through the route");
    sim.set_mission(Mission::Reconnaissance)?;
    sim.avionics_mut()?.engage_autopilot();

    let mut leg = sim.avionics()?.waypoints().cursor();
    let mut ticks = 0;
    while sim.avionics()?.current_waypoint().is_some() {
        if ticks >= MAX_CRUISE_TICKS {
            warn!("Route not completed after {} ticks", ticks);
            break;
        }
        sim.tick();
        ticks += 1;

        let cursor = sim.avionics()?.waypoints().cursor();
        if cursor != leg {
            leg = cursor;
            if let Some(system) = navigation_for_leg(leg) {
                sim.avionics_mut()?.switch_navigation_system(system)?;
            }
        }

        let more_legs = cursor + 1 < sim.avionics()?.waypoints().len();
        if sim.fuel()?.needs_refueling() && more_legs {
            aerial_refuel(sim)?;
        }
    }
    Ok(())
}

/// Oceans have no ground references, so those legs fly on inertial navigation.
fn navigation_for_leg(leg: usize) -> Option<&'static str> {
    match leg {
        1 | 4 => Some("INS"),
        2 | 5 => Some("GPS"),
        _ => None,
    }
}

fn aerial_refuel(sim: &mut FlightSimulation) -> Result<(), SimError> {
    warn!(
        "Fuel at {:.1}%, meeting the tanker",
        sim.fuel()?.fuel_level_percent()
    );
    sim.command(Maneuver::Decelerate(TANKER_SLOWDOWN_MPH))?;
    sim.fuel_mut()?.start_refueling();

    let mut ticks = 0;
    while sim.fuel()?.fuel_level_percent() < REFUEL_TARGET_PERCENT && ticks < MAX_REFUEL_TICKS {
        sim.tick();
        ticks += 1;
    }

    sim.fuel_mut()?.stop_refueling();
    sim.command(Maneuver::Accelerate(TANKER_SLOWDOWN_MPH))?;
    Ok(())
}

fn descend_and_land(sim: &mut FlightSimulation) -> Result<(), SimError> {
    info!("Beginning descent");
    sim.avionics_mut()?.disengage_autopilot();

    for altitude in (10000..=70000).rev().step_by(15000) {
        let altitude = f64::from(altitude);
        hold_speed(sim, 300.0 + altitude / 200.0)?;
        sim.command(Maneuver::DescendTo {
            target: altitude,
            rate: 15000.0,
        })?;
        sim.run_until_idle(10)?;
    }

    info!("Final approach");
    sim.command(Maneuver::FlyAtHeight(5000.0))?;
    sim.command(Maneuver::Decelerate(1000.0))?;
    sim.tick();

    let velocity = sim.kinematics()?.velocity();
    sim.command(Maneuver::FlyAtHeight(0.0))?;
    sim.command(Maneuver::Decelerate(velocity))?;
    sim.tick();
    info!("Touchdown");
    Ok(())
}

/// Queues whichever speed change brings the aircraft to `target` mph.
fn hold_speed(sim: &mut FlightSimulation, target: f64) -> Result<(), SimError> {
    let delta = target - sim.kinematics()?.velocity();
    if delta >= 0.0 {
        sim.command(Maneuver::Accelerate(delta))
    } else {
        sim.command(Maneuver::Decelerate(-delta))
    }
}
