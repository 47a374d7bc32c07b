use bevy::log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission profile, shared by kinematics (cruise speed) and fuel planning (burn multiplier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mission {
    #[default]
    Standard,
    Reconnaissance,
    HighSpeed,
    Stealth,
    Training,
    LongRange,
}

impl Mission {
    pub const ALL: [Mission; 6] = [
        Mission::Standard,
        Mission::Reconnaissance,
        Mission::HighSpeed,
        Mission::Stealth,
        Mission::Training,
        Mission::LongRange,
    ];

    /// Parses a mission tag. Unknown tags fall back to [`Mission::Standard`].
    pub fn from_tag(tag: &str) -> Self {
        match Self::ALL.iter().find(|m| m.tag() == tag) {
            Some(mission) => *mission,
            None => {
                warn!("Unknown mission tag '{}', flying a standard profile", tag);
                Mission::Standard
            }
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Mission::Standard => "standard",
            Mission::Reconnaissance => "reconnaissance",
            Mission::HighSpeed => "high-speed",
            Mission::Stealth => "stealth",
            Mission::Training => "training",
            Mission::LongRange => "long-range",
        }
    }

    /// Cruise speed flown for this mission (mph).
    pub fn cruise_velocity(self) -> f64 {
        match self {
            Mission::Reconnaissance => 2200.0,
            Mission::HighSpeed => 2500.0,
            Mission::Stealth => 1800.0,
            Mission::Training => 1500.0,
            Mission::Standard | Mission::LongRange => 2000.0,
        }
    }

    /// Factor applied to the engine's base fuel consumption.
    pub fn consumption_multiplier(self) -> f64 {
        match self {
            Mission::LongRange => 1.2,
            Mission::HighSpeed => 1.5,
            Mission::Stealth => 0.8,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
