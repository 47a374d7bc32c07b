use bevy::prelude::{Entity, Resource};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity of a single simulation run, stamped into its report.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RunContext {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl RunContext {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The aircraft entity driven by commands and reported on.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveAircraft(pub Entity);
