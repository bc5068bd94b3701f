//! Travel-time constants and search settings
//!
//! Everything has a default matching the sample network's timetable, and every
//! field can be overridden from a JSON document such as
//!
//! ```json
//! { "travel": { "average_speed_kmph": 50 }, "search": { "mode": "labelled" } }
//! ```

use crate::graph::Weight;
use crate::planner::SearchMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Converts distances into minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelModel {
    /// Fixed boarding/dwell time charged per connection by the cost engine
    pub boarding_minutes: u32,
    /// Average train speed; a connection takes `km * 60 / average_speed_kmph` minutes
    pub average_speed_kmph: u32,
    /// Penalty charged once per line change on a reconstructed route
    pub interchange_minutes: u32,
}

impl Default for TravelModel {
    fn default() -> Self {
        Self {
            boarding_minutes: 120,
            average_speed_kmph: 40,
            interchange_minutes: 120,
        }
    }
}

impl TravelModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-connection boarding time
    pub fn with_boarding_minutes(mut self, minutes: u32) -> Self {
        self.boarding_minutes = minutes;
        self
    }

    /// Set the average speed used to turn kilometres into minutes
    pub fn with_average_speed(mut self, kmph: u32) -> Self {
        self.average_speed_kmph = kmph;
        self
    }

    /// Set the per-interchange penalty
    pub fn with_interchange_minutes(mut self, minutes: u32) -> Self {
        self.interchange_minutes = minutes;
        self
    }

    /// Rejects models that cannot produce a travel time
    pub fn validate(&self) -> Result<()> {
        if self.average_speed_kmph == 0 {
            return Err(Error::InvalidConfig(
                "average_speed_kmph must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Riding time for one connection, truncated to whole minutes
    ///
    /// Widened to `u128` so `km * 60` cannot overflow narrow weight types;
    /// saturates only when the quotient itself does not fit in `W`.
    pub fn travel_minutes<W: Weight>(&self, km: W) -> W {
        let speed = u128::from(self.average_speed_kmph.max(1));
        let minutes = km
            .to_u128()
            .and_then(|km| km.checked_mul(60))
            .map(|scaled| scaled / speed);
        minutes
            .and_then(<W as num_traits::NumCast>::from)
            .unwrap_or_else(W::max_value)
    }

    /// Time charged by the cost engine for one connection: boarding plus riding
    pub fn connection_minutes<W: Weight>(&self, km: W) -> W {
        W::from_constant(self.boarding_minutes).saturating_add(self.travel_minutes(km))
    }

    /// Penalty for `count` line changes
    pub fn interchange_penalty<W: Weight>(&self, count: usize) -> W {
        let count = <W as num_traits::NumCast>::from(count).unwrap_or_else(W::max_value);
        W::from_constant(self.interchange_minutes)
            .checked_mul(&count)
            .unwrap_or_else(W::max_value)
    }
}

/// How route queries pick their search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub mode: SearchMode,
    /// Largest network (in stations) that `SearchMode::Auto` explores exhaustively
    pub exhaustive_vertex_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            mode: SearchMode::Auto,
            exhaustive_vertex_limit: 64,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub travel: TravelModel,
    pub search: SearchSettings,
}

impl Config {
    /// Parses and validates a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.travel.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
