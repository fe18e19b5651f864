//! Data-driven game balance
//!
//! Every gameplay number the simulation consumes lives here, so hosts can
//! rebalance a build from a JSON file without recompiling.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Gameplay balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll speed at the moment a run starts (units/sec)
    pub scroll_base_speed: f32,
    /// Scroll speed gained per second of active run time (units/sec²)
    pub scroll_ramp_rate: f32,
    /// Hard cap on the scroll speed (units/sec)
    pub scroll_max_speed: f32,
    /// Seconds between rock spawns at level start
    pub spawn_interval_initial: f32,
    /// Floor for the shrinking spawn interval (seconds)
    pub spawn_interval_min: f32,
    /// Rocks spawn with x uniform in [-band, +band]
    pub spawn_band_half_width: f32,
    /// Half the visible vertical extent; rocks and the player are considered
    /// off-screen one unit past it
    pub visible_half_height: f32,
    /// Downward drift while falling (units/sec)
    pub fall_speed: f32,
    /// Horizontal grip offset when snapping onto a rock
    pub snap_offset_x: f32,
    /// Vertical grip offset when snapping onto a rock
    pub snap_offset_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Scroll ramp
            scroll_base_speed: 1.0,
            scroll_ramp_rate: 10.0,
            scroll_max_speed: 10.0,

            // Spawn cadence
            spawn_interval_initial: 3.0,
            spawn_interval_min: 1.0,
            spawn_band_half_width: 5.0,

            // World extent
            visible_half_height: 5.0,

            // Player
            fall_speed: 2.0,
            snap_offset_x: 0.5,
            snap_offset_y: 0.1,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|e| TuningError::Io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive, finite number",
                })
            }
        }

        positive("scroll_base_speed", self.scroll_base_speed)?;
        positive("scroll_max_speed", self.scroll_max_speed)?;
        positive("spawn_interval_initial", self.spawn_interval_initial)?;
        positive("spawn_interval_min", self.spawn_interval_min)?;
        positive("spawn_band_half_width", self.spawn_band_half_width)?;
        positive("visible_half_height", self.visible_half_height)?;
        positive("fall_speed", self.fall_speed)?;

        if !self.scroll_ramp_rate.is_finite() || self.scroll_ramp_rate < 0.0 {
            return Err(TuningError::Invalid {
                field: "scroll_ramp_rate",
                reason: "must be zero or a positive, finite number",
            });
        }
        if self.scroll_max_speed < self.scroll_base_speed {
            return Err(TuningError::Invalid {
                field: "scroll_max_speed",
                reason: "must be at least scroll_base_speed",
            });
        }
        if self.spawn_interval_min > self.spawn_interval_initial {
            return Err(TuningError::Invalid {
                field: "spawn_interval_min",
                reason: "must not exceed spawn_interval_initial",
            });
        }
        if !self.snap_offset_x.is_finite() {
            return Err(TuningError::Invalid {
                field: "snap_offset_x",
                reason: "must be finite",
            });
        }
        if !self.snap_offset_y.is_finite() {
            return Err(TuningError::Invalid {
                field: "snap_offset_y",
                reason: "must be finite",
            });
        }

        Ok(())
    }
}

/// Errors produced while loading or validating [`Tuning`]
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// The tuning file could not be read
    Io(String),
    /// The tuning JSON was malformed
    Parse(String),
    /// A value failed validation
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },
}

impl Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(context) => write!(f, "failed to read tuning file: {}", context),
            TuningError::Parse(context) => write!(f, "failed to parse tuning JSON: {}", context),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning value for `{}`: {}", field, reason)
            }
        }
    }
}

impl Error for TuningError {}
