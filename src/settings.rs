//! Particle field settings
//!
//! Fixed at startup. Hosts may supply them as JSON, e.g.
//! `{"count": 60, "color": [120, 200, 255], "proximity": [200, 120]}`;
//! missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Initial simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Size the surface to the viewport (host only, no effect on the simulation)
    pub fullscreen: bool,
    /// Vertical acceleration, px/ms²
    pub gravity: f32,
    /// Number of particles created at startup
    pub count: u32,
    /// Particle and joint color
    pub color: [u8; 3],
    /// Radius range (min, max); drawn disks use half the radius
    pub radius_range: (f32, f32),
    /// (cutoff, falloff): joints are drawn below `cutoff`, opacity fades over `falloff`
    pub proximity: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            gravity: 0.0,
            count: DEFAULT_COUNT,
            color: DEFAULT_COLOR,
            radius_range: DEFAULT_RADIUS_RANGE,
            proximity: DEFAULT_PROXIMITY,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the ranges the step and draw rules rely on
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(Error::config("gravity must be finite"));
        }

        let (min, max) = self.radius_range;
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::config("radius range must be finite"));
        }
        if min <= 0.0 {
            return Err(Error::config(format!("minimum radius must be > 0, got {min}")));
        }
        if min > max {
            return Err(Error::config(format!(
                "radius range is inverted: min {min} > max {max}"
            )));
        }

        let (cutoff, falloff) = self.proximity;
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(Error::config(format!(
                "proximity cutoff must be finite and > 0, got {cutoff}"
            )));
        }
        if !falloff.is_finite() || falloff <= 0.0 {
            return Err(Error::config(format!(
                "proximity falloff must be finite and > 0, got {falloff}"
            )));
        }

        Ok(())
    }

    /// Distance below which two particles are joined
    pub fn proximity_cutoff(&self) -> f32 {
        self.proximity.0
    }

    /// Distance used as the opacity falloff denominator
    pub fn proximity_falloff(&self) -> f32 {
        self.proximity.1
    }
}
