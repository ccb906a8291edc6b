//! Tunable constants for the blades and the scene.
//!
//! [`PhysicsConfig`] holds every constant used by a blade's update step,
//! [`SceneConfig`] the canvas layout and the ranges the factory draws
//! random blade parameters from. Both can be read from JSON; missing
//! fields fall back to their defaults.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Constants driving the spring-damper model of a single blade.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// How much further the upper control point travels than the tip.
    pub wind_multiplier: f32,
    /// Divisor of the restoring force; larger values pull the tip home slower.
    pub bounds_damping: f32,
    /// Factor of the quadratic drag; negative so drag opposes motion.
    pub drag_coefficient: f32,
    /// Horizontal force added to every blade by a click.
    pub impulse_magnitude: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            wind_multiplier: 5.0,
            bounds_damping: 50.0,
            drag_coefficient: -0.01,
            impulse_magnitude: 10.0,
        }
    }
}

impl PhysicsConfig {
    /// Checks that every constant is finite and that the restoring force
    /// divisor is strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wind_multiplier", self.wind_multiplier),
            ("bounds_damping", self.bounds_damping),
            ("drag_coefficient", self.drag_coefficient),
            ("impulse_magnitude", self.impulse_magnitude),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }
        if self.drag_coefficient > 0.0 {
            return Err(Error::InvalidConfig(format!(
                "drag_coefficient must not be positive, got {}",
                self.drag_coefficient
            )));
        }
        if self.bounds_damping <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "bounds_damping must be positive, got {}",
                self.bounds_damping
            )));
        }
        Ok(())
    }
}

/// Canvas layout, blade appearance ranges and physics for a whole scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    /// Band at the bottom of the canvas that blades never grow into.
    pub bottom_margin: f32,
    pub debug_overlay: bool,
    pub min_height_percent: u32,
    pub max_height_percent: u32,
    pub min_lightness_percent: u32,
    pub max_lightness_percent: u32,
    pub hue: f32,
    pub saturation: f32,
    /// Stroke width per pixel of distance between the ground line and the tip.
    pub stroke_scale: f32,
    pub physics: PhysicsConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            bottom_margin: 100.0,
            debug_overlay: false,
            min_height_percent: 25,
            max_height_percent: 75,
            min_lightness_percent: 30,
            max_lightness_percent: 50,
            hue: 120.0,
            saturation: 40.0,
            stroke_scale: 0.01,
            physics: PhysicsConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Y coordinate of the ground line, i.e. the canvas height minus the
    /// reserved bottom margin.
    pub fn draw_height(&self) -> f32 {
        self.height - self.bottom_margin
    }

    /// Parses a JSON document. Fields that are absent keep their defaults.
    ///
    /// ### Parameters
    /// - `s` - JSON text, e.g. `{"bottom_margin": 0, "debug_overlay": true}`.
    ///
    /// ### Returns
    /// The validated configuration, or [`Error::Parse`] /
    /// [`Error::InvalidConfig`].
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and parses a JSON config file. See [`SceneConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let cfg = Self::from_json_str(&text)?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(cfg)
    }

    /// Rejects layouts and ranges the factory or the blades cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidConfig(format!("width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.bottom_margin >= 0.0 && self.bottom_margin < self.height) {
            return Err(Error::InvalidConfig(format!(
                "bottom_margin must lie in [0, {}), got {}",
                self.height, self.bottom_margin
            )));
        }
        check_percent_range("height", self.min_height_percent, self.max_height_percent)?;
        check_percent_range(
            "lightness",
            self.min_lightness_percent,
            self.max_lightness_percent,
        )?;
        if !self.hue.is_finite() {
            return Err(Error::InvalidConfig(format!("hue must be finite, got {}", self.hue)));
        }
        if !(self.saturation.is_finite() && (0.0..=100.0).contains(&self.saturation)) {
            return Err(Error::InvalidConfig(format!(
                "saturation must lie in 0..=100, got {}",
                self.saturation
            )));
        }
        if !(self.stroke_scale.is_finite() && self.stroke_scale >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "stroke_scale must be non-negative, got {}",
                self.stroke_scale
            )));
        }
        self.physics.validate()
    }
}

fn check_percent_range(name: &str, min: u32, max: u32) -> Result<()> {
    if min > max || max > 100 {
        return Err(Error::InvalidConfig(format!(
            "{name} percent range {min}..={max} must be ordered and within 0..=100"
        )));
    }
    Ok(())
}
