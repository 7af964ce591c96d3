//! Per-instance fold configuration with TOML/JSON support.
//!
//! All fields use `#[serde(default)]` so partial files (e.g. only
//! overriding `folds`) work. The browser binding hands options over as JSON
//! and also accepts the plugin-style keys (`folddirection`,
//! `containerSpeedFactor`, ...) as aliases.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::FoldError;
use crate::geometry::{direction_at, Direction};
use crate::util::easing::Easing;

/// Fold choreography settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FoldOptions {
    /// Perspective distance applied to the container, in px.
    #[schemars(title = "Perspective")]
    pub perspective: u32,
    /// Duration of each fold step, in ms.
    #[schemars(title = "Step Speed")]
    pub speed: u64,
    /// Easing of each fold step.
    #[schemars(title = "Easing")]
    pub easing: Easing,
    /// Pause between steps, in ms.
    #[serde(alias = "folddelay")]
    #[schemars(title = "Fold Delay")]
    pub fold_delay: u64,
    /// Number of fold steps.
    #[schemars(title = "Folds", range(min = 1))]
    pub folds: usize,
    /// Direction of each unfolding step. Steps past the end unfold
    /// downward.
    #[serde(alias = "folddirection")]
    #[schemars(title = "Fold Directions")]
    pub fold_direction: Vec<Direction>,
    /// Shade the faces while they flip.
    #[schemars(title = "Overlays")]
    pub overlays: bool,
    /// Move the container so the open element stays centered on the closed
    /// one.
    #[schemars(title = "Centered")]
    pub centered: bool,
    /// Container translation speed relative to the whole sequence, 0–1.
    /// 0 jumps straight to the final position.
    #[serde(alias = "containerSpeedFactor")]
    #[schemars(title = "Container Speed Factor", range(min = 0.0, max = 1.0))]
    pub container_speed_factor: f64,
    /// Easing of the container translation.
    #[serde(alias = "containerEasing")]
    #[schemars(title = "Container Easing")]
    pub container_easing: Easing,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            perspective: 1200,
            speed: 450,
            easing: Easing::Linear,
            fold_delay: 0,
            folds: 2,
            fold_direction: vec![Direction::Right, Direction::Top],
            overlays: true,
            centered: false,
            container_speed_factor: 1.0,
            container_easing: Easing::Linear,
        }
    }
}

impl FoldOptions {
    /// Direction of unfolding step `step` (`bottom` if unspecified).
    #[must_use]
    pub fn direction(&self, step: usize) -> Direction {
        direction_at(&self.fold_direction, step)
    }

    /// Duration of one step.
    #[must_use]
    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    /// Pause between steps.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.fold_delay)
    }

    /// Duration of the container translation, in ms.
    #[must_use]
    pub fn container_duration_ms(&self) -> f64 {
        self.speed as f64 * self.folds as f64 * self.container_speed_factor
    }

    /// Clamp out-of-range values, logging each adjustment.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.folds == 0 {
            log::warn!("folds must be positive; using 1");
            self.folds = 1;
        }
        if self.fold_direction.len() > self.folds {
            log::warn!(
                "{} fold directions for {} folds; ignoring the rest",
                self.fold_direction.len(),
                self.folds
            );
            self.fold_direction.truncate(self.folds);
        }
        if !(0.0..=1.0).contains(&self.container_speed_factor) {
            let clamped = if self.container_speed_factor.is_nan() {
                1.0
            } else {
                self.container_speed_factor.clamp(0.0, 1.0)
            };
            log::warn!(
                "container speed factor {} outside [0, 1]; using {clamped}",
                self.container_speed_factor
            );
            self.container_speed_factor = clamped;
        }
        self
    }

    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(FoldOptions)
    }

    /// Parse options from JSON. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, FoldError> {
        serde_json::from_str(json)
            .map_err(|e| FoldError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FoldError> {
        let content = std::fs::read_to_string(path).map_err(FoldError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FoldError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FoldError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FoldError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FoldError::Io)?;
        }
        std::fs::write(path, content).map_err(FoldError::Io)
    }
}
