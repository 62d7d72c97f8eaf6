use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::error::SolverError;

/// Table and solver configuration, built once and passed by reference into
/// every solver call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Table width in table units.
    pub width: f64,
    /// Table height in table units.
    pub height: f64,
    /// Radius shared by every ball (default: 10).
    pub ball_radius: f64,
    /// Pocket radius. Rendering only; obstruction math ignores it.
    pub pocket_radius: f64,
    /// Shots whose angle falls below this many degrees are rejected (default: 120).
    pub angle_threshold_deg: f64,
    /// Maximum number of shots returned per query (default: 3).
    pub max_results: usize,
    /// Maximum number of target balls on the table (default: 5).
    pub max_balls: usize,
    /// Distance from the table edge to the first cue search grid line.
    pub grid_margin: f64,
    /// Spacing between cue search grid lines.
    pub grid_step: f64,
    /// Score weight applied to each degree of deviation from a straight shot.
    pub angle_weight: f64,
    /// Per-component tolerance for treating two points as the same ball.
    pub coincidence_epsilon: f64,
    /// Pocket centres. Empty in JSON means the standard six-pocket layout.
    #[serde(default)]
    pub pockets: Vec<DVec2>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::with_size(800.0, 400.0)
    }
}

impl TableConfig {
    /// Default solver settings on a table of the given size, with the
    /// standard pocket layout.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ball_radius: 10.0,
            pocket_radius: 15.0,
            angle_threshold_deg: 120.0,
            max_results: 3,
            max_balls: 5,
            grid_margin: 50.0,
            grid_step: 40.0,
            angle_weight: 3.0,
            coincidence_epsilon: 1e-6,
            pockets: Self::standard_pockets(width, height).to_vec(),
        }
    }

    /// Four corners plus the midpoints of the top and bottom edges.
    pub fn standard_pockets(width: f64, height: f64) -> [DVec2; 6] {
        let mid = width / 2.0;
        [
            DVec2::new(0.0, 0.0),
            DVec2::new(mid, 0.0),
            DVec2::new(width, 0.0),
            DVec2::new(0.0, height),
            DVec2::new(mid, height),
            DVec2::new(width, height),
        ]
    }

    /// Replace the pocket layout.
    pub fn with_pockets(mut self, pockets: impl Into<Vec<DVec2>>) -> Self {
        self.pockets = pockets.into();
        self
    }

    /// Centre-to-centre distance at which two balls touch.
    pub fn contact_distance(&self) -> f64 {
        self.ball_radius * 2.0
    }

    /// Parse a config from JSON, fill in standard pockets when none are
    /// listed, and validate the result.
    pub fn from_json(json: &str) -> Result<Self, SolverError> {
        let mut config: TableConfig = serde_json::from_str(json)?;
        if config.pockets.is_empty() {
            config.pockets = Self::standard_pockets(config.width, config.height).to_vec();
        }
        config.validate()?;
        Ok(config)
    }

    /// Like `from_json`, but blank input selects the default table.
    pub fn from_json_or_default(json: &str) -> Result<Self, SolverError> {
        if json.trim().is_empty() {
            Ok(Self::default())
        } else {
            Self::from_json(json)
        }
    }

    pub fn to_json(&self) -> Result<String, SolverError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ball_radius", self.ball_radius),
            ("grid_step", self.grid_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("pocket_radius", self.pocket_radius),
            ("grid_margin", self.grid_margin),
            ("angle_weight", self.angle_weight),
            ("coincidence_epsilon", self.coincidence_epsilon),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        if !(0.0..=180.0).contains(&self.angle_threshold_deg) {
            return Err(invalid(format!(
                "angle_threshold_deg must be within [0, 180], got {}",
                self.angle_threshold_deg
            )));
        }
        if self.pockets.is_empty() {
            return Err(invalid("at least one pocket is required".to_string()));
        }
        if let Some(p) = self.pockets.iter().find(|p| !p.is_finite()) {
            return Err(invalid(format!("pocket {p} is not finite")));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SolverError {
    SolverError::InvalidConfig(msg)
}
