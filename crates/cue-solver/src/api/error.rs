use glam::DVec2;
use thiserror::Error;

/// Errors produced by the shot solver.
///
/// Finding no legal shot is not an error: `find_shots` returns an empty
/// vector and `auto_place_cue` returns `None`.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A direction was requested between two coincident points.
    #[error("degenerate geometry: direction from {from} to {to} is undefined")]
    DegenerateGeometry { from: DVec2, to: DVec2 },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("too many balls: {count} given, table allows {max}")]
    TooManyBalls { count: usize, max: usize },

    #[error("coordinate list has odd length {len}; expected x, y pairs")]
    OddCoordinateCount { len: usize },

    #[error("no ball slot {index} (session has {slots})")]
    NoSuchBall { index: usize, slots: usize },

    #[error("invalid table config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse table config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SolverError {
    /// True for the coincident-points precondition violation.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, SolverError::DegenerateGeometry { .. })
    }
}
