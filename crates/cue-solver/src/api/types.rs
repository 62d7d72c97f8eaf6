use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A candidate pocketing shot: cue ball to ghost-ball position, target ball
/// to pocket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub cue: DVec2,
    /// Where the cue ball's centre must be at contact.
    pub ghost: DVec2,
    pub target: DVec2,
    pub pocket: DVec2,
    /// 180 for a straight shot, smaller for sharper cuts.
    pub angle: f64,
    /// Lower is better.
    pub score: f64,
    /// Index of the target in the slice the shot was computed from.
    pub target_index: usize,
    /// Index of the pocket in the table config.
    pub pocket_index: usize,
}

impl Shot {
    /// Degrees away from a perfectly straight shot.
    pub fn cut_deviation(&self) -> f64 {
        (180.0 - self.angle).abs()
    }
}

/// Best cue position found by the placement search, with its best shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuePlacement {
    pub cue: DVec2,
    pub shot: Shot,
}
