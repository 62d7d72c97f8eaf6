//! Canvas-space geometry for drawing the table and a selected shot.
//!
//! Nothing here draws; the shell turns these circles and segments into
//! pixels. All output is in canvas units (table units × `scale`).

use glam::DVec2;
use serde::Serialize;

use crate::api::config::TableConfig;
use crate::api::types::Shot;

/// Canvas length of the guide trail drawn past the ghost ball.
pub const TRAIL_LENGTH: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CircleKind {
    Pocket,
    Cue,
    Target,
    /// Outline only.
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub kind: CircleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Scale that fits the table width into `canvas_width`.
pub fn scale_for_width(config: &TableConfig, canvas_width: f64) -> f64 {
    canvas_width / config.width
}

/// Pockets, cue ball and target balls, in that draw order.
pub fn table_circles(
    config: &TableConfig,
    cue: DVec2,
    targets: &[DVec2],
    scale: f64,
) -> Vec<Circle> {
    let mut circles = Vec::with_capacity(config.pockets.len() + 1 + targets.len());
    circles.extend(config.pockets.iter().map(|&p| Circle {
        center: p * scale,
        radius: config.pocket_radius * scale,
        kind: CircleKind::Pocket,
    }));
    circles.push(Circle {
        center: cue * scale,
        radius: config.ball_radius * scale,
        kind: CircleKind::Cue,
    });
    circles.extend(targets.iter().map(|&t| Circle {
        center: t * scale,
        radius: config.ball_radius * scale,
        kind: CircleKind::Target,
    }));
    circles
}

/// Everything drawn on top of the table for one shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotOverlay {
    pub ghost: Circle,
    /// Cue ball to ghost-ball position.
    pub cue_line: Segment,
    /// Target ball to pocket.
    pub pocket_line: Segment,
    /// Continuation of the cue line past the ghost ball.
    pub trail: Segment,
    /// Anchor for the angle label: midpoint of the cue line.
    pub label_pos: DVec2,
    pub label: String,
}

impl ShotOverlay {
    pub fn from_shot(config: &TableConfig, shot: &Shot, scale: f64) -> Self {
        let cue = shot.cue * scale;
        let ghost = shot.ghost * scale;
        let dir = (ghost - cue).normalize_or_zero();
        Self {
            ghost: Circle {
                center: ghost,
                radius: config.ball_radius * scale,
                kind: CircleKind::Ghost,
            },
            cue_line: Segment { from: cue, to: ghost },
            pocket_line: Segment {
                from: shot.target * scale,
                to: shot.pocket * scale,
            },
            trail: Segment {
                from: ghost,
                to: ghost + dir * TRAIL_LENGTH,
            },
            label_pos: (cue + ghost) * 0.5,
            label: format!("{:.1} deg", shot.angle),
        }
    }
}
