pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use crate::api::config::TableConfig;
pub use crate::api::error::SolverError;
pub use crate::api::session::AimSession;
pub use crate::api::types::{Shot, CuePlacement};
pub use crate::core::geometry::{distance, unit_direction, angle_between};
pub use crate::core::ghost::ghost_ball_position;
pub use crate::core::obstruction::{is_path_clear, first_obstruction};
pub use crate::core::rack::{Rack, BallSlot};
pub use crate::systems::shots::{find_shots, find_shots_with};
pub use crate::systems::placement::{auto_place_cue, candidate_grid};
pub use crate::systems::overlay::{
    ShotOverlay, Circle, CircleKind, Segment, scale_for_width, table_circles,
};
pub use crate::bridge::shot_buffer::{ShotInstance, ShotBuffer};

pub use glam::DVec2;
