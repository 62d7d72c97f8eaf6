use glam::DVec2;

use crate::api::config::TableConfig;
use crate::api::error::SolverError;
use crate::core::geometry::unit_direction;

/// Where the cue ball's centre must be at contact to drive `target`
/// straight into `pocket`: one ball diameter behind the target, on the
/// pocket line.
///
/// Fails with `DegenerateGeometry` if the target sits on the pocket.
pub fn ghost_ball_position(
    config: &TableConfig,
    target: DVec2,
    pocket: DVec2,
) -> Result<DVec2, SolverError> {
    let direction = unit_direction(target, pocket)?;
    Ok(target - direction * config.contact_distance())
}
