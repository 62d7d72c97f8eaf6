//! Shot enumeration and ranking.
//!
//! Every (target, pocket) pair is a candidate. A candidate survives when its
//! cut is no sharper than the angle threshold and both legs of the shot
//! (cue to ghost ball, target to pocket) are clear of other balls.

use glam::DVec2;

use crate::api::config::TableConfig;
use crate::api::error::SolverError;
use crate::api::types::Shot;
use crate::core::geometry::{angle_between, distance};
use crate::core::ghost::ghost_ball_position;
use crate::core::obstruction::is_path_clear;

/// Best shots from `cue`, using the config's angle threshold and result cap.
pub fn find_shots(
    config: &TableConfig,
    cue: DVec2,
    targets: &[DVec2],
) -> Result<Vec<Shot>, SolverError> {
    find_shots_with(
        config,
        cue,
        targets,
        config.angle_threshold_deg,
        config.max_results,
    )
}

/// Best shots from `cue`, sorted by ascending score and capped at
/// `max_results`. An empty result means no legal shot exists.
pub fn find_shots_with(
    config: &TableConfig,
    cue: DVec2,
    targets: &[DVec2],
    angle_threshold_deg: f64,
    max_results: usize,
) -> Result<Vec<Shot>, SolverError> {
    check_inputs(config, cue, targets)?;

    let mut shots = Vec::new();
    for (target_index, &target) in targets.iter().enumerate() {
        for (pocket_index, &pocket) in config.pockets.iter().enumerate() {
            let ghost = ghost_ball_position(config, target, pocket)?;
            if cue.abs_diff_eq(ghost, config.coincidence_epsilon) {
                // Cue already at the contact point: no approach line to aim along
                log::trace!("skip target {target_index} pocket {pocket_index}: cue on ghost");
                continue;
            }
            let angle = angle_between(cue, ghost, target)?;
            if angle < angle_threshold_deg {
                log::trace!(
                    "skip target {target_index} pocket {pocket_index}: \
                     angle {angle:.1} below {angle_threshold_deg}"
                );
                continue;
            }
            if !is_path_clear(config, cue, ghost, targets)
                || !is_path_clear(config, target, pocket, targets)
            {
                log::trace!("skip target {target_index} pocket {pocket_index}: obstructed");
                continue;
            }
            let mut shot = Shot {
                cue,
                ghost,
                target,
                pocket,
                angle,
                score: 0.0,
                target_index,
                pocket_index,
            };
            shot.score = distance(cue, ghost)
                + distance(target, pocket)
                + shot.cut_deviation() * config.angle_weight;
            shots.push(shot);
        }
    }

    // Stable sort: equal scores keep enumeration order
    shots.sort_by(|a, b| a.score.total_cmp(&b.score));
    shots.truncate(max_results);
    Ok(shots)
}

/// Reject non-finite coordinates and over-full tables.
pub(crate) fn check_inputs(
    config: &TableConfig,
    cue: DVec2,
    targets: &[DVec2],
) -> Result<(), SolverError> {
    if targets.len() > config.max_balls {
        return Err(SolverError::TooManyBalls {
            count: targets.len(),
            max: config.max_balls,
        });
    }
    check_finite(cue)?;
    targets.iter().try_for_each(|&t| check_finite(t))
}

fn check_finite(p: DVec2) -> Result<(), SolverError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(SolverError::NonFiniteCoordinate { x: p.x, y: p.y })
    }
}
