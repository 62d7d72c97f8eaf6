//! Brute-force cue placement: try every point of a coarse grid and keep the
//! one whose best shot scores lowest. The table is small and fixed, so no
//! spatial indexing is used.

use glam::DVec2;

use crate::api::config::TableConfig;
use crate::api::error::SolverError;
use crate::api::types::CuePlacement;
use crate::systems::shots::find_shots;

/// Stepped half-open range `[margin, extent - margin)`.
fn grid_axis(margin: f64, step: f64, extent: f64) -> impl Iterator<Item = f64> {
    let end = extent - margin;
    (0u32..)
        .map(move |i| margin + f64::from(i) * step)
        .take_while(move |&v| v < end)
}

/// Candidate cue positions in search order: x outer, y inner.
///
/// The config must have a positive `grid_step`; see `TableConfig::validate`.
pub fn candidate_grid(config: &TableConfig) -> impl Iterator<Item = DVec2> + '_ {
    grid_axis(config.grid_margin, config.grid_step, config.width).flat_map(move |x| {
        grid_axis(config.grid_margin, config.grid_step, config.height)
            .map(move |y| DVec2::new(x, y))
    })
}

/// Search the cue grid for the position with the lowest-scoring best shot.
///
/// Returns `None` when no grid point has any legal shot, which includes an
/// empty `targets`. Ties keep the first point found.
pub fn auto_place_cue(
    config: &TableConfig,
    targets: &[DVec2],
) -> Result<Option<CuePlacement>, SolverError> {
    config.validate()?;
    if targets.is_empty() {
        return Ok(None);
    }

    let mut best: Option<CuePlacement> = None;
    for cue in candidate_grid(config) {
        let shots = find_shots(config, cue, targets)?;
        let Some(&shot) = shots.first() else {
            continue;
        };
        if best.map_or(true, |b| shot.score < b.shot.score) {
            log::debug!("cue search: new best at {cue} (score {:.2})", shot.score);
            best = Some(CuePlacement { cue, shot });
        }
    }
    Ok(best)
}
