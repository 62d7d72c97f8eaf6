//! Vector primitives shared by the solver.

use glam::DVec2;

use crate::api::error::SolverError;

/// Below this length a direction is considered undefined.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Euclidean distance between two points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Unit vector pointing from `from` toward `to`.
///
/// Fails with `DegenerateGeometry` when the points coincide.
pub fn unit_direction(from: DVec2, to: DVec2) -> Result<DVec2, SolverError> {
    let delta = to - from;
    if delta.length() < DEGENERATE_EPSILON {
        return Err(SolverError::DegenerateGeometry { from, to });
    }
    delta
        .try_normalize()
        .ok_or(SolverError::DegenerateGeometry { from, to })
}

/// Angle in degrees between the approach (`cue` → `ghost`) and the departure
/// (`ghost` → `target`), measured so that 180 is a straight shot.
///
/// The cosine is clamped to [-1, 1] before `acos`, so the result always lies
/// in [0, 180].
pub fn angle_between(cue: DVec2, ghost: DVec2, target: DVec2) -> Result<f64, SolverError> {
    let approach = unit_direction(cue, ghost)?;
    let departure = unit_direction(ghost, target)?;
    let cos = approach.dot(departure).clamp(-1.0, 1.0);
    // to_degrees(PI) can land a hair above 180
    Ok((180.0 - cos.acos().to_degrees()).clamp(0.0, 180.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let d = distance(DVec2::new(0.0, 0.0), DVec2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn unit_direction_has_unit_length() {
        let dir = unit_direction(DVec2::new(10.0, 10.0), DVec2::new(13.0, 14.0)).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn unit_direction_rejects_coincident_points() {
        let p = DVec2::new(42.0, 7.0);
        let err = unit_direction(p, p).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn straight_line_is_180_degrees() {
        let angle = angle_between(
            DVec2::new(100.0, 200.0),
            DVec2::new(280.0, 200.0),
            DVec2::new(300.0, 200.0),
        )
        .unwrap();
        assert!((angle - 180.0).abs() < 1e-9, "angle = {angle}");
    }

    #[test]
    fn right_angle_cut_is_90_degrees() {
        let angle = angle_between(
            DVec2::new(100.0, 220.0),
            DVec2::new(300.0, 220.0),
            DVec2::new(300.0, 200.0),
        )
        .unwrap();
        assert!((angle - 90.0).abs() < 1e-9, "angle = {angle}");
    }

    #[test]
    fn reversal_is_0_degrees() {
        let angle = angle_between(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(5.0, 0.0),
        )
        .unwrap();
        assert!(angle.abs() < 1e-9, "angle = {angle}");
    }

    #[test]
    fn angle_stays_in_range() {
        let cue = DVec2::new(50.0, 50.0);
        for i in 0..36 {
            let theta = (i as f64) * 10.0_f64.to_radians();
            let ghost = DVec2::new(200.0, 120.0);
            let target = ghost + DVec2::new(theta.cos(), theta.sin()) * 20.0;
            let angle = angle_between(cue, ghost, target).unwrap();
            assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
        }
    }

    #[test]
    fn angle_rejects_cue_on_ghost() {
        let p = DVec2::new(10.0, 10.0);
        assert!(angle_between(p, p, DVec2::new(30.0, 10.0)).is_err());
    }
}
