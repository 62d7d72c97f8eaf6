//! Line-of-sight tests between two points on the table.

use glam::DVec2;

use crate::api::config::TableConfig;

/// Index of the first obstacle that blocks the segment `start` → `end`, if any.
///
/// An obstacle blocks when its centre projects strictly inside the segment
/// and lies less than one ball diameter from the line. Obstacles coincident
/// with either endpoint are the balls travelling the segment and are skipped.
pub fn first_obstruction(
    config: &TableConfig,
    start: DVec2,
    end: DVec2,
    obstacles: &[DVec2],
) -> Option<usize> {
    let eps = config.coincidence_epsilon;
    let segment = end - start;
    let len = segment.length();
    if start.abs_diff_eq(end, eps) || len == 0.0 {
        return None;
    }

    let clearance = config.contact_distance();
    obstacles.iter().position(|&ball| {
        if ball.abs_diff_eq(start, eps) || ball.abs_diff_eq(end, eps) {
            return false;
        }
        // Perpendicular distance to the infinite line
        let dist = segment.perp_dot(start - ball).abs() / len;
        // Distance along the segment from `start`
        let proj = (ball - start).dot(segment) / len;
        proj > 0.0 && proj < len && dist < clearance
    })
}

/// True when no obstacle blocks the straight path from `start` to `end`.
pub fn is_path_clear(
    config: &TableConfig,
    start: DVec2,
    end: DVec2,
    obstacles: &[DVec2],
) -> bool {
    first_obstruction(config, start, end, obstacles).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn ball_in_the_middle_blocks() {
        let config = TableConfig::default();
        assert!(!is_path_clear(&config, p(100.0, 200.0), p(280.0, 200.0), &[p(200.0, 200.0)]));
    }

    #[test]
    fn empty_obstacles_are_clear() {
        let config = TableConfig::default();
        assert!(is_path_clear(&config, p(100.0, 200.0), p(280.0, 200.0), &[]));
    }

    #[test]
    fn ball_off_the_line_does_not_block() {
        let config = TableConfig::default();
        // Exactly one diameter away is not "less than" the clearance
        assert!(is_path_clear(&config, p(100.0, 200.0), p(280.0, 200.0), &[p(200.0, 220.0)]));
        assert!(is_path_clear(&config, p(100.0, 200.0), p(280.0, 200.0), &[p(200.0, 260.0)]));
        // Just inside the clearance blocks
        assert!(!is_path_clear(&config, p(100.0, 200.0), p(280.0, 200.0), &[p(200.0, 219.0)]));
    }

    #[test]
    fn ball_beyond_the_endpoints_does_not_block() {
        let config = TableConfig::default();
        let start = p(100.0, 200.0);
        let end = p(280.0, 200.0);
        assert!(is_path_clear(&config, start, end, &[p(90.0, 200.0)]));
        assert!(is_path_clear(&config, start, end, &[p(300.0, 200.0)]));
    }

    #[test]
    fn endpoint_balls_are_ignored() {
        let config = TableConfig::default();
        let start = p(300.0, 200.0);
        let end = p(800.0, 200.0);
        assert!(is_path_clear(&config, start, end, &[start, end]));
        assert!(is_path_clear(&config, start, end, &[p(300.0 + 1e-7, 200.0)]));
    }

    #[test]
    fn first_obstruction_reports_index() {
        let config = TableConfig::default();
        let obstacles = [p(500.0, 500.0), p(150.0, 205.0), p(200.0, 200.0)];
        let hit = first_obstruction(&config, p(100.0, 200.0), p(280.0, 200.0), &obstacles);
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn diagonal_segment() {
        let config = TableConfig::default();
        let start = p(0.0, 0.0);
        let end = p(100.0, 100.0);
        assert!(!is_path_clear(&config, start, end, &[p(50.0, 55.0)]));
        assert!(is_path_clear(&config, start, end, &[p(50.0, 80.0)]));
    }

    #[test]
    fn zero_length_segment_is_clear() {
        let config = TableConfig::default();
        let start = p(10.0, 10.0);
        assert!(is_path_clear(&config, start, start, &[p(10.0, 11.0)]));
    }
}
