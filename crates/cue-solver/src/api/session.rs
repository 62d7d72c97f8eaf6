use glam::DVec2;

use crate::api::config::TableConfig;
use crate::api::error::SolverError;
use crate::api::types::{CuePlacement, Shot};
use crate::core::rack::Rack;
use crate::systems::placement::auto_place_cue;
use crate::systems::shots::find_shots;

/// Opening layout: cue ball left of a tight cluster of five.
const DEFAULT_CUE: DVec2 = DVec2::new(300.0, 200.0);
const DEFAULT_BALLS: [DVec2; 5] = [
    DVec2::new(400.0, 200.0),
    DVec2::new(420.0, 200.0),
    DVec2::new(380.0, 200.0),
    DVec2::new(460.0, 180.0),
    DVec2::new(470.0, 220.0),
];

/// Interactive aiming state driven by a UI shell.
///
/// Every edit re-solves the shots for the enabled balls and resets the
/// shot cursor to the best shot.
pub struct AimSession {
    config: TableConfig,
    cue: DVec2,
    rack: Rack,
    shots: Vec<Shot>,
    shot_index: usize,
}

impl AimSession {
    /// Session with the opening layout, one slot per `config.max_balls`.
    /// Slots beyond the opening layout start disabled at the table centre.
    pub fn new(config: TableConfig) -> Result<Self, SolverError> {
        let centre = DVec2::new(config.width / 2.0, config.height / 2.0);
        let mut rack = Rack::new(
            (0..config.max_balls).map(|i| DEFAULT_BALLS.get(i).copied().unwrap_or(centre)),
        );
        for i in DEFAULT_BALLS.len()..config.max_balls {
            rack.set_enabled(i, false)?;
        }
        Self::with_layout(config, DEFAULT_CUE, rack)
    }

    /// Session with an explicit layout. Validates the config and solves once
    /// before returning.
    pub fn with_layout(config: TableConfig, cue: DVec2, rack: Rack) -> Result<Self, SolverError> {
        config.validate()?;
        if rack.len() > config.max_balls {
            return Err(SolverError::TooManyBalls {
                count: rack.len(),
                max: config.max_balls,
            });
        }
        let mut session = Self {
            config,
            cue,
            rack,
            shots: Vec::new(),
            shot_index: 0,
        };
        session.refresh()?;
        log::info!(
            "aim session ready: {} balls, {} shots",
            session.rack.len(),
            session.shots.len()
        );
        Ok(session)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn cue(&self) -> DVec2 {
        self.cue
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn shot_index(&self) -> usize {
        self.shot_index
    }

    /// The shot under the cursor, if any shot exists.
    pub fn current_shot(&self) -> Option<&Shot> {
        self.shots.get(self.shot_index)
    }

    pub fn active_targets(&self) -> Vec<DVec2> {
        self.rack.active_positions()
    }

    pub fn set_cue(&mut self, cue: DVec2) -> Result<(), SolverError> {
        self.cue = cue;
        self.refresh()
    }

    pub fn set_ball(&mut self, index: usize, pos: DVec2) -> Result<(), SolverError> {
        self.rack.set_position(index, pos)?;
        self.refresh()
    }

    pub fn set_ball_enabled(&mut self, index: usize, enabled: bool) -> Result<(), SolverError> {
        self.rack.set_enabled(index, enabled)?;
        self.refresh()
    }

    /// Move the cue to the best grid position for the enabled balls, if one
    /// exists, then re-solve.
    pub fn auto_cue(&mut self) -> Result<Option<CuePlacement>, SolverError> {
        let placement = auto_place_cue(&self.config, &self.active_targets())?;
        match placement {
            Some(p) => {
                log::info!("auto cue: {} (score {:.2})", p.cue, p.shot.score);
                self.cue = p.cue;
            }
            None => log::info!("auto cue: no reachable shot"),
        }
        self.refresh()?;
        Ok(placement)
    }

    /// Advance the cursor, wrapping to the best shot.
    pub fn next_shot(&mut self) -> Option<&Shot> {
        if self.shots.is_empty() {
            return None;
        }
        self.shot_index = (self.shot_index + 1) % self.shots.len();
        self.current_shot()
    }

    /// Step the cursor back, wrapping to the worst listed shot.
    pub fn prev_shot(&mut self) -> Option<&Shot> {
        if self.shots.is_empty() {
            return None;
        }
        let len = self.shots.len();
        self.shot_index = (self.shot_index + len - 1) % len;
        self.current_shot()
    }

    /// Re-solve for the current layout. On failure the shot list is left
    /// empty and the error is returned.
    pub fn refresh(&mut self) -> Result<(), SolverError> {
        self.shot_index = 0;
        match find_shots(&self.config, self.cue, &self.active_targets()) {
            Ok(shots) => {
                self.shots = shots;
                Ok(())
            }
            Err(err) => {
                log::warn!("shot solve failed: {err}");
                self.shots.clear();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_layout() {
        let session = AimSession::new(TableConfig::default()).unwrap();
        assert_eq!(session.cue(), DVec2::new(300.0, 200.0));
        assert_eq!(session.active_targets().len(), 5);
        assert_eq!(session.shot_index(), 0);
        assert!(session.shots().len() <= 3);
        assert_eq!(session.current_shot(), session.shots().first());
    }

    #[test]
    fn extra_slots_start_disabled() {
        let mut config = TableConfig::default();
        config.max_balls = 7;
        let session = AimSession::new(config).unwrap();
        assert_eq!(session.rack().len(), 7);
        assert_eq!(session.active_targets().len(), 5);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let config = TableConfig::default();
        let rack = Rack::new([DVec2::new(400.0, 200.0)]);
        let mut session = AimSession::with_layout(config, DVec2::new(200.0, 300.0), rack).unwrap();
        let n = session.shots().len();
        assert!(n >= 2, "expected several shots, got {n}");

        let first = *session.current_shot().unwrap();
        assert_eq!(session.prev_shot().copied(), session.shots().last().copied());
        assert_eq!(session.shot_index(), n - 1);
        session.next_shot();
        assert_eq!(session.shot_index(), 0);
        assert_eq!(*session.current_shot().unwrap(), first);
        for _ in 0..n {
            session.next_shot();
        }
        assert_eq!(session.shot_index(), 0);
    }

    #[test]
    fn cycling_without_shots_is_a_no_op() {
        let rack = Rack::new(Vec::<DVec2>::new());
        let mut session =
            AimSession::with_layout(TableConfig::default(), DVec2::new(100.0, 100.0), rack)
                .unwrap();
        assert!(session.shots().is_empty());
        assert!(session.next_shot().is_none());
        assert!(session.prev_shot().is_none());
        assert_eq!(session.shot_index(), 0);
    }

    #[test]
    fn edits_resolve_and_reset_cursor() {
        let config = TableConfig::default();
        let rack = Rack::new([DVec2::new(400.0, 200.0), DVec2::new(600.0, 100.0)]);
        let mut session = AimSession::with_layout(config, DVec2::new(200.0, 300.0), rack).unwrap();
        session.next_shot();

        session.set_ball_enabled(1, false).unwrap();
        assert_eq!(session.shot_index(), 0);
        assert!(session.shots().iter().all(|s| s.target == DVec2::new(400.0, 200.0)));

        session.set_ball(0, DVec2::new(500.0, 150.0)).unwrap();
        assert!(session.shots().iter().all(|s| s.target == DVec2::new(500.0, 150.0)));

        session.set_cue(DVec2::new(150.0, 150.0)).unwrap();
        assert!(session.shots().iter().all(|s| s.cue == DVec2::new(150.0, 150.0)));
    }

    #[test]
    fn failed_refresh_clears_shots() {
        let rack = Rack::new([DVec2::new(400.0, 200.0)]);
        let mut session =
            AimSession::with_layout(TableConfig::default(), DVec2::new(200.0, 300.0), rack)
                .unwrap();
        assert!(!session.shots().is_empty());

        // Ball dropped onto a pocket centre
        let err = session.set_ball(0, DVec2::new(0.0, 0.0)).unwrap_err();
        assert!(err.is_degenerate());
        assert!(session.shots().is_empty());
        assert!(session.current_shot().is_none());
    }

    #[test]
    fn explicit_layout_rejects_invalid_config() {
        let rack = Rack::new([DVec2::new(400.0, 200.0)]);
        let cue = DVec2::new(200.0, 300.0);

        let mut config = TableConfig::default();
        config.ball_radius = f64::NAN;
        let err = AimSession::with_layout(config, cue, rack.clone()).err().unwrap();
        assert!(matches!(err, SolverError::InvalidConfig(_)));

        let config = TableConfig::default().with_pockets(Vec::<DVec2>::new());
        let err = AimSession::with_layout(config, cue, rack).err().unwrap();
        assert!(matches!(err, SolverError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut session = AimSession::new(TableConfig::default()).unwrap();
        let err = session.set_ball_enabled(9, false).unwrap_err();
        assert!(matches!(err, SolverError::NoSuchBall { index: 9, slots: 5 }));
    }

    #[test]
    fn auto_cue_moves_to_best_placement() {
        let mut session = AimSession::new(TableConfig::default()).unwrap();
        let placement = session.auto_cue().unwrap().unwrap();
        assert_eq!(session.cue(), placement.cue);
        assert_eq!(session.current_shot().copied(), Some(placement.shot));
    }

    #[test]
    fn auto_cue_without_balls_keeps_cue() {
        let rack = Rack::new([DVec2::new(400.0, 200.0)]);
        let mut session =
            AimSession::with_layout(TableConfig::default(), DVec2::new(123.0, 321.0), rack)
                .unwrap();
        session.set_ball_enabled(0, false).unwrap();
        assert!(session.auto_cue().unwrap().is_none());
        assert_eq!(session.cue(), DVec2::new(123.0, 321.0));
    }
}
