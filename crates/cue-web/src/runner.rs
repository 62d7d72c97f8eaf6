use cue_solver::{
    AimSession, Circle, CuePlacement, DVec2, ShotBuffer, ShotOverlay, SolverError, TableConfig,
};

/// Owns the aim session and the flat shot buffer JavaScript reads from.
///
/// The buffer is repacked after every call that can change the shot list,
/// so pointer reads always see the current ranking.
pub struct AimRunner {
    session: AimSession,
    buffer: ShotBuffer,
}

impl AimRunner {
    pub fn new(config: TableConfig) -> Result<Self, SolverError> {
        let buffer = ShotBuffer::with_capacity(config.max_results);
        let mut runner = Self {
            session: AimSession::new(config)?,
            buffer,
        };
        runner.sync();
        Ok(runner)
    }

    /// Parse a JSON config; an empty string selects the default table.
    pub fn from_json(config_json: &str) -> Result<Self, SolverError> {
        Self::new(TableConfig::from_json_or_default(config_json)?)
    }

    pub fn session(&self) -> &AimSession {
        &self.session
    }

    fn sync(&mut self) {
        self.buffer.fill(self.session.shots());
    }

    fn apply(&mut self, result: Result<(), SolverError>) -> bool {
        self.sync();
        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{err}");
                false
            }
        }
    }

    pub fn set_cue(&mut self, x: f64, y: f64) -> bool {
        let result = self.session.set_cue(DVec2::new(x, y));
        self.apply(result)
    }

    pub fn set_ball(&mut self, index: usize, x: f64, y: f64) -> bool {
        let result = self.session.set_ball(index, DVec2::new(x, y));
        self.apply(result)
    }

    pub fn set_ball_enabled(&mut self, index: usize, enabled: bool) -> bool {
        let result = self.session.set_ball_enabled(index, enabled);
        self.apply(result)
    }

    /// Returns the placement found, or `None` when there is no reachable
    /// shot or the search failed.
    pub fn auto_cue(&mut self) -> Option<CuePlacement> {
        let result = self.session.auto_cue();
        self.sync();
        match result {
            Ok(placement) => placement,
            Err(err) => {
                log::warn!("auto cue failed: {err}");
                None
            }
        }
    }

    /// Cursor after the move, or -1 when there are no shots.
    pub fn next_shot(&mut self) -> i32 {
        self.session.next_shot();
        self.shot_index()
    }

    pub fn prev_shot(&mut self) -> i32 {
        self.session.prev_shot();
        self.shot_index()
    }

    pub fn shot_index(&self) -> i32 {
        match self.session.current_shot() {
            Some(_) => self.session.shot_index() as i32,
            None => -1,
        }
    }

    // ---- Drawing ----

    /// Scale that fits the table into a canvas `canvas_width` pixels wide.
    pub fn scale_for_width(&self, canvas_width: f64) -> f64 {
        cue_solver::scale_for_width(self.session.config(), canvas_width)
    }

    /// Pockets, cue ball and enabled balls in canvas coordinates.
    pub fn table_circles(&self, scale: f64) -> Vec<Circle> {
        cue_solver::table_circles(
            self.session.config(),
            self.session.cue(),
            &self.session.active_targets(),
            scale,
        )
    }

    /// Overlay for the shot under the cursor.
    pub fn shot_overlay(&self, scale: f64) -> Option<ShotOverlay> {
        self.session
            .current_shot()
            .map(|shot| ShotOverlay::from_shot(self.session.config(), shot, scale))
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn shots_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn shot_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn shot_floats(&self) -> &[f32] {
        self.buffer.as_floats()
    }

    pub fn cue(&self) -> DVec2 {
        self.session.cue()
    }

    pub fn table_width(&self) -> f64 {
        self.session.config().width
    }

    pub fn table_height(&self) -> f64 {
        self.session.config().height
    }
}

/// Read `[x0, y0, x1, y1, ...]` into points.
pub fn points_from_flat(coords: &[f64]) -> Result<Vec<DVec2>, SolverError> {
    if coords.len() % 2 != 0 {
        return Err(SolverError::OddCoordinateCount { len: coords.len() });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| DVec2::new(c[0], c[1]))
        .collect())
}
