use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::error::SolverError;

/// A target ball slot. Disabled slots keep their position but are left out
/// of every solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSlot {
    pub pos: DVec2,
    pub enabled: bool,
}

/// Fixed set of target ball slots.
/// Sized once from `TableConfig::max_balls`; slots are toggled, never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Rack {
    slots: Vec<BallSlot>,
}

impl Rack {
    /// Build a rack with every given position enabled.
    pub fn new(positions: impl IntoIterator<Item = DVec2>) -> Self {
        Self {
            slots: positions
                .into_iter()
                .map(|pos| BallSlot { pos, enabled: true })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut BallSlot, SolverError> {
        let slots = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(SolverError::NoSuchBall { index, slots })
    }

    pub fn set_position(&mut self, index: usize, pos: DVec2) -> Result<(), SolverError> {
        self.slot_mut(index)?.pos = pos;
        Ok(())
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<(), SolverError> {
        self.slot_mut(index)?.enabled = enabled;
        Ok(())
    }

    /// Positions of enabled balls, in slot order.
    pub fn active_positions(&self) -> Vec<DVec2> {
        self.slots
            .iter()
            .filter(|s| s.enabled)
            .map(|s| s.pos)
            .collect()
    }
}
