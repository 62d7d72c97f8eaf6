use bytemuck::{Pod, Zeroable};

use crate::api::types::Shot;

/// Per-shot data read by the JavaScript shell straight out of WASM memory.
/// Must match the TypeScript reader: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShotInstance {
    pub cue_x: f32,
    pub cue_y: f32,
    pub ghost_x: f32,
    pub ghost_y: f32,
    pub target_x: f32,
    pub target_y: f32,
    pub pocket_x: f32,
    pub pocket_y: f32,
    /// Degrees; 180 is straight.
    pub angle: f32,
    pub score: f32,
    pub target_index: f32,
    pub pocket_index: f32,
}

impl ShotInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&Shot> for ShotInstance {
    fn from(shot: &Shot) -> Self {
        Self {
            cue_x: shot.cue.x as f32,
            cue_y: shot.cue.y as f32,
            ghost_x: shot.ghost.x as f32,
            ghost_y: shot.ghost.y as f32,
            target_x: shot.target.x as f32,
            target_y: shot.target.y as f32,
            pocket_x: shot.pocket.x as f32,
            pocket_y: shot.pocket.y as f32,
            angle: shot.angle as f32,
            score: shot.score as f32,
            target_index: shot.target_index as f32,
            pocket_index: shot.pocket_index as f32,
        }
    }
}

/// Ranked shots packed for zero-copy reads, best first.
pub struct ShotBuffer {
    pub instances: Vec<ShotInstance>,
}

impl ShotBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    /// Replace the contents with `shots`, keeping their order.
    pub fn fill(&mut self, shots: &[Shot]) {
        self.instances.clear();
        self.instances.extend(shots.iter().map(ShotInstance::from));
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from JavaScript.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Flat view of the buffer, `FLOATS` values per shot.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for ShotBuffer {
    fn default() -> Self {
        Self::with_capacity(3)
    }
}
