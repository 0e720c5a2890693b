/// RenderBatch trait and the entries an accumulator holds.

use std::sync::{Arc, Mutex};
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, PerObjectData, RenderMode};
use super::batch_accumulator::BatchAccumulator;

/// A drawable unit committed during scene traversal.
///
/// Implemented outside the render core (geometry batches, particle
/// batches, ...). `commit` runs right after the accumulator has set the
/// device's render mode and per-object data for this batch.
pub trait RenderBatch: Send + Sync {
    /// Render mode to switch to before committing (`Any` keeps current state)
    fn render_mode(&self) -> RenderMode;

    /// Payload placed in the device's per-object data slot
    fn per_object_data(&self) -> Option<Arc<PerObjectData>>;

    /// Issue the draw call(s) for `technique`
    fn commit(&self, device: &mut dyn GraphicsDevice, technique: &str) -> Result<()>;

    /// View depth used by depth-ordering comparators. Larger is farther.
    fn sort_depth(&self) -> f32 {
        0.0
    }
}

/// One element of an accumulator: a batch, or a nested accumulator.
///
/// Both cases are shared references. Committing never copies a batch, and
/// clearing the parent leaves a nested accumulator untouched.
#[derive(Clone)]
pub enum BatchEntry {
    Leaf(Arc<dyn RenderBatch>),
    Node(Arc<Mutex<BatchAccumulator>>),
}

impl BatchEntry {
    /// The batch, if this is a leaf
    pub fn as_batch(&self) -> Option<&Arc<dyn RenderBatch>> {
        match self {
            BatchEntry::Leaf(batch) => Some(batch),
            BatchEntry::Node(_) => None,
        }
    }

    /// The nested accumulator, if this is a node
    pub fn as_accumulator(&self) -> Option<&Arc<Mutex<BatchAccumulator>>> {
        match self {
            BatchEntry::Leaf(_) => None,
            BatchEntry::Node(accumulator) => Some(accumulator),
        }
    }

    pub fn is_accumulator(&self) -> bool {
        matches!(self, BatchEntry::Node(_))
    }
}

impl std::fmt::Debug for BatchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchEntry::Leaf(batch) => f
                .debug_struct("Leaf")
                .field("render_mode", &batch.render_mode())
                .finish_non_exhaustive(),
            BatchEntry::Node(_) => f.write_str("Node"),
        }
    }
}
