/// GraphicsDevice trait - the stateful device batches are dispatched to
///
/// The render core only touches two pieces of device state: the current
/// render mode and the current per-object data. Both are written by
/// `BatchAccumulator::render` immediately before a batch commits, and read
/// by that batch's commit. The device is passed explicitly as
/// `&mut dyn GraphicsDevice`; there is no global device.

use std::sync::Arc;
use crate::error::Result;
use super::per_object_data::PerObjectData;
use super::render_mode::RenderMode;

pub trait GraphicsDevice {
    /// Switch to the standard states of `mode`.
    ///
    /// Never called with `RenderMode::Any` by the render core.
    fn set_standard_states(&mut self, mode: RenderMode) -> Result<()>;

    /// Replace the current per-object data slot.
    fn set_per_object_data(&mut self, data: Option<Arc<PerObjectData>>);

    /// Current per-object data slot.
    fn per_object_data(&self) -> Option<&Arc<PerObjectData>>;
}
