/// BatchAccumulator - collects render batches during traversal and
/// dispatches them to the device at the end of the frame.
///
/// Typically one accumulator per pass type (opaque, decal, transparent...).
/// Accumulators nest: a child accumulator committed into a parent is
/// rendered in place, depth-first, with the parent's technique.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use super::render_batch::{BatchEntry, RenderBatch};

/// Technique used by `BatchAccumulator::render`
pub const DEFAULT_TECHNIQUE: &str = "Main";

/// Comparator applied to the entries at render time
pub type BatchSortFn = Box<dyn Fn(&BatchEntry, &BatchEntry) -> Ordering + Send + Sync>;

pub struct BatchAccumulator {
    batches: Vec<BatchEntry>,
    sort_function: Option<BatchSortFn>,
}

impl BatchAccumulator {
    /// Accumulator that renders in commit order
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
            sort_function: None,
        }
    }

    /// Accumulator that sorts its entries with `compare` before each render.
    ///
    /// The sort is stable, so entries comparing equal keep commit order.
    /// `compare` must be a total order.
    pub fn with_sort<F>(compare: F) -> Self
    where
        F: Fn(&BatchEntry, &BatchEntry) -> Ordering + Send + Sync + 'static,
    {
        Self {
            batches: Vec::new(),
            sort_function: Some(Box::new(compare)),
        }
    }

    /// Wrap for nesting into another accumulator
    pub fn into_shared(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    // ===== ACCUMULATION =====

    /// Append an entry
    pub fn commit(&mut self, entry: BatchEntry) {
        self.batches.push(entry);
    }

    /// Append a batch
    pub fn commit_batch(&mut self, batch: Arc<dyn RenderBatch>) {
        self.batches.push(BatchEntry::Leaf(batch));
    }

    /// Append a nested accumulator
    pub fn commit_accumulator(&mut self, accumulator: Arc<Mutex<BatchAccumulator>>) {
        self.batches.push(BatchEntry::Node(accumulator));
    }

    /// Forget every entry. Nested accumulators keep their own entries.
    pub fn clear(&mut self) {
        self.batches.clear();
    }

    // ===== DISPATCH =====

    /// Render with the "Main" technique
    pub fn render(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.render_technique(device, DEFAULT_TECHNIQUE)
    }

    /// Sort (if configured), then dispatch every entry in order.
    ///
    /// For a batch: switch the device to its render mode unless it is
    /// `RenderMode::Any`, publish its per-object data, then commit it.
    /// For a nested accumulator: render it with the same technique.
    ///
    /// The first failing device call or commit stops the pass and its error
    /// is returned as is. Entries already dispatched stay dispatched.
    pub fn render_technique(&mut self, device: &mut dyn GraphicsDevice, technique: &str) -> Result<()> {
        if let Some(compare) = &self.sort_function {
            self.batches.sort_by(|a, b| compare(a, b));
        }

        for entry in &self.batches {
            match entry {
                BatchEntry::Node(child) => {
                    Self::lock_child(child)?.render_technique(device, technique)?;
                }
                BatchEntry::Leaf(batch) => {
                    let mode = batch.render_mode();
                    if !mode.is_any() {
                        device.set_standard_states(mode).map_err(|err| {
                            crate::engine_error!("galaxy3d::BatchAccumulator",
                                "Failed to set standard states for {:?}: {}", mode, err);
                            err
                        })?;
                    }

                    device.set_per_object_data(batch.per_object_data());

                    batch.commit(device, technique).map_err(|err| {
                        crate::engine_error!("galaxy3d::BatchAccumulator",
                            "Batch commit failed for technique '{}': {}", technique, err);
                        err
                    })?;
                }
            }
        }

        Ok(())
    }

    fn lock_child(child: &Arc<Mutex<BatchAccumulator>>) -> Result<MutexGuard<'_, BatchAccumulator>> {
        match child.try_lock() {
            Ok(guard) => Ok(guard),
            Err(TryLockError::WouldBlock) => {
                crate::engine_error!("galaxy3d::BatchAccumulator",
                    "Nested accumulator is already rendering (committed into itself?)");
                Err(Error::InvalidState("nested accumulator is already rendering".to_string()))
            }
            Err(TryLockError::Poisoned(_)) => {
                crate::engine_error!("galaxy3d::BatchAccumulator", "Nested accumulator lock poisoned");
                Err(Error::InvalidState("nested accumulator lock poisoned".to_string()))
            }
        }
    }

    // ===== GETTERS =====

    /// Entries in their current order (sorted order after a render)
    pub fn batches(&self) -> &[BatchEntry] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn is_sorted_on_render(&self) -> bool {
        self.sort_function.is_some()
    }
}

impl Default for BatchAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatchAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchAccumulator")
            .field("batches", &self.batches)
            .field("sorted", &self.sort_function.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "batch_accumulator_tests.rs"]
mod tests;
