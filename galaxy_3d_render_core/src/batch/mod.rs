//! Batch module
//!
//! Render batches, the accumulator that collects and dispatches them, and
//! stock comparators for sorted passes.

mod batch_accumulator;
mod render_batch;
pub mod sort;

pub use batch_accumulator::{BatchAccumulator, BatchSortFn, DEFAULT_TECHNIQUE};
pub use render_batch::{BatchEntry, RenderBatch};
