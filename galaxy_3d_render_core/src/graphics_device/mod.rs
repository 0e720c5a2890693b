/// Graphics device module - the device-side contract batches are dispatched to

// Module declarations
pub mod graphics_device;
pub mod render_mode;
pub mod per_object_data;

// Re-exports
pub use graphics_device::*;
pub use render_mode::*;
pub use per_object_data::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
