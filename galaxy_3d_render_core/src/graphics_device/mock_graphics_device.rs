/// Mock graphics device and batch for unit tests (no GPU required)
///
/// Device calls and batch commits are appended to one shared command log,
/// so tests can assert the exact interleaving of state changes and draws.

use std::sync::{Arc, Mutex};
use crate::error::{Error, Result};
use crate::batch::RenderBatch;
use super::{GraphicsDevice, PerObjectData, RenderMode};

/// Shared, ordered record of everything the device saw
pub type CommandLog = Arc<Mutex<Vec<String>>>;

pub fn new_command_log() -> CommandLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn commands(log: &CommandLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

pub struct MockGraphicsDevice {
    pub log: CommandLog,
    pub current_mode: Option<RenderMode>,
    pub current_data: Option<Arc<PerObjectData>>,
    /// set_standard_states fails for this mode
    pub fail_on_mode: Option<RenderMode>,
}

impl MockGraphicsDevice {
    pub fn new(log: CommandLog) -> Self {
        Self {
            log,
            current_mode: None,
            current_data: None,
            fail_on_mode: None,
        }
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn set_standard_states(&mut self, mode: RenderMode) -> Result<()> {
        if self.fail_on_mode == Some(mode) {
            return Err(Error::BackendError(format!("cannot apply {:?}", mode)));
        }
        self.log.lock().unwrap().push(format!("states:{:?}", mode));
        self.current_mode = Some(mode);
        Ok(())
    }

    fn set_per_object_data(&mut self, data: Option<Arc<PerObjectData>>) {
        self.current_data = data;
    }

    fn per_object_data(&self) -> Option<&Arc<PerObjectData>> {
        self.current_data.as_ref()
    }
}

// ============================================================================
// Mock RenderBatch
// ============================================================================

pub struct MockBatch {
    pub name: String,
    pub mode: RenderMode,
    pub depth: f32,
    pub data: Option<Arc<PerObjectData>>,
    pub failure: Option<Error>,
    pub log: CommandLog,
}

impl MockBatch {
    pub fn new(name: &str, mode: RenderMode, log: &CommandLog) -> Self {
        Self {
            name: name.to_string(),
            mode,
            depth: 0.0,
            data: None,
            failure: None,
            log: log.clone(),
        }
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_data(mut self, data: PerObjectData) -> Self {
        self.data = Some(Arc::new(data));
        self
    }

    pub fn failing(mut self, error: Error) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn shared(self) -> Arc<dyn RenderBatch> {
        Arc::new(self)
    }
}

impl RenderBatch for MockBatch {
    fn render_mode(&self) -> RenderMode {
        self.mode
    }

    fn per_object_data(&self) -> Option<Arc<PerObjectData>> {
        self.data.clone()
    }

    fn commit(&self, device: &mut dyn GraphicsDevice, technique: &str) -> Result<()> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        // Record whether the device slot holds exactly this batch's payload
        let handoff = match (device.per_object_data(), &self.data) {
            (Some(current), Some(own)) if Arc::ptr_eq(current, own) => "own",
            (None, None) => "none",
            _ => "stale",
        };
        self.log
            .lock()
            .unwrap()
            .push(format!("commit:{}:{}:{}", self.name, technique, handoff));
        Ok(())
    }

    fn sort_depth(&self) -> f32 {
        self.depth
    }
}
