//! Shared raw-sample cell
//!
//! Event handlers and the frame driver communicate through one explicitly
//! owned cell per effect instance: handlers write the latest raw sample,
//! the driver reads it once per frame. The cell's lifecycle is tied to the
//! driver that created it; there is no global state.

use crate::input::types::{PointerEvent, PointerSample};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// Cloneable handle to the latest raw pointer sample.
#[derive(Debug, Clone)]
pub struct SharedPointerState {
    sample: Arc<ParkingMutex<PointerSample>>,
}

impl SharedPointerState {
    pub fn new(initial: PointerSample) -> Self {
        Self {
            sample: Arc::new(ParkingMutex::new(initial)),
        }
    }

    /// Overwrite the raw sample unconditionally. Called from the host's
    /// pointer-move / touch-move handlers.
    pub fn record_raw(&self, x: f64, y: f64) {
        *self.sample.lock() = PointerSample::new(x, y);
    }

    /// Apply a host input event. Events that carry no usable sample
    /// (an empty touch list) are dropped.
    pub fn apply(&self, event: &PointerEvent) {
        if let Some(sample) = event.sample() {
            *self.sample.lock() = sample;
        }
    }

    /// Latest raw sample.
    pub fn latest(&self) -> PointerSample {
        *self.sample.lock()
    }
}

impl Default for SharedPointerState {
    fn default() -> Self {
        Self::new(PointerSample::new(0.0, 0.0))
    }
}
