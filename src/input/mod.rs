//! Pointer input (mouse, touch)
//!
//! Raw input types forwarded by the host UI and the shared cell that
//! carries the latest sample into the frame driver.

pub mod state;
pub mod types;

pub use state::SharedPointerState;
pub use types::{DeviceClass, PointerEvent, PointerSample, TouchPoint};
