//! Pointer Trail - Beautiful cursor motion, made simple.
//!
//! A smoothed, glowing trail that follows the user's pointer. The crate
//! owns the motion pipeline (exponential chase, bounded point history,
//! Catmull-Rom curve synthesis) and a per-frame driver; the host UI
//! supplies raw pointer events, a device classification, an enable
//! toggle, and a vector surface that draws the emitted path.

pub mod config;
pub mod driver;
pub mod input;
pub mod processing;

pub use config::TrailConfig;
pub use driver::surface::{RenderSurface, StrokeStyle, TrailStyle};
pub use driver::{DriverState, TrailDriver, TrailError, TrailResult};
pub use input::{DeviceClass, PointerEvent, PointerSample, SharedPointerState};
pub use processing::{HistoryPoint, PathDescription};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for hosts that have no subscriber of their
/// own. Respects `RUST_LOG`; defaults to debug for this crate.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointer_trail=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("pointer-trail v{}", env!("CARGO_PKG_VERSION"));
}
