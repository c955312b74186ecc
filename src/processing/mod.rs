//! Trail processing pipeline
//!
//! Pure transformations from raw pointer samples to a drawable curve:
//! exponential chase (tracker), bounded snapshot history, and two-stage
//! curve synthesis (moving average + Catmull-Rom fit).

pub mod curve;
pub mod history;
pub mod tracker;

pub use curve::{build_path, catmull_rom_segments, smooth_points, synthesize, PathDescription};
pub use history::{HistoryPoint, PointHistory};
pub use tracker::PositionTracker;
