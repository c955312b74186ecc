//! Per-frame pipeline composition
//!
//! One engine instance owns the tracker and history for one trail and
//! turns a raw sample into a path description once per frame: several
//! chase-and-snapshot sub-steps, then the two-stage curve synthesis.
//! The engine is synchronous and deterministic; the async frame loop in
//! the driver is a thin shell around `tick`.

use crate::config::TrailConfig;
use crate::input::types::PointerSample;
use crate::processing::curve::{synthesize, PathDescription};
use crate::processing::history::PointHistory;
use crate::processing::tracker::PositionTracker;

pub struct TrailEngine {
    config: TrailConfig,
    tracker: PositionTracker,
    history: PointHistory,
}

impl TrailEngine {
    /// Create an engine with the display head resting on `initial` and an
    /// empty history.
    pub fn new(config: TrailConfig, initial: PointerSample) -> Self {
        let history = PointHistory::new(config.capacity);
        Self {
            tracker: PositionTracker::new(initial),
            history,
            config,
        }
    }

    /// One display-refresh tick: chase the raw sample for the configured
    /// number of sub-steps, snapshotting the display after each, then
    /// synthesize the curve from the updated history.
    pub fn tick(&mut self, raw: PointerSample) -> PathDescription {
        self.tracker.set_target(raw);
        for _ in 0..self.config.iterations_per_frame {
            self.tracker.advance(self.config.smoothing_factor);
            self.history.push(self.tracker.display());
        }
        synthesize(&self.history.points(), self.config.smoothing_window)
    }

    /// Current trail head.
    pub fn display(&self) -> PointerSample {
        self.tracker.display()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Restart from a clean state: empty history, display snapped onto
    /// `sample`.
    pub fn reset(&mut self, sample: PointerSample) {
        self.tracker.reset(sample);
        self.history.reset();
    }
}
