//! Exponential chase filter for the trail head
//!
//! Tracks the latest raw pointer sample and evolves a lagging display
//! position toward it, one sub-step at a time. Each sub-step closes a
//! fixed fraction of the remaining gap, so the residual error shrinks by
//! `(1 - factor)` per step and the display never overshoots the target
//! for factors up to 1.

use crate::input::types::PointerSample;

/// Raw target plus the lagging display position derived from it.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    raw: PointerSample,
    display: PointerSample,
}

impl PositionTracker {
    /// Create a tracker with the display already resting on the target.
    pub fn new(initial: PointerSample) -> Self {
        Self {
            raw: initial,
            display: initial,
        }
    }

    /// Overwrite the raw target unconditionally. No coordinate validation:
    /// off-viewport values during fast drags are accepted as-is.
    pub fn record_raw(&mut self, x: f64, y: f64) {
        self.raw = PointerSample::new(x, y);
    }

    /// Set the raw target from a sample.
    pub fn set_target(&mut self, sample: PointerSample) {
        self.raw = sample;
    }

    /// One chase sub-step: move the display toward the raw target by
    /// `factor` of the remaining distance.
    pub fn advance(&mut self, factor: f64) {
        self.display.x += (self.raw.x - self.display.x) * factor;
        self.display.y += (self.raw.y - self.display.y) * factor;
    }

    /// The trail head.
    pub fn display(&self) -> PointerSample {
        self.display
    }

    /// Snap the display onto the target, discarding any residual lag.
    /// Used when the trail restarts from a clean state.
    pub fn reset(&mut self, sample: PointerSample) {
        self.raw = sample;
        self.display = sample;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_by_exact_factor_per_step() {
        let mut tracker = PositionTracker::new(PointerSample::new(0.0, 0.0));
        tracker.record_raw(100.0, 0.0);

        let mut residual = 100.0;
        for _ in 0..8 {
            tracker.advance(0.75);
            residual *= 0.25;
            assert!(
                (100.0 - tracker.display().x - residual).abs() < 1e-9,
                "residual should shrink by exactly (1 - factor) each step"
            );
        }
    }

    #[test]
    fn test_distance_is_non_increasing() {
        let mut tracker = PositionTracker::new(PointerSample::new(0.0, 0.0));
        tracker.record_raw(50.0, -30.0);

        let mut previous = f64::MAX;
        for _ in 0..20 {
            tracker.advance(0.3);
            let d = tracker.display();
            let distance = ((50.0 - d.x).powi(2) + (-30.0 - d.y).powi(2)).sqrt();
            assert!(
                distance <= previous,
                "distance {} should not exceed previous {}",
                distance,
                previous
            );
            previous = distance;
        }
    }

    #[test]
    fn test_never_overshoots_at_factor_one() {
        let mut tracker = PositionTracker::new(PointerSample::new(10.0, 10.0));
        tracker.record_raw(200.0, 200.0);
        tracker.advance(1.0);
        assert_eq!(tracker.display(), PointerSample::new(200.0, 200.0));

        // Further steps stay put once the target is reached.
        tracker.advance(1.0);
        assert_eq!(tracker.display(), PointerSample::new(200.0, 200.0));
    }

    #[test]
    fn test_record_raw_does_not_move_display() {
        let mut tracker = PositionTracker::new(PointerSample::new(5.0, 5.0));
        tracker.record_raw(500.0, 500.0);
        assert_eq!(tracker.display(), PointerSample::new(5.0, 5.0));
    }

    #[test]
    fn test_reference_frame_of_four_substeps() {
        // Raw target jumps from (0,0) to (100,0); one frame of four
        // sub-steps at factor 0.75 lands at 100 * (1 - 0.25^4).
        let mut tracker = PositionTracker::new(PointerSample::new(0.0, 0.0));
        tracker.record_raw(100.0, 0.0);
        for _ in 0..4 {
            tracker.advance(0.75);
        }
        assert!(
            (tracker.display().x - 99.609375).abs() < 1e-12,
            "display.x {} should be 99.609375",
            tracker.display().x
        );
        assert_eq!(tracker.display().y, 0.0);
    }

    #[test]
    fn test_reset_snaps_display_to_target() {
        let mut tracker = PositionTracker::new(PointerSample::new(0.0, 0.0));
        tracker.record_raw(100.0, 100.0);
        tracker.advance(0.5);
        tracker.reset(PointerSample::new(300.0, 400.0));
        assert_eq!(tracker.display(), PointerSample::new(300.0, 400.0));
    }
}
