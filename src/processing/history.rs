//! Bounded point history
//!
//! Owns the newest-first sequence of display-position snapshots the curve
//! is fitted through. Each snapshot gets a strictly increasing id so the
//! renderer has stable identity for points across frames.

use crate::input::types::PointerSample;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Immutable snapshot of the display position at one sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub x: f64,
    pub y: f64,
    pub id: u64,
}

/// Newest-first bounded history of [`HistoryPoint`]s.
///
/// Invariants after any operation: `len() <= capacity`, and walking from
/// the newest entry toward the tail yields strictly decreasing ids (until
/// the buffer is reset, which restarts the counter).
#[derive(Debug, Clone)]
pub struct PointHistory {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
    next_id: u64,
}

impl PointHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    /// Snapshot the display position: prepend a new point with the next id,
    /// then drop the oldest entry if the buffer ran over capacity.
    pub fn push(&mut self, display: PointerSample) {
        let point = HistoryPoint {
            x: display.x,
            y: display.y,
            id: self.next_id,
        };
        self.next_id += 1;

        self.points.push_front(point);
        self.points.truncate(self.capacity);
    }

    /// Newest-first snapshot of the history.
    pub fn points(&self) -> Vec<HistoryPoint> {
        self.points.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Clear the sequence and restart the id counter. Called whenever the
    /// effect restarts from a clean state.
    pub fn reset(&mut self) {
        self.points.clear();
        self.next_id = 0;
    }
}
