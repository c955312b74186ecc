//! Curve synthesis
//!
//! Turns the point history into a drawable curve in two stages: a causal
//! moving average over the stored (newest-first) ordering, then a
//! clamped-end Catmull-Rom fit emitted as cubic Bézier segments. The
//! resulting curve passes through every smoothed point with continuous
//! tangents at interior joins, which is what removes the polyline kinks
//! a raw point trail shows.

use crate::processing::history::HistoryPoint;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Opaque curve encoding handed to the render surface (SVG path syntax).
/// Recomputed each render; empty for degenerate input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathDescription(String);

impl PathDescription {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PathDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cubic Bézier piece of the fitted curve. The segment starts at the
/// previous point (or the move-to origin) and ends exactly on `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub cp1_x: f64,
    pub cp1_y: f64,
    pub cp2_x: f64,
    pub cp2_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// Moving average over the stored newest-first ordering.
///
/// Output point `i` is the mean of input points `max(0, i - window + 1) ..= i`,
/// keeping each point's original id. Near index 0 the window simply shrinks;
/// there is no padding or wraparound. Because index 0 is the newest snapshot,
/// each point is averaged only with neighbors on one side of it in storage
/// order. That directionality is deliberate: a centered filter changes the
/// visual character of the tail.
///
/// Input with fewer than 2 points is returned unchanged.
pub fn smooth_points(points: &[HistoryPoint], window: usize) -> Vec<HistoryPoint> {
    if points.len() < 2 || window < 2 {
        return points.to_vec();
    }

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let start = i.saturating_sub(window - 1);
            let neighborhood = &points[start..=i];
            let count = neighborhood.len() as f64;
            HistoryPoint {
                x: neighborhood.iter().map(|p| p.x).sum::<f64>() / count,
                y: neighborhood.iter().map(|p| p.y).sum::<f64>() / count,
                id: point.id,
            }
        })
        .collect()
}

/// Fit a clamped-end Catmull-Rom spline through the points, expressed as
/// cubic Bézier segments, one per consecutive pair.
///
/// For the pair (p1, p2) at index `i`, the neighborhood (p0, p1, p2, p3)
/// clamps p0 to p1 at the start of the sequence and p3 to p2 at the end,
/// so no phantom points are extrapolated. The /6 scaling is the standard
/// Catmull-Rom tangent constant and pairs with this tangent formula.
pub fn catmull_rom_segments(points: &[HistoryPoint]) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    (0..points.len() - 1)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(points.len() - 1)];

            CubicSegment {
                cp1_x: p1.x + (p2.x - p0.x) / 6.0,
                cp1_y: p1.y + (p2.y - p0.y) / 6.0,
                cp2_x: p2.x - (p3.x - p1.x) / 6.0,
                cp2_y: p2.y - (p3.y - p1.y) / 6.0,
                end_x: p2.x,
                end_y: p2.y,
            }
        })
        .collect()
}

/// Render a move-to plus the fitted segments as an SVG path string.
/// Coordinates are emitted unrounded. 0 or 1 points yield an empty path.
pub fn build_path(points: &[HistoryPoint]) -> PathDescription {
    let segments = catmull_rom_segments(points);
    if segments.is_empty() {
        return PathDescription::empty();
    }

    let mut path = String::with_capacity(segments.len() * 64);
    let _ = write!(path, "M {} {}", points[0].x, points[0].y);
    for s in &segments {
        let _ = write!(
            path,
            " C {} {}, {} {}, {} {}",
            s.cp1_x, s.cp1_y, s.cp2_x, s.cp2_y, s.end_x, s.end_y
        );
    }
    PathDescription(path)
}

/// Full synthesis pipeline: temporal smoothing, then curve fitting.
pub fn synthesize(points: &[HistoryPoint], window: usize) -> PathDescription {
    build_path(&smooth_points(points, window))
}
