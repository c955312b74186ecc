use serde::{Deserialize, Serialize};

/// Latest known true pointer location. Screen coordinates are taken as-is;
/// they may be negative or exceed the viewport during fast drags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One active touch contact reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// A raw input event forwarded by the host UI.
///
/// Touch events carry the host's full contact list; only the first active
/// touch point drives the trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum PointerEvent {
    MouseMove { x: f64, y: f64 },
    TouchMove { touches: Vec<TouchPoint> },
}

impl PointerEvent {
    /// The sample this event contributes, if any. An empty touch list
    /// contributes nothing.
    pub fn sample(&self) -> Option<PointerSample> {
        match self {
            PointerEvent::MouseMove { x, y } => Some(PointerSample::new(*x, *y)),
            PointerEvent::TouchMove { touches } => {
                touches.first().map(|t| PointerSample::new(t.x, t.y))
            }
        }
    }
}

/// Host-side device classification, re-evaluated by the host on viewport
/// resize. The trail only runs on pointer-capable devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceClass {
    /// Hover-capable pointing device (mouse, trackpad).
    PointerCapable,
    /// Touch-only device; the effect never runs.
    TouchOnly,
}

impl DeviceClass {
    pub fn is_pointer_capable(&self) -> bool {
        matches!(self, DeviceClass::PointerCapable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_move_yields_sample() {
        let event = PointerEvent::MouseMove { x: 12.5, y: -3.0 };
        assert_eq!(event.sample(), Some(PointerSample::new(12.5, -3.0)));
    }

    #[test]
    fn test_touch_move_uses_first_contact_only() {
        let event = PointerEvent::TouchMove {
            touches: vec![
                TouchPoint { x: 1.0, y: 2.0 },
                TouchPoint { x: 99.0, y: 99.0 },
            ],
        };
        assert_eq!(event.sample(), Some(PointerSample::new(1.0, 2.0)));
    }

    #[test]
    fn test_empty_touch_list_is_ignored() {
        let event = PointerEvent::TouchMove { touches: vec![] };
        assert_eq!(event.sample(), None);
    }
}
