//! Render boundary
//!
//! The trail core produces a path description; drawing it is the host's
//! job. The surface receives the path plus the two stroke styles (a wide
//! translucent glow under a narrow solid core) once per frame, and a
//! clear when rendering is suppressed.

use crate::processing::curve::PathDescription;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One stroke pass over the trail path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    pub width: f64,
    pub color: String,
    pub opacity: f64,
}

/// The two passes the trail is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailStyle {
    /// Wide translucent outer stroke.
    pub glow: StrokeStyle,
    /// Narrow solid inner stroke.
    pub core: StrokeStyle,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            glow: StrokeStyle {
                width: 12.0,
                color: "#7dd3fc".to_string(),
                opacity: 0.35,
            },
            core: StrokeStyle {
                width: 2.5,
                color: "#e0f2fe".to_string(),
                opacity: 1.0,
            },
        }
    }
}

/// Host-provided vector surface the trail is drawn onto.
///
/// Implementations are free to fail for host-specific reasons; the driver
/// logs render failures and keeps the loop alive.
#[async_trait]
pub trait RenderSurface: Send {
    /// Draw the path, glow stroke first, core stroke on top.
    async fn render(&mut self, path: &PathDescription, style: &TrailStyle) -> anyhow::Result<()>;

    /// Remove any previously drawn trail. Called when the effect is
    /// disabled: rendering is suppressed entirely, not merely hidden.
    async fn clear(&mut self) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_has_wide_glow_and_narrow_core() {
        let style = TrailStyle::default();
        assert!(style.glow.width > style.core.width);
        assert!(style.glow.opacity < 1.0, "glow stroke is translucent");
        assert_eq!(style.core.opacity, 1.0, "core stroke is solid");
    }

    #[test]
    fn test_style_serializes_camel_case() {
        let json = serde_json::to_value(TrailStyle::default()).unwrap();
        assert!(json["glow"]["width"].is_number());
        assert!(json["core"]["color"].is_string());
    }
}
