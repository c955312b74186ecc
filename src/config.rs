//! Trail configuration
//!
//! Tuning knobs for the smoothing pipeline. The defaults reproduce the
//! reference trail: 80 retained points, a 6-point averaging window, and
//! 4 chase sub-steps per frame at 60Hz.

use crate::driver::{TrailError, TrailResult};
use serde::{Deserialize, Serialize};

/// Configuration for the trail pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    /// Maximum retained history length. Bounds both memory and the emitted
    /// path length (one cubic segment per retained point).
    pub capacity: usize,
    /// Moving-average window applied to the history before curve fitting.
    pub smoothing_window: usize,
    /// Exponential chase factor per sub-step, in (0, 1].
    pub smoothing_factor: f64,
    /// Chase-and-snapshot sub-steps performed per rendered frame.
    pub iterations_per_frame: u32,
    /// Display refresh rate the frame loop ticks at.
    pub refresh_rate_hz: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 80,
            smoothing_window: 6,
            smoothing_factor: 0.75,
            iterations_per_frame: 4,
            refresh_rate_hz: 60.0,
        }
    }
}

impl TrailConfig {
    /// Validate the configuration before the driver starts.
    pub fn validate(&self) -> TrailResult<()> {
        if self.capacity == 0 {
            return Err(TrailError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.smoothing_window == 0 {
            return Err(TrailError::InvalidConfig(
                "smoothing window must be at least 1".to_string(),
            ));
        }
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(TrailError::InvalidConfig(format!(
                "smoothing factor {} must be in (0, 1]",
                self.smoothing_factor
            )));
        }
        if self.iterations_per_frame == 0 {
            return Err(TrailError::InvalidConfig(
                "iterations per frame must be at least 1".to_string(),
            ));
        }
        if !self.refresh_rate_hz.is_finite() || self.refresh_rate_hz <= 0.0 {
            return Err(TrailError::InvalidConfig(format!(
                "refresh rate {}Hz must be positive",
                self.refresh_rate_hz
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> TrailResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TrailError::InvalidConfig(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TrailConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = TrailConfig {
            capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_smoothing_factor() {
        for factor in [0.0, -0.5, 1.5] {
            let config = TrailConfig {
                smoothing_factor: factor,
                ..Default::default()
            };
            assert!(
                config.validate().is_err(),
                "factor {} should be rejected",
                factor
            );
        }

        let config = TrailConfig {
            smoothing_factor: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok(), "factor 1.0 is the chase limit");
    }

    #[test]
    fn test_from_json_applies_defaults_for_missing_fields() {
        let config = TrailConfig::from_json(r#"{"capacity": 40}"#).unwrap();
        assert_eq!(config.capacity, 40);
        assert_eq!(config.smoothing_window, 6);
        assert_eq!(config.iterations_per_frame, 4);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        assert!(TrailConfig::from_json(r#"{"smoothingFactor": 2.0}"#).is_err());
        assert!(TrailConfig::from_json("not json").is_err());
    }
}
