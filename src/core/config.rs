use super::constants::*;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid drag sensitivity {0:?}: expected a positive number")]
    InvalidSensitivity(String),
}

/// Shape of the focus and close animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusConfig {
    pub focus_duration: Duration,
    pub close_duration: Duration,
    /// Distance in front of the camera eye.
    pub distance: f32,
    /// Minimum height of the focus point above the ring's baseline.
    pub min_lift: f32,
    pub scale_factor: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_duration: Duration::from_millis(FOCUS_DURATION_MS),
            close_duration: Duration::from_millis(CLOSE_DURATION_MS),
            distance: FOCUS_DISTANCE,
            min_lift: FOCUS_MIN_LIFT,
            scale_factor: FOCUS_SCALE_FACTOR,
        }
    }
}

/// Per-ring configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    /// Radians of yaw per pixel of horizontal pointer travel.
    pub drag_sensitivity: f32,
    pub focus: FocusConfig,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            focus: FocusConfig::default(),
        }
    }
}

impl RingConfig {
    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }
}

/// Parse a sensitivity override such as `"0.02"`.
pub fn parse_drag_sensitivity(raw: &str) -> Result<f32, ConfigError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidSensitivity(raw.to_string())),
    }
}
