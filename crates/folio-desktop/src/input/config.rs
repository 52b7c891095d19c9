//! Gesture tunables

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};

/// Movement (px) that turns a window-header press into a drag
pub const DEFAULT_WINDOW_DRAG_THRESHOLD: f32 = 5.0;
/// Movement (px) that turns an icon press into a drag
pub const DEFAULT_ICON_DRAG_THRESHOLD: f32 = 3.0;
/// Movement (px) that disqualifies a backdrop click
pub const DEFAULT_BACKDROP_THRESHOLD: f32 = 5.0;
/// Longest press (ms) still counted as a backdrop click
pub const DEFAULT_BACKDROP_MAX_PRESS_MS: f64 = 300.0;
/// How long (ms) after a drag a trailing click is swallowed
pub const DEFAULT_CLICK_GRACE_MS: f64 = 150.0;

/// Gesture classification configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    pub window_drag_threshold: f32,
    pub icon_drag_threshold: f32,
    pub backdrop_threshold: f32,
    pub backdrop_max_press_ms: f64,
    pub click_grace_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            window_drag_threshold: DEFAULT_WINDOW_DRAG_THRESHOLD,
            icon_drag_threshold: DEFAULT_ICON_DRAG_THRESHOLD,
            backdrop_threshold: DEFAULT_BACKDROP_THRESHOLD,
            backdrop_max_press_ms: DEFAULT_BACKDROP_MAX_PRESS_MS,
            click_grace_ms: DEFAULT_CLICK_GRACE_MS,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> DesktopResult<()> {
        let thresholds = [
            ("windowDragThreshold", self.window_drag_threshold),
            ("iconDragThreshold", self.icon_drag_threshold),
            ("backdropThreshold", self.backdrop_threshold),
        ];
        for (name, value) in thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(DesktopError::InvalidConfig(format!(
                    "{} must be a positive distance, got {}",
                    name, value
                )));
            }
        }

        let durations = [
            ("backdropMaxPressMs", self.backdrop_max_press_ms),
            ("clickGraceMs", self.click_grace_ms),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DesktopError::InvalidConfig(format!(
                    "{} must be a non-negative duration, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
