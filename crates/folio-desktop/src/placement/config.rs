//! Placement tunables

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};

/// Upper bound on window width
pub const DEFAULT_MAX_WINDOW_WIDTH: f32 = 800.0;
/// Window width as a share of viewport width
pub const DEFAULT_WINDOW_WIDTH_RATIO: f32 = 0.85;
/// Upper bound on window height
pub const DEFAULT_MAX_WINDOW_HEIGHT: f32 = 800.0;
/// Window height as a share of viewport height
pub const DEFAULT_WINDOW_HEIGHT_RATIO: f32 = 0.85;
/// Window height share on phones
pub const DEFAULT_MOBILE_WINDOW_HEIGHT_RATIO: f32 = 0.90;
/// Reserved height of the top menu bar
pub const DEFAULT_MENU_BAR_HEIGHT: f32 = 40.0;
/// Reserved height of the dock
pub const DEFAULT_DOCK_HEIGHT: f32 = 85.0;
/// Reserved height of the dock on phones
pub const DEFAULT_MOBILE_DOCK_HEIGHT: f32 = 70.0;
/// Gap around and between side-by-side windows
pub const DEFAULT_WINDOW_GAP: f32 = 25.0;
/// Diagonal offset of the second window when two do not fit side by side
pub const DEFAULT_STACK_OFFSET: f32 = 40.0;
/// Diagonal step per cascaded window
pub const DEFAULT_CASCADE_STEP: f32 = 30.0;
/// Number of cascade steps before the offset stops growing
pub const DEFAULT_CASCADE_CAP: usize = 8;
/// Minimum distance kept from the screen edges when centering
pub const DEFAULT_EDGE_MARGIN: f32 = 20.0;

/// Window placement configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementConfig {
    pub max_window_width: f32,
    pub window_width_ratio: f32,
    pub max_window_height: f32,
    pub window_height_ratio: f32,
    pub mobile_window_height_ratio: f32,
    pub menu_bar_height: f32,
    pub dock_height: f32,
    pub mobile_dock_height: f32,
    pub gap: f32,
    pub stack_offset: f32,
    pub cascade_step: f32,
    pub cascade_cap: usize,
    pub edge_margin: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_window_width: DEFAULT_MAX_WINDOW_WIDTH,
            window_width_ratio: DEFAULT_WINDOW_WIDTH_RATIO,
            max_window_height: DEFAULT_MAX_WINDOW_HEIGHT,
            window_height_ratio: DEFAULT_WINDOW_HEIGHT_RATIO,
            mobile_window_height_ratio: DEFAULT_MOBILE_WINDOW_HEIGHT_RATIO,
            menu_bar_height: DEFAULT_MENU_BAR_HEIGHT,
            dock_height: DEFAULT_DOCK_HEIGHT,
            mobile_dock_height: DEFAULT_MOBILE_DOCK_HEIGHT,
            gap: DEFAULT_WINDOW_GAP,
            stack_offset: DEFAULT_STACK_OFFSET,
            cascade_step: DEFAULT_CASCADE_STEP,
            cascade_cap: DEFAULT_CASCADE_CAP,
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl PlacementConfig {
    /// Reject values that would break the placement arithmetic
    pub fn validate(&self) -> DesktopResult<()> {
        let lengths = [
            ("maxWindowWidth", self.max_window_width),
            ("maxWindowHeight", self.max_window_height),
            ("menuBarHeight", self.menu_bar_height),
            ("dockHeight", self.dock_height),
            ("mobileDockHeight", self.mobile_dock_height),
            ("gap", self.gap),
            ("stackOffset", self.stack_offset),
            ("cascadeStep", self.cascade_step),
            ("edgeMargin", self.edge_margin),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(DesktopError::InvalidConfig(format!(
                    "{} must be a non-negative length, got {}",
                    name, value
                )));
            }
        }

        let ratios = [
            ("windowWidthRatio", self.window_width_ratio),
            ("windowHeightRatio", self.window_height_ratio),
            ("mobileWindowHeightRatio", self.mobile_window_height_ratio),
        ];
        for (name, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                return Err(DesktopError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
