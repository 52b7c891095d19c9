//! Icon footprint and layout tunables per breakpoint

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::viewport::{Breakpoint, Viewport};

/// Most icons the desktop lays out
pub const MAX_ICONS: usize = 12;
/// Random candidates tried per icon before falling back to the grid
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// How initial icon positions are chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconLayoutPolicy {
    /// Random positions kept apart by rejection sampling
    #[default]
    Scatter,
    /// Deterministic grid spread edge to edge
    Grid,
}

/// Icon layout configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconLayoutConfig {
    pub policy: IconLayoutPolicy,
    pub max_icons: usize,
    pub max_attempts: usize,
    pub edge_padding: f32,
    pub icon_size_mobile: f32,
    pub icon_size_tablet: f32,
    pub icon_size_desktop: f32,
    pub top_reserve_mobile: f32,
    pub top_reserve: f32,
    pub bottom_reserve_mobile: f32,
    pub bottom_reserve: f32,
    pub spacing_extra_mobile: f32,
    pub spacing_extra: f32,
    pub columns_mobile: usize,
    pub columns: usize,
    pub fallback_cell_gap: f32,
    /// Space kept free under a dragged icon for the dock
    pub drag_bottom_reserve: f32,
}

impl Default for IconLayoutConfig {
    fn default() -> Self {
        Self {
            policy: IconLayoutPolicy::Scatter,
            max_icons: MAX_ICONS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            edge_padding: 20.0,
            icon_size_mobile: 64.0,
            icon_size_tablet: 80.0,
            icon_size_desktop: 96.0,
            top_reserve_mobile: 60.0,
            top_reserve: 80.0,
            bottom_reserve_mobile: 90.0,
            bottom_reserve: 100.0,
            spacing_extra_mobile: 20.0,
            spacing_extra: 30.0,
            columns_mobile: 4,
            columns: 6,
            fallback_cell_gap: 40.0,
            drag_bottom_reserve: 100.0,
        }
    }
}

impl IconLayoutConfig {
    pub fn validate(&self) -> DesktopResult<()> {
        if self.max_icons > MAX_ICONS {
            return Err(DesktopError::InvalidConfig(format!(
                "maxIcons must be at most {}, got {}",
                MAX_ICONS, self.max_icons
            )));
        }
        if self.columns == 0 || self.columns_mobile == 0 {
            return Err(DesktopError::InvalidConfig(
                "icon columns must be at least 1".to_string(),
            ));
        }

        let lengths = [
            ("edgePadding", self.edge_padding),
            ("iconSizeMobile", self.icon_size_mobile),
            ("iconSizeTablet", self.icon_size_tablet),
            ("iconSizeDesktop", self.icon_size_desktop),
            ("topReserveMobile", self.top_reserve_mobile),
            ("topReserve", self.top_reserve),
            ("bottomReserveMobile", self.bottom_reserve_mobile),
            ("bottomReserve", self.bottom_reserve),
            ("spacingExtraMobile", self.spacing_extra_mobile),
            ("spacingExtra", self.spacing_extra),
            ("fallbackCellGap", self.fallback_cell_gap),
            ("dragBottomReserve", self.drag_bottom_reserve),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DesktopError::InvalidConfig(format!(
                    "{} must be a non-negative length, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Icon footprint resolved for one viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconMetrics {
    pub icon_size: f32,
    pub top_reserve: f32,
    pub bottom_reserve: f32,
    pub padding: f32,
    /// Minimum distance between two icon origins
    pub min_spacing: f32,
    pub columns: usize,
    pub cell_gap: f32,
}

impl IconMetrics {
    pub fn resolve(config: &IconLayoutConfig, viewport: &Viewport) -> Self {
        let breakpoint = viewport.breakpoint();
        let mobile = breakpoint == Breakpoint::Mobile;

        let icon_size = match breakpoint {
            Breakpoint::Mobile => config.icon_size_mobile,
            Breakpoint::Tablet => config.icon_size_tablet,
            Breakpoint::Desktop => config.icon_size_desktop,
        };
        let pick = |mobile_value, value| if mobile { mobile_value } else { value };

        Self {
            icon_size,
            top_reserve: pick(config.top_reserve_mobile, config.top_reserve),
            bottom_reserve: pick(config.bottom_reserve_mobile, config.bottom_reserve),
            padding: config.edge_padding,
            min_spacing: icon_size + pick(config.spacing_extra_mobile, config.spacing_extra),
            columns: if mobile { config.columns_mobile } else { config.columns },
            cell_gap: config.fallback_cell_gap,
        }
    }
}
