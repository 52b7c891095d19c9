//! Placement arithmetic

use serde::Serialize;
use tracing::debug;

use crate::math::{clamp_lower_wins, Rect, Size, Vec2};
use crate::viewport::Viewport;
use super::PlacementConfig;

/// Outcome of placing one new window
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Placement {
    /// First window: no explicit position, the presentation centers it
    Centered,
    /// Second window beside the first; the first moves to the left slot
    SideBySide { left: Vec2, right: Vec2 },
    /// Second window offset diagonally from the recentered first one
    Stacked { existing: Vec2, new: Vec2 },
    /// Third and later windows
    Cascade(Vec2),
}

impl Placement {
    /// Position for the window being opened (`None` = auto-center)
    pub fn new_position(&self) -> Option<Vec2> {
        match *self {
            Placement::Centered => None,
            Placement::SideBySide { right, .. } => Some(right),
            Placement::Stacked { new, .. } => Some(new),
            Placement::Cascade(pos) => Some(pos),
        }
    }

    /// New position for the single pre-existing window, if it moves
    pub fn existing_position(&self) -> Option<Vec2> {
        match *self {
            Placement::SideBySide { left, .. } => Some(left),
            Placement::Stacked { existing, .. } => Some(existing),
            Placement::Centered | Placement::Cascade(_) => None,
        }
    }
}

/// Pure placement engine over a [`PlacementConfig`]
#[derive(Clone, Debug, Default)]
pub struct PlacementEngine {
    config: PlacementConfig,
}

impl PlacementEngine {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Dock reservation for the viewport's breakpoint
    pub fn dock_height(&self, viewport: &Viewport) -> f32 {
        if viewport.is_mobile() {
            self.config.mobile_dock_height
        } else {
            self.config.dock_height
        }
    }

    /// The band windows may occupy: full width, below the menu bar, above the dock
    pub fn workspace(&self, viewport: &Viewport) -> Rect {
        let top = self.config.menu_bar_height;
        let height = (viewport.height() - top - self.dock_height(viewport)).max(0.0);
        Rect::new(0.0, top, viewport.width(), height)
    }

    /// Window size for this viewport, clamped to fit the workspace
    pub fn window_size(&self, viewport: &Viewport) -> Size {
        let ratio = if viewport.is_mobile() {
            self.config.mobile_window_height_ratio
        } else {
            self.config.window_height_ratio
        };
        let workspace = self.workspace(viewport);

        let width = self
            .config
            .max_window_width
            .min(viewport.width() * self.config.window_width_ratio)
            .max(0.0);
        let height = self
            .config
            .max_window_height
            .min(viewport.height() * ratio)
            .min(workspace.height)
            .max(0.0);

        Size::new(width, height)
    }

    /// Keep a window of `size` at `position` fully inside the workspace.
    ///
    /// On a workspace smaller than the window, the top-left edge wins.
    pub fn clamp_to_workspace(&self, position: Vec2, size: Size, viewport: &Viewport) -> Vec2 {
        let workspace = self.workspace(viewport);
        Vec2::new(
            clamp_lower_wins(position.x, workspace.x, workspace.right() - size.width),
            clamp_lower_wins(position.y, workspace.y, workspace.bottom() - size.height),
        )
    }

    /// Whether two windows plus three gaps fit across the viewport
    pub fn fits_side_by_side(&self, size: Size, viewport: &Viewport) -> bool {
        size.width * 2.0 + self.config.gap * 3.0 <= viewport.width()
    }

    /// Centered origin within the workspace, kept off the edges
    fn centered_origin(&self, size: Size, viewport: &Viewport) -> Vec2 {
        let workspace = self.workspace(viewport);
        let margin = self.config.edge_margin;
        let centered = Vec2::new(
            ((viewport.width() - size.width) / 2.0).max(margin),
            (workspace.y + (workspace.height - size.height) / 2.0).max(workspace.y + margin),
        );
        self.clamp_to_workspace(centered, size, viewport)
    }

    /// Place a new window given how many are already open
    pub fn place(&self, existing: usize, viewport: &Viewport) -> Placement {
        let size = self.window_size(viewport);

        let placement = match existing {
            0 => Placement::Centered,
            1 => self.place_second(size, viewport),
            n => self.place_cascaded(n, size, viewport),
        };

        debug!(
            existing,
            width = viewport.width(),
            height = viewport.height(),
            ?placement,
            "placed window"
        );
        placement
    }

    fn place_second(&self, size: Size, viewport: &Viewport) -> Placement {
        let gap = self.config.gap;

        if self.fits_side_by_side(size, viewport) {
            let left_x = (viewport.width() - (size.width * 2.0 + gap)) / 2.0;
            let y = self.centered_origin(size, viewport).y;
            let left = self.clamp_to_workspace(Vec2::new(left_x, y), size, viewport);
            let right = self.clamp_to_workspace(
                Vec2::new(left_x + size.width + gap, y),
                size,
                viewport,
            );
            Placement::SideBySide { left, right }
        } else {
            let existing = self.centered_origin(size, viewport);
            let new = self.clamp_to_workspace(
                existing + Vec2::splat(self.config.stack_offset),
                size,
                viewport,
            );
            Placement::Stacked { existing, new }
        }
    }

    fn place_cascaded(&self, existing: usize, size: Size, viewport: &Viewport) -> Placement {
        let workspace = self.workspace(viewport);
        let margin = self.config.edge_margin;
        let steps = (existing - 1).min(self.config.cascade_cap);
        let offset = steps as f32 * self.config.cascade_step;

        let x = clamp_lower_wins(
            (viewport.width() - size.width) / 2.0 + offset,
            margin,
            viewport.width() - size.width - margin,
        );
        let y = clamp_lower_wins(
            workspace.y + (workspace.height - size.height) / 2.0 + offset,
            workspace.y + margin,
            workspace.bottom() - size.height - margin,
        );

        Placement::Cascade(self.clamp_to_workspace(Vec2::new(x, y), size, viewport))
    }
}
