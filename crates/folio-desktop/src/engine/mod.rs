//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: opening, focusing and closing windows, dock actions
//! - `input`: pointer events for icons, window headers and the backdrop
//!
//! The engine is the only owner of the registry, the stacking counter and
//! gesture state. The presentation layer reads state and requests operations.

mod windows;
mod input;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use crate::config::DesktopConfig;
use crate::content::{DockApp, ProjectRecord};
use crate::icons::IconLayout;
use crate::input::InputRouter;
use crate::placement::PlacementEngine;
use crate::viewport::Viewport;
use crate::window::WindowRegistry;

/// Transient modal raised instead of opening a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Notice {
    /// The requested content is not ready yet
    WorkInProgress,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::WorkInProgress => "Work in Progress",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::WorkInProgress => {
                "This feature is currently under development. Please explore my projects by clicking on the desktop icons!"
            }
        }
    }
}

/// What a window shows
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WindowContent {
    Project(ProjectRecord),
    About,
}

/// Desktop engine coordinating all desktop components
///
/// Owns:
/// - Viewport (host window size)
/// - Window registry (open/focus/close, stacking counter, placement)
/// - Icon layout (positions per viewport, user drags)
/// - Input router (one gesture at a time, backdrop dismissal)
pub struct DesktopEngine {
    pub(crate) config: DesktopConfig,
    /// Current host viewport
    pub viewport: Viewport,
    /// Open windows
    pub windows: WindowRegistry<WindowContent>,
    /// Desktop icon positions
    pub icons: IconLayout,
    /// Gesture state
    pub input: InputRouter,
    pub(crate) projects: Vec<ProjectRecord>,
    pub(crate) dock: Vec<DockApp>,
    pub(crate) notice: Option<Notice>,
    rng: SmallRng,
}

impl DesktopEngine {
    /// Create an engine over the project catalog, seeding icon scatter from the OS
    pub fn new(config: DesktopConfig, projects: Vec<ProjectRecord>) -> Self {
        Self::with_rng(config, projects, SmallRng::from_entropy())
    }

    /// Create an engine with reproducible icon scatter
    pub fn with_seed(config: DesktopConfig, projects: Vec<ProjectRecord>, seed: u64) -> Self {
        Self::with_rng(config, projects, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: DesktopConfig, projects: Vec<ProjectRecord>, rng: SmallRng) -> Self {
        Self {
            viewport: Viewport::default(),
            windows: WindowRegistry::new(PlacementEngine::new(config.placement.clone())),
            icons: IconLayout::new(config.icons.clone(), projects.len()),
            input: InputRouter::new(config.gestures.clone()),
            projects,
            dock: Vec::new(),
            notice: None,
            config,
            rng,
        }
    }

    /// Initialize with the host's screen dimensions. Safe to call twice.
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.icons.relayout(&self.viewport, &mut self.rng);
    }

    /// Handle a resize or orientation change.
    ///
    /// Icons are re-laid out only if the size actually changed. Narrow
    /// portrait screens close every window.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);

        if self.viewport.is_narrow_portrait() && !self.windows.is_empty() {
            let closed = self.windows.close_all();
            self.input.cancel();
            debug!(closed, width, height, "narrow portrait, closed windows");
        }

        if self.icons.relayout(&self.viewport, &mut self.rng) {
            debug!(width, height, "icons re-laid out");
        }
    }

    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Project catalog in icon order
    #[inline]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Project shown by icon slot `index`. Projects past the icon cap have no icon.
    pub fn icon_project(&self, index: usize) -> Option<&ProjectRecord> {
        if index >= self.icons.count() {
            return None;
        }
        self.projects.get(index)
    }

    #[inline]
    pub fn dock(&self) -> &[DockApp] {
        &self.dock
    }

    pub fn set_dock(&mut self, apps: Vec<DockApp>) {
        self.dock = apps;
    }

    /// Notice currently shown, if any
    #[inline]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }
}
