//! Window entry and identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::DesktopError;
use crate::math::Vec2;

/// Unique window identifier, derived from the window kind and a content key
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Id of the detail window for the project with `key`
    pub fn project(key: &str) -> Self {
        Self(format!("project-{}", key))
    }

    /// Id of the singleton about window
    pub fn about() -> Self {
        Self("about".to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WindowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of window kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    /// Finder-style project detail window
    ProjectDetail,
    /// Notes-style about window
    Info,
}

impl WindowKind {
    /// Dock application that owns windows of this kind
    pub fn app_id(self) -> &'static str {
        match self {
            WindowKind::ProjectDetail => "vscode",
            WindowKind::Info => "notes",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowKind::ProjectDetail => "project-detail",
            WindowKind::Info => "info",
        }
    }
}

impl FromStr for WindowKind {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project-detail" | "project" => Ok(WindowKind::ProjectDetail),
            "info" | "about" => Ok(WindowKind::Info),
            other => Err(DesktopError::UnknownWindowKind(other.to_string())),
        }
    }
}

/// Request to open (or focus) a window
#[derive(Clone, Debug)]
pub struct OpenRequest<P> {
    pub id: WindowId,
    pub app_id: String,
    pub kind: WindowKind,
    pub payload: P,
}

impl<P> OpenRequest<P> {
    /// Request with the kind's default app id
    pub fn new(id: WindowId, kind: WindowKind, payload: P) -> Self {
        Self {
            id,
            app_id: kind.app_id().to_string(),
            kind,
            payload,
        }
    }
}

/// An open window
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEntry<P> {
    /// Unique identifier
    pub id: WindowId,
    /// Dock application owning the window
    pub app_id: String,
    /// Window kind
    pub kind: WindowKind,
    /// Content to render, never interpreted here
    pub payload: P,
    /// Stacking order (higher = in front)
    pub stack_order: u32,
    /// Explicit top-left position, `None` = let the presentation center it
    pub position: Option<Vec2>,
}
