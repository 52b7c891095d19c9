//! Dock applications

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};

/// Built-in behaviour a dock app can trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DockAction {
    /// Open or focus the about window
    OpenAbout,
    /// Project browser, not built yet
    OpenProjects,
}

impl FromStr for DockAction {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openAbout" => Ok(DockAction::OpenAbout),
            "openProjects" => Ok(DockAction::OpenProjects),
            other => Err(DesktopError::UnknownDockApp(other.to_string())),
        }
    }
}

/// What activating a dock app does
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DockAppKind {
    /// External page opened in a new tab
    Link { url: String },
    /// In-desktop action
    Action { action: DockAction },
}

/// An application in the dock
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockApp {
    /// Matches window app ids for the running indicator
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub kind: DockAppKind,
}

impl DockApp {
    pub fn link(id: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            kind: DockAppKind::Link { url: url.to_string() },
        }
    }

    pub fn action(id: &str, action: DockAction) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            kind: DockAppKind::Action { action },
        }
    }
}

/// Parse the dock app list
pub fn load_dock(json: &str) -> DesktopResult<Vec<DockApp>> {
    Ok(serde_json::from_str(json)?)
}
