//! Project records

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::DesktopResult;
use crate::window::WindowId;

/// Longest icon string still rendered as an emoji rather than an image path
const MAX_EMOJI_CHARS: usize = 4;

/// Publication status of a project
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// One highlighted feature in a project's detail window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A portfolio entry shown as a desktop icon
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Catalog key; numeric ids are accepted and kept as text
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Emoji or image path
    pub icon: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl ProjectRecord {
    /// Id of this project's detail window
    pub fn window_id(&self) -> WindowId {
        WindowId::project(&self.id)
    }

    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.status == ProjectStatus::InProgress
    }

    /// Short icons that are not paths render as emoji
    pub fn has_emoji_icon(&self) -> bool {
        !self.icon.starts_with('/') && self.icon.chars().count() <= MAX_EMOJI_CHARS
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Parse the project catalog
pub fn load_projects(json: &str) -> DesktopResult<Vec<ProjectRecord>> {
    let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
    debug!(count = projects.len(), "loaded project catalog");
    Ok(projects)
}
