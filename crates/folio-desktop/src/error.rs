//! Error types for the portfolio desktop
//!
//! Core registry and geometry operations never fail: unknown ids are no-ops
//! and degenerate geometry is clamped. Errors only arise at the edges, where
//! JSON or strings from the presentation layer are turned into typed values.

/// Errors that can occur while translating external input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A window kind string did not name a known kind
    UnknownWindowKind(String),

    /// A dock app id or action string was not recognised
    UnknownDockApp(String),

    /// No project with the given id exists in the catalog
    ProjectNotFound(String),

    /// A configuration value is out of its valid range
    InvalidConfig(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindowKind(kind) => write!(f, "unknown window kind: {}", kind),
            Self::UnknownDockApp(app) => write!(f, "unknown dock app: {}", app),
            Self::ProjectNotFound(id) => write!(f, "project not found: {}", id),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
