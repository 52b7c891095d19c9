//! Input result type

use serde::Serialize;
use crate::engine::Notice;
use crate::window::WindowId;

/// Result of input handling, reported back to the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A new window was opened
    Opened { id: WindowId },
    /// An already open window was brought to the front
    Focused { id: WindowId },
    /// A window was closed
    Closed { id: WindowId },
    /// A notice modal should be shown
    ShowNotice { notice: Notice },
    /// The host should open this URL in a new tab
    OpenUrl { url: String },
}
