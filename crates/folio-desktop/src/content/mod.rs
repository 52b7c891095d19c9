//! Desktop content: the project catalog and dock applications
//!
//! Both come from the data provider as JSON. The engine never interprets
//! project contents beyond status and id; everything else is carried through
//! to the presentation layer unchanged.

mod project;
mod dock;

pub use project::{load_projects, Feature, ProjectRecord, ProjectStatus};
pub use dock::{load_dock, DockAction, DockApp, DockAppKind};
