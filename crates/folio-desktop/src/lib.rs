//! Window manager core for a desktop-metaphor portfolio
//!
//! This crate provides the state behind a browser "desktop" showing projects:
//! - Window registry (open-or-focus, close, stacking order)
//! - Window placement (centered, side by side, stacked, cascaded)
//! - Click-versus-drag gesture classification for icons and window headers
//! - Desktop icon layout per viewport
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`window`]: Window entries and the registry
//! - [`placement`]: Where new windows go
//! - [`input`]: Gesture classifiers and the input router
//! - [`icons`]: Icon position generation
//! - [`content`]: Project catalog and dock apps
//! - [`config`]: Tunable constants with JSON overrides
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{load_projects, DesktopConfig, DesktopEngine, InputResult, WindowId};
//!
//! let projects = load_projects(
//!     r#"[{"id": "chess", "title": "Chess Robot", "icon": "♟️", "status": "Completed"}]"#,
//! ).unwrap();
//!
//! let mut engine = DesktopEngine::with_seed(DesktopConfig::default(), projects, 1);
//! engine.init(1920.0, 1080.0);
//!
//! let result = engine.open_project("chess").unwrap();
//! assert_eq!(result, InputResult::Opened { id: WindowId::project("chess") });
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Injected Time and Randomness**: gestures take timestamps, icon scatter takes an `Rng`
//! 3. **Clamp, Don't Fail**: degenerate geometry and unknown ids never error

pub mod math;
pub mod window;
pub mod placement;
pub mod input;
pub mod icons;
pub mod content;
pub mod config;
pub mod error;

mod engine;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use window::{OpenOutcome, OpenRequest, WindowEntry, WindowId, WindowKind, WindowRegistry};
pub use placement::{Placement, PlacementConfig, PlacementEngine};
pub use input::{DragState, DragTarget, DragTracker, GestureConfig, GestureOutcome, InputResult, InputRouter, PointerTarget};
pub use icons::{IconLayout, IconLayoutConfig, IconLayoutPolicy};
pub use content::{load_dock, load_projects, DockAction, DockApp, ProjectRecord, ProjectStatus};
pub use config::DesktopConfig;
pub use error::{DesktopError, DesktopResult};

pub use engine::{DesktopEngine, Notice, WindowContent};
pub use viewport::{Breakpoint, Viewport, MIN_SUPPORTED_SIZE};
