//! WASM exports for the portfolio desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the React front end to drive windows, icons and the dock.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::content::{load_dock, load_projects, DockAction};
use crate::engine::DesktopEngine;
use crate::error::DesktopError;
use crate::input::{DragTarget, InputResult, PointerTarget};
use crate::math::Rect;
use crate::window::{WindowId, WindowKind};

// Host clock for gesture timing
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

fn to_js_error(err: DesktopError) -> JsValue {
    let msg = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&msg));
    js_sys::Error::new(&msg).into()
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

fn pointer_target(on_backdrop: bool) -> PointerTarget {
    if on_backdrop {
        PointerTarget::Backdrop
    } else {
        PointerTarget::Content
    }
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller from the project catalog and optional config overrides
    #[wasm_bindgen(constructor)]
    pub fn new(projects_json: &str, config_json: Option<String>) -> Result<DesktopController, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(to_js_error)?,
            None => DesktopConfig::default(),
        };
        let projects = load_projects(projects_json).map_err(to_js_error)?;

        Ok(Self {
            engine: DesktopEngine::new(config, projects),
        })
    }

    /// Replace the dock apps
    #[wasm_bindgen]
    pub fn set_dock(&mut self, dock_json: &str) -> Result<(), JsValue> {
        let apps = load_dock(dock_json).map_err(to_js_error)?;
        self.engine.set_dock(apps);
        Ok(())
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Initialize with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Handle resize and orientation change
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    #[wasm_bindgen]
    pub fn open_project(&mut self, project_id: &str) -> Result<String, JsValue> {
        let result = self.engine.open_project(project_id).map_err(to_js_error)?;
        Ok(result_json(&result))
    }

    /// Open a window by kind name ("project", "about", ...) and content key
    #[wasm_bindgen]
    pub fn open_window(&mut self, kind: &str, key: &str) -> Result<String, JsValue> {
        let kind: WindowKind = kind.parse().map_err(to_js_error)?;
        let result = self.engine.open_kind(kind, key).map_err(to_js_error)?;
        Ok(result_json(&result))
    }

    #[wasm_bindgen]
    pub fn open_about(&mut self) -> String {
        result_json(&self.engine.open_about())
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> String {
        result_json(&self.engine.focus_window(&WindowId::from(id)))
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> String {
        result_json(&self.engine.close_window(&WindowId::from(id)))
    }

    /// Activate a dock app by id
    #[wasm_bindgen]
    pub fn activate_dock_app(&mut self, app_id: &str) -> Result<String, JsValue> {
        let result = self.engine.activate_dock_app(app_id).map_err(to_js_error)?;
        Ok(result_json(&result))
    }

    /// Run a built-in dock action by name ("openAbout", "openProjects")
    #[wasm_bindgen]
    pub fn run_dock_action(&mut self, action: &str) -> Result<String, JsValue> {
        let action: DockAction = action.parse().map_err(to_js_error)?;
        Ok(result_json(&self.engine.run_dock_action(action)))
    }

    #[wasm_bindgen]
    pub fn dismiss_notice(&mut self) -> bool {
        self.engine.dismiss_notice()
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    #[wasm_bindgen]
    pub fn icon_pointer_down(&mut self, index: usize, x: f32, y: f32) -> String {
        result_json(&self.engine.icon_pointer_down(index, x, y))
    }

    #[wasm_bindgen]
    pub fn window_pointer_down(&mut self, id: &str) -> String {
        result_json(&self.engine.window_pointer_down(&WindowId::from(id)))
    }

    /// Start a header drag; the rect is the window as currently rendered
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn header_pointer_down(
        &mut self,
        id: &str,
        x: f32,
        y: f32,
        rect_x: f32,
        rect_y: f32,
        rect_w: f32,
        rect_h: f32,
    ) -> String {
        let rect = Rect::new(rect_x, rect_y, rect_w, rect_h);
        result_json(&self.engine.header_pointer_down(&WindowId::from(id), x, y, rect))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        result_json(&self.engine.pointer_move(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        result_json(&self.engine.pointer_up(date_now()))
    }

    #[wasm_bindgen]
    pub fn cancel_gesture(&mut self) {
        self.engine.cancel_gesture();
    }

    /// Whether a native click on an icon should be swallowed
    #[wasm_bindgen]
    pub fn is_icon_click_suppressed(&self, index: usize) -> bool {
        self.engine.is_click_suppressed(&DragTarget::Icon(index), date_now())
    }

    #[wasm_bindgen]
    pub fn backdrop_pointer_down(&mut self, on_backdrop: bool, x: f32, y: f32) -> String {
        let target = pointer_target(on_backdrop);
        result_json(&self.engine.backdrop_pointer_down(target, x, y, date_now()))
    }

    #[wasm_bindgen]
    pub fn backdrop_pointer_up(&mut self, on_backdrop: bool, x: f32, y: f32) -> String {
        let target = pointer_target(on_backdrop);
        result_json(&self.engine.backdrop_pointer_up(target, x, y, date_now()))
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Open windows back to front, with the size new windows are given
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let placement = self.engine.windows.placement();
        let size = placement.window_size(&self.engine.viewport);
        let workspace = placement.workspace(&self.engine.viewport);

        serde_json::to_string(&serde_json::json!({
            "windows": self.engine.windows.by_stack_order(),
            "focused": self.engine.windows.focused(),
            "windowSize": { "width": size.width, "height": size.height },
            "workspace": {
                "x": workspace.x,
                "y": workspace.y,
                "width": workspace.width,
                "height": workspace.height
            }
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Icon positions paired with their projects
    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        let icon_size = self
            .engine
            .icons
            .metrics()
            .map(|m| m.icon_size)
            .unwrap_or(0.0);

        let icons: Vec<serde_json::Value> = self
            .engine
            .icons
            .positions()
            .iter()
            .enumerate()
            .filter_map(|(index, pos)| {
                let project = self.engine.icon_project(index)?;
                Some(serde_json::json!({
                    "index": index,
                    "projectId": project.id,
                    "title": project.title,
                    "icon": project.icon,
                    "emoji": project.has_emoji_icon(),
                    "x": pos.x,
                    "y": pos.y,
                    "size": icon_size
                }))
            })
            .collect();

        serde_json::to_string(&icons).unwrap_or_else(|_| "[]".to_string())
    }

    /// App ids with open windows, for dock indicators
    #[wasm_bindgen]
    pub fn get_open_app_ids_json(&self) -> String {
        serde_json::to_string(&self.engine.open_app_ids()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Current notice, or `null`
    #[wasm_bindgen]
    pub fn get_notice_json(&self) -> String {
        let notice = self.engine.notice().map(|notice| {
            serde_json::json!({
                "kind": notice,
                "title": notice.title(),
                "message": notice.message()
            })
        });
        serde_json::to_string(&notice).unwrap_or_else(|_| "null".to_string())
    }
}
