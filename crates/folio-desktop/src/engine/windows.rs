//! Window lifecycle, dock actions and notices

use tracing::{debug, warn};

use crate::content::{DockAction, DockApp, DockAppKind};
use crate::error::{DesktopError, DesktopResult};
use crate::input::{DragTarget, InputResult};
use crate::window::{OpenOutcome, OpenRequest, WindowId, WindowKind};
use super::{DesktopEngine, Notice, WindowContent};

impl DesktopEngine {
    fn open_window(&mut self, id: WindowId, kind: WindowKind, content: WindowContent) -> InputResult {
        let request = OpenRequest::new(id.clone(), kind, content);
        match self.windows.open(request, &self.viewport) {
            OpenOutcome::Opened => InputResult::Opened { id },
            OpenOutcome::Focused => InputResult::Focused { id },
        }
    }

    /// Open (or focus) the detail window of a project.
    ///
    /// Projects still in progress raise the work-in-progress notice instead.
    pub fn open_project(&mut self, project_id: &str) -> DesktopResult<InputResult> {
        let project = self
            .project(project_id)
            .cloned()
            .ok_or_else(|| DesktopError::ProjectNotFound(project_id.to_string()))?;

        if project.is_in_progress() {
            return Ok(self.show_notice(Notice::WorkInProgress));
        }

        let id = project.window_id();
        Ok(self.open_window(id, WindowKind::ProjectDetail, WindowContent::Project(project)))
    }

    /// Open (or focus) the about window
    pub fn open_about(&mut self) -> InputResult {
        self.open_window(WindowId::about(), WindowKind::Info, WindowContent::About)
    }

    /// Open a window of `kind`. `key` names the project for detail windows
    /// and is ignored for the about window.
    pub fn open_kind(&mut self, kind: WindowKind, key: &str) -> DesktopResult<InputResult> {
        match kind {
            WindowKind::ProjectDetail => self.open_project(key),
            WindowKind::Info => Ok(self.open_about()),
        }
    }

    /// Activate the project behind icon slot `index`
    pub fn activate_icon(&mut self, index: usize) -> InputResult {
        let Some(project_id) = self.icon_project(index).map(|p| p.id.clone()) else {
            return InputResult::Unhandled;
        };
        match self.open_project(&project_id) {
            Ok(result) => result,
            Err(err) => {
                warn!(index, %err, "icon activation failed");
                InputResult::Unhandled
            }
        }
    }

    /// Bring a window to the front. No-op for unknown ids.
    pub fn focus_window(&mut self, id: &WindowId) -> InputResult {
        if self.windows.focus(id) {
            InputResult::Focused { id: id.clone() }
        } else {
            InputResult::Unhandled
        }
    }

    /// Close a window. No-op for unknown ids.
    pub fn close_window(&mut self, id: &WindowId) -> InputResult {
        if self.windows.close(id).is_none() {
            return InputResult::Unhandled;
        }

        let dragging_it = matches!(
            self.input.drag_state(),
            Some(state) if state.target() == DragTarget::Window(id.clone())
        );
        if dragging_it {
            self.input.cancel();
        }

        InputResult::Closed { id: id.clone() }
    }

    /// Distinct app ids with open windows, for dock indicators
    pub fn open_app_ids(&self) -> Vec<&str> {
        self.windows.open_app_ids()
    }

    /// Activate a dock app by id
    pub fn activate_dock_app(&mut self, app_id: &str) -> DesktopResult<InputResult> {
        let Some(app) = self.dock.iter().find(|a| a.id == app_id).cloned() else {
            warn!(app_id, "unknown dock app");
            return Err(DesktopError::UnknownDockApp(app_id.to_string()));
        };
        Ok(self.run_dock_app(&app))
    }

    /// Perform what a dock app does
    pub fn run_dock_app(&mut self, app: &DockApp) -> InputResult {
        debug!(app = %app.id, "dock app activated");
        match &app.kind {
            DockAppKind::Link { url } => InputResult::OpenUrl { url: url.clone() },
            DockAppKind::Action { action } => self.run_dock_action(*action),
        }
    }

    /// Perform a built-in dock action
    pub fn run_dock_action(&mut self, action: DockAction) -> InputResult {
        match action {
            DockAction::OpenAbout => self.open_about(),
            DockAction::OpenProjects => self.show_notice(Notice::WorkInProgress),
        }
    }

    fn show_notice(&mut self, notice: Notice) -> InputResult {
        debug!(?notice, "showing notice");
        self.notice = Some(notice);
        InputResult::ShowNotice { notice }
    }

    /// Hide the current notice. Returns false if none was shown.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::engine;
    use super::*;

    #[test]
    fn test_open_project() {
        let mut engine = engine();
        let result = engine.open_project("chess").unwrap();
        assert_eq!(result, InputResult::Opened { id: WindowId::project("chess") });

        let entry = engine.windows.get(&WindowId::project("chess")).unwrap();
        assert_eq!(entry.app_id, "vscode");
        assert!(entry.position.is_none());
        assert!(matches!(&entry.payload, WindowContent::Project(p) if p.id == "chess"));
    }

    #[test]
    fn test_open_twice_focuses() {
        let mut engine = engine();
        engine.open_project("chess").unwrap();
        engine.open_about();

        let result = engine.open_project("chess").unwrap();
        assert_eq!(result, InputResult::Focused { id: WindowId::project("chess") });
        assert_eq!(engine.windows.len(), 2);
        assert_eq!(engine.windows.focused(), Some(&WindowId::project("chess")));
    }

    #[test]
    fn test_in_progress_project_shows_notice() {
        let mut engine = engine();
        let result = engine.open_project("folio").unwrap();
        assert_eq!(result, InputResult::ShowNotice { notice: Notice::WorkInProgress });
        assert!(engine.windows.is_empty());
        assert_eq!(engine.notice(), Some(Notice::WorkInProgress));

        assert!(engine.dismiss_notice());
        assert!(!engine.dismiss_notice());
    }

    #[test]
    fn test_unknown_project() {
        let mut engine = engine();
        assert_eq!(
            engine.open_project("nope"),
            Err(DesktopError::ProjectNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_activate_icon() {
        let mut engine = engine();
        assert_eq!(
            engine.activate_icon(2),
            InputResult::Opened { id: WindowId::project("drone") }
        );
        assert_eq!(engine.activate_icon(9), InputResult::Unhandled);
    }

    #[test]
    fn test_close_and_focus_unknown_are_noops() {
        let mut engine = engine();
        engine.open_about();
        assert_eq!(engine.close_window(&WindowId::from("ghost")), InputResult::Unhandled);
        assert_eq!(engine.focus_window(&WindowId::from("ghost")), InputResult::Unhandled);
        assert_eq!(engine.windows.len(), 1);
    }

    #[test]
    fn test_close_recenters_last() {
        let mut engine = engine();
        engine.open_about();
        engine.open_project("chess").unwrap();
        assert!(engine.windows.get(&WindowId::about()).unwrap().position.is_some());

        engine.close_window(&WindowId::project("chess"));
        assert!(engine.windows.get(&WindowId::about()).unwrap().position.is_none());
    }

    #[test]
    fn test_open_app_ids() {
        let mut engine = engine();
        engine.open_project("chess").unwrap();
        engine.open_project("drone").unwrap();
        engine.open_about();
        assert_eq!(engine.open_app_ids(), vec!["vscode", "notes"]);
    }

    #[test]
    fn test_open_kind_from_host_strings() {
        let mut engine = engine();

        let kind: WindowKind = "project".parse().unwrap();
        assert_eq!(
            engine.open_kind(kind, "drone").unwrap(),
            InputResult::Opened { id: WindowId::project("drone") }
        );

        let kind: WindowKind = "about".parse().unwrap();
        assert_eq!(
            engine.open_kind(kind, "").unwrap(),
            InputResult::Opened { id: WindowId::about() }
        );
        assert_eq!(engine.open_app_ids(), vec!["vscode", "notes"]);

        assert_eq!(
            "terminal".parse::<WindowKind>(),
            Err(DesktopError::UnknownWindowKind("terminal".to_string()))
        );
        assert!(engine.open_kind(WindowKind::ProjectDetail, "nope").is_err());
    }

    #[test]
    fn test_dock_action_from_host_string() {
        let mut engine = engine();

        let action: DockAction = "openProjects".parse().unwrap();
        assert_eq!(
            engine.run_dock_action(action),
            InputResult::ShowNotice { notice: Notice::WorkInProgress }
        );
        assert!(engine.windows.is_empty());

        let action: DockAction = "openAbout".parse().unwrap();
        assert_eq!(engine.run_dock_action(action), InputResult::Opened { id: WindowId::about() });
        assert!("openTrash".parse::<DockAction>().is_err());
    }

    #[test]
    fn test_activate_icon_of_in_progress_project() {
        let mut engine = engine();
        assert_eq!(
            engine.activate_icon(1),
            InputResult::ShowNotice { notice: Notice::WorkInProgress }
        );
        assert!(engine.windows.is_empty());
    }

    #[test]
    fn test_dock_apps() {
        let mut engine = engine();
        engine.set_dock(vec![
            DockApp::link("github", "https://github.com/example"),
            DockApp::action("notes", DockAction::OpenAbout),
            DockApp::action("vscode", DockAction::OpenProjects),
        ]);

        assert_eq!(
            engine.activate_dock_app("github").unwrap(),
            InputResult::OpenUrl { url: "https://github.com/example".to_string() }
        );
        assert!(engine.windows.is_empty());

        assert_eq!(
            engine.activate_dock_app("notes").unwrap(),
            InputResult::Opened { id: WindowId::about() }
        );
        assert_eq!(
            engine.activate_dock_app("vscode").unwrap(),
            InputResult::ShowNotice { notice: Notice::WorkInProgress }
        );
        assert!(matches!(
            engine.activate_dock_app("trash"),
            Err(DesktopError::UnknownDockApp(_))
        ));
    }
}
