//! Integration tests for DesktopEngine
//!
//! These tests drive the engine the way the front end does:
//! - Opening, focusing and closing windows with placement
//! - Dock apps and notices
//! - Icon clicks versus drags
//! - Backdrop dismissal and orientation changes

use folio_desktop::{
    load_dock, load_projects, DesktopConfig, DesktopEngine, InputResult, Notice, PlacementEngine,
    PointerTarget, Rect, Vec2, Viewport, WindowId, MIN_SUPPORTED_SIZE,
};

const PROJECTS: &str = r#"[
    {"id": 1, "title": "Chess Robot", "icon": "♟️", "status": "Completed",
     "technologies": ["Python"], "githubUrl": "https://github.com/example/chess"},
    {"id": 2, "title": "Weather Station", "icon": "🌦️", "status": "Completed"},
    {"id": 3, "title": "Portfolio", "icon": "💼", "status": "In Progress"},
    {"id": 4, "title": "Drone", "icon": "/img/drone.png", "status": "Completed"}
]"#;

const DOCK: &str = r#"[
    {"id": "linkedin", "name": "LinkedIn", "type": "link", "url": "https://linkedin.com/in/example"},
    {"id": "notes", "name": "About", "type": "action", "action": "openAbout"},
    {"id": "vscode", "name": "Projects", "type": "action", "action": "openProjects"}
]"#;

fn engine(width: f32, height: f32) -> DesktopEngine {
    let projects = load_projects(PROJECTS).unwrap();
    let mut engine = DesktopEngine::with_seed(DesktopConfig::default(), projects, 2024);
    engine.set_dock(load_dock(DOCK).unwrap());
    engine.init(width, height);
    engine
}

// =============================================================================
// Placement Scenarios
// =============================================================================

#[test]
fn test_second_window_side_by_side_then_recenter() {
    let mut engine = engine(1700.0, 1000.0);
    let a = WindowId::project("1");
    let b = WindowId::project("2");

    engine.open_project("1").unwrap();
    assert!(engine.windows.get(&a).unwrap().position.is_none());

    engine.open_project("2").unwrap();
    let pos_a = engine.windows.get(&a).unwrap().position.unwrap();
    let pos_b = engine.windows.get(&b).unwrap().position.unwrap();
    assert!((pos_b.x - (pos_a.x + 800.0 + 25.0)).abs() < 0.001);
    assert!((pos_a.y - pos_b.y).abs() < 0.001);

    engine.close_window(&a);
    assert!(engine.windows.get(&b).unwrap().position.is_none());
}

#[test]
fn test_second_window_stacks_when_too_narrow() {
    // 800 * 2 + 3 * 25 = 1675 does not fit in 1600
    let mut engine = engine(1600.0, 1080.0);
    engine.open_project("1").unwrap();
    engine.open_project("2").unwrap();

    let pos_a = engine.windows.get(&WindowId::project("1")).unwrap().position.unwrap();
    let pos_b = engine.windows.get(&WindowId::project("2")).unwrap().position.unwrap();
    assert!((pos_b.x - (pos_a.x + 40.0)).abs() < 0.001);
    assert!((pos_b.y - (pos_a.y + 40.0)).abs() < 0.001);
}

#[test]
fn test_third_window_cascades_inside_workspace() {
    let mut engine = engine(1440.0, 900.0);
    engine.open_project("1").unwrap();
    engine.open_project("2").unwrap();
    engine.open_project("4").unwrap();

    let size = engine.windows.placement().window_size(&engine.viewport);
    let pos = engine.windows.get(&WindowId::project("4")).unwrap().position.unwrap();
    assert!(pos.x >= 0.0);
    assert!(pos.y >= 40.0);
    assert!(pos.x + size.width <= 1440.0 + 0.001);
    assert!(pos.y + size.height <= 900.0 - 85.0 + 0.001);
}

#[test]
fn test_many_windows_stay_inside_workspace_from_min_size() {
    let placement = PlacementEngine::default();
    let sizes = [
        (MIN_SUPPORTED_SIZE.width, MIN_SUPPORTED_SIZE.height),
        (639.0, 480.0),
        (1024.0, 768.0),
    ];

    for (width, height) in sizes {
        let viewport = Viewport::new(width, height);
        let size = placement.window_size(&viewport);
        let workspace = placement.workspace(&viewport);

        for existing in 0..30 {
            let placed = placement.place(existing, &viewport);
            for pos in [placed.new_position(), placed.existing_position()].into_iter().flatten() {
                let rect = Rect::from_pos_size(pos, size);
                assert!(
                    workspace.contains_rect(&rect),
                    "{:?} escapes {:?} at {}x{} with {} open",
                    rect, workspace, width, height, existing
                );
            }
        }
    }
}

#[test]
fn test_degenerate_viewports_clamp_without_failing() {
    for (width, height) in [(0.0, 0.0), (1.0, 1.0), (50.0, 2000.0), (f32::NAN, f32::NAN)] {
        let mut engine = engine(1920.0, 1080.0);
        engine.open_project("1").unwrap();
        engine.open_project("2").unwrap();
        engine.open_project("4").unwrap();
        engine.open_about();

        engine.resize(width, height);

        if let Some(id) = engine.windows.entries().first().map(|e| e.id.clone()) {
            let rect = Rect::new(0.0, 40.0, 100.0, 100.0);
            engine.header_pointer_down(&id, 10.0, 50.0, rect);
            engine.pointer_move(f32::NAN, 1e9);
            engine.pointer_move(1e9, -1e9);
            engine.pointer_up(0.0);
        }

        let remaining: Vec<WindowId> = engine.windows.entries().iter().map(|e| e.id.clone()).collect();
        for id in remaining.iter().skip(1) {
            engine.close_window(id);
        }
        if let Some(last) = engine.windows.entries().first() {
            assert!(last.position.is_none());
        }
    }
}

#[test]
fn test_reopen_focuses_without_duplicate() {
    let mut engine = engine(1920.0, 1080.0);
    engine.open_project("1").unwrap();
    engine.open_project("2").unwrap();

    let result = engine.open_project("1").unwrap();
    assert_eq!(result, InputResult::Focused { id: WindowId::project("1") });
    assert_eq!(engine.windows.len(), 2);
    assert_eq!(engine.windows.focused(), Some(&WindowId::project("1")));
}

// =============================================================================
// Dock and Notices
// =============================================================================

#[test]
fn test_dock_workflow() {
    let mut engine = engine(1920.0, 1080.0);

    let result = engine.activate_dock_app("linkedin").unwrap();
    assert_eq!(result, InputResult::OpenUrl { url: "https://linkedin.com/in/example".to_string() });

    engine.activate_dock_app("notes").unwrap();
    engine.open_project("1").unwrap();
    assert_eq!(engine.open_app_ids(), vec!["notes", "vscode"]);

    let result = engine.activate_dock_app("vscode").unwrap();
    assert_eq!(result, InputResult::ShowNotice { notice: Notice::WorkInProgress });
    assert_eq!(engine.notice(), Some(Notice::WorkInProgress));
    assert!(engine.dismiss_notice());
    assert!(engine.notice().is_none());

    assert!(engine.activate_dock_app("spotify").is_err());
}

// =============================================================================
// Icons
// =============================================================================

#[test]
fn test_icon_click_versus_drag() {
    let mut engine = engine(1280.0, 800.0);
    let origin = engine.icons.position(0).unwrap();
    let press = origin + Vec2::splat(20.0);

    // 2px wiggle stays a click
    engine.icon_pointer_down(0, press.x, press.y);
    engine.pointer_move(press.x + 2.0, press.y);
    let result = engine.pointer_up(1000.0);
    assert_eq!(result, InputResult::Opened { id: WindowId::project("1") });
    assert_eq!(engine.icons.position(0), Some(origin));

    engine.close_window(&WindowId::project("1"));

    // 3px is a drag: the icon moves and nothing opens
    engine.icon_pointer_down(0, press.x, press.y);
    engine.pointer_move(press.x, press.y - 3.0);
    let result = engine.pointer_up(2000.0);
    assert_eq!(result, InputResult::Handled);
    assert!(engine.windows.is_empty());

    let moved = engine.icons.position(0).unwrap();
    assert!((moved.y - (origin.y - 3.0)).abs() < 0.001);
}

#[test]
fn test_in_progress_icon_raises_notice() {
    let mut engine = engine(1280.0, 800.0);
    let p = engine.icons.position(2).unwrap();

    engine.icon_pointer_down(2, p.x, p.y);
    let result = engine.pointer_up(0.0);
    assert_eq!(result, InputResult::ShowNotice { notice: Notice::WorkInProgress });
    assert!(engine.windows.is_empty());
}

#[test]
fn test_dragged_icons_survive_same_size_resize() {
    let mut engine = engine(1280.0, 800.0);
    let p = engine.icons.position(1).unwrap();

    engine.icon_pointer_down(1, p.x, p.y);
    engine.pointer_move(p.x + 10.0, p.y + 10.0);
    engine.pointer_up(0.0);
    let dropped = engine.icons.position(1);

    engine.resize(1280.0, 800.0);
    assert_eq!(engine.icons.position(1), dropped);
}

// =============================================================================
// Windows and Backdrop
// =============================================================================

#[test]
fn test_header_drag_clamped_above_dock() {
    let mut engine = engine(1920.0, 1080.0);
    engine.open_project("1").unwrap();
    let id = WindowId::project("1");
    let size = engine.windows.placement().window_size(&engine.viewport);
    let rect = Rect::new(560.0, 100.0, size.width, size.height);

    engine.header_pointer_down(&id, 600.0, 110.0, rect);
    engine.pointer_move(600.0, 2000.0);
    engine.pointer_up(0.0);

    let pos = engine.windows.get(&id).unwrap().position.unwrap();
    assert!((pos.y + size.height - (1080.0 - 85.0)).abs() < 0.001);
    assert!((pos.x - 560.0).abs() < 0.001);
}

#[test]
fn test_about_backdrop_dismissal() {
    let mut engine = engine(1920.0, 1080.0);
    engine.open_about();

    // Slow press keeps the overlay
    engine.backdrop_pointer_down(PointerTarget::Backdrop, 10.0, 10.0, 0.0);
    engine.backdrop_pointer_up(PointerTarget::Backdrop, 10.0, 10.0, 400.0);
    assert!(engine.windows.contains(&WindowId::about()));

    // Quick 4px click closes it
    engine.backdrop_pointer_down(PointerTarget::Backdrop, 10.0, 10.0, 1000.0);
    let result = engine.backdrop_pointer_up(PointerTarget::Backdrop, 14.0, 10.0, 1100.0);
    assert_eq!(result, InputResult::Closed { id: WindowId::about() });
}

#[test]
fn test_rotation_to_portrait_closes_everything() {
    let mut engine = engine(1024.0, 768.0);
    engine.open_about();
    engine.open_project("1").unwrap();

    engine.resize(768.0, 1024.0);
    assert_eq!(engine.windows.len(), 2);

    engine.resize(390.0, 844.0);
    assert!(engine.windows.is_empty());
    assert!(engine.open_app_ids().is_empty());
}
