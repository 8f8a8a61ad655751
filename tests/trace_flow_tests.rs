//! Integrationstests für die vollständigen Editier-Abläufe:
//! Intent → Command-Mapping → Handler → Modell- und UI-Zustand.

use glam::Vec2;
use point_trace_editor::{AppCommand, AppController, AppIntent, AppState};

/// Klickt nacheinander gut separierte Punkte (Abstand > Klickradius)
/// und lässt die Maustaste jeweils wieder los.
fn place_points(controller: &mut AppController, state: &mut AppState, points: &[Vec2]) {
    for &pos in points {
        controller
            .handle_intent(state, AppIntent::PointerPressed { pos })
            .expect("PointerPressed sollte ohne Fehler durchlaufen");
        controller
            .handle_intent(state, AppIntent::PointerReleased { pos })
            .expect("PointerReleased sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_click_on_empty_canvas_appends_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(&mut controller, &mut state, &[Vec2::new(100.0, 100.0)]);

    assert_eq!(state.trace.points(), &[Vec2::new(100.0, 100.0)]);
    assert!(!state.trace.is_dragging());
    assert_eq!(state.ui.status_message, "Point 1 placed at (100, 100)");
}

#[test]
fn test_click_on_segment_inserts_between_endpoints() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(
        &mut controller,
        &mut state,
        &[Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0)],
    );

    // Klick mitten auf das Segment, 3px daneben (innerhalb line_tolerance)
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(100.0, 3.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.trace.point_count(), 3);
    assert_eq!(state.trace.points()[1], Vec2::new(100.0, 3.0));
    assert_eq!(
        state.ui.status_message,
        "Point inserted at position 2: (100, 3)"
    );
}

#[test]
fn test_press_drag_release_moves_existing_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(
        &mut controller,
        &mut state,
        &[Vec2::new(50.0, 50.0), Vec2::new(200.0, 200.0)],
    );

    // Druck direkt auf Punkt 1 startet den Drag
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert!(state.trace.is_dragging());
    assert_eq!(state.ui.status_message, "Dragging point 1");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(80.0, 90.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    assert_eq!(state.trace.points()[0], Vec2::new(80.0, 90.0));
    assert_eq!(state.ui.status_message, "Moving point 1 to (80, 90)");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                pos: Vec2::new(80.0, 90.0),
            },
        )
        .expect("PointerReleased sollte ohne Fehler durchlaufen");

    assert!(!state.trace.is_dragging());
    assert_eq!(state.trace.point_count(), 2);
    assert_eq!(state.ui.status_message, "Point 1 moved to (80, 90)");
}

#[test]
fn test_press_while_dragging_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(&mut controller, &mut state, &[Vec2::new(50.0, 50.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert!(state.trace.is_dragging());
    let log_len = state.command_log.len();

    // Zweiter Druck während des Drags erzeugt keinen Command
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.command_log.len(), log_len);
    assert_eq!(state.trace.point_count(), 1);
    assert!(state.trace.is_dragging());
}

#[test]
fn test_delete_near_cursor_removes_point_and_reports() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(
        &mut controller,
        &mut state,
        &[Vec2::new(50.0, 50.0), Vec2::new(200.0, 200.0)],
    );

    // Cursor in Klickreichweite von Punkt 1 bewegen, dann löschen
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(53.0, 50.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::DeleteNearCursorRequested)
        .expect("DeleteNearCursorRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.trace.points(), &[Vec2::new(200.0, 200.0)]);
    assert_eq!(state.ui.status_message, "Deleted point at (50, 50)");
}

#[test]
fn test_delete_with_no_point_in_range_is_noop_with_message() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(&mut controller, &mut state, &[Vec2::new(50.0, 50.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(400.0, 400.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::DeleteNearCursorRequested)
        .expect("DeleteNearCursorRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.trace.point_count(), 1);
    assert_eq!(
        state.ui.status_message,
        "No point near mouse cursor to delete"
    );
}

#[test]
fn test_clear_trace_resets_points_and_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(
        &mut controller,
        &mut state,
        &[Vec2::new(50.0, 50.0), Vec2::new(200.0, 200.0)],
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert!(state.trace.is_dragging());

    controller
        .handle_intent(&mut state, AppIntent::ClearTraceRequested)
        .expect("ClearTraceRequested sollte ohne Fehler durchlaufen");

    assert!(state.trace.is_empty());
    assert!(!state.trace.is_dragging());
    assert_eq!(state.ui.status_message, "All points cleared");
}

#[test]
fn test_copy_coordinates_prepares_clipboard_payload() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(
        &mut controller,
        &mut state,
        &[Vec2::new(1.0, 2.0), Vec2::new(30.0, 40.0)],
    );

    controller
        .handle_intent(&mut state, AppIntent::CopyCoordinatesRequested)
        .expect("CopyCoordinatesRequested sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.ui.clipboard_payload.as_deref(),
        Some("(1, 2), (30, 40)")
    );
    assert_eq!(state.ui.status_message, "Coordinates copied to clipboard!");
}

#[test]
fn test_copy_with_empty_trace_warns_and_leaves_clipboard_untouched() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::CopyCoordinatesRequested)
        .expect("CopyCoordinatesRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.clipboard_payload.is_none());
    assert_eq!(
        state.ui.status_message,
        "No points to copy. Place some points first."
    );
}

#[test]
fn test_pointer_move_without_drag_only_tracks_cursor() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(123.0, 45.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert_eq!(state.trace.cursor(), Vec2::new(123.0, 45.0));
    assert!(state.trace.is_empty());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::TrackCursor { pos } => assert_eq!(*pos, Vec2::new(123.0, 45.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_release_without_drag_emits_no_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointerReleased sollte ohne Fehler durchlaufen");

    assert!(state.command_log.is_empty());
    assert_eq!(state.ui.status_message, point_trace_editor::STATUS_HINT);
}

#[test]
fn test_delete_during_drag_of_same_point_ends_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place_points(&mut controller, &mut state, &[Vec2::new(50.0, 50.0)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert!(state.trace.is_dragging());

    // Cursor mitziehen (bewegt als Drag auch den Punkt selbst)
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(60.0, 60.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::DeleteNearCursorRequested)
        .expect("DeleteNearCursorRequested sollte ohne Fehler durchlaufen");

    assert!(state.trace.is_empty());
    assert!(!state.trace.is_dragging());
}
