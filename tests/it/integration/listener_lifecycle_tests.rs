//! Drag source subscriptions across session boundaries, teardown and failures.

use crate::helpers::{ScriptedColumn, TestGridBuilder, at, column_target, py};
use std::rc::Rc;
use timegrid_creation::constants::{EVENT_DRAG_END, EVENT_DRAG_START};
use timegrid_creation::{
    ColumnCollection, CreationConfig, DragInput, DragSignal, DragSource, Element, TimeColumn,
    TimeCreation,
};

#[test]
fn test_idle_controller_listens_for_start_only() {
    let grid = TestGridBuilder::new().build();
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
}

#[test]
fn test_unresolved_start_is_ignored() {
    let mut grid = TestGridBuilder::new().build();

    for class in ["view-allday view-0", "view-time-date", "unrelated", ""] {
        assert!(grid.start(Element::new(class), 300.0));
    }
    // Column index past the end of the view
    assert!(grid.start(column_target(7), 300.0));

    assert!(grid.log.is_empty());
    assert!(grid.creation.state().is_idle());
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
}

#[test]
fn test_active_session_swaps_listeners() {
    let mut grid = TestGridBuilder::new().build();
    grid.start(column_target(0), 300.0);

    assert!(!grid.source.is_listening(DragSignal::DragStart));
    assert_eq!(
        grid.source.listening(),
        vec![DragSignal::Drag, DragSignal::DragEnd, DragSignal::Click]
    );

    grid.end(300.0);
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
}

#[test]
fn test_second_start_is_not_reachable_while_active() {
    let mut grid = TestGridBuilder::new().build();
    grid.start(column_target(0), 300.0);

    // Through the source: dropped
    assert!(!grid.start(column_target(1), 370.0));
    // Called directly: ignored, session untouched
    let direct = grid
        .creation
        .on_drag_start(&column_target(1), &py(370.0), None, None)
        .unwrap();
    assert!(direct.is_none());

    assert_eq!(grid.creation.state().column().unwrap().id(), 0);
    assert_eq!(grid.creation.state().start().unwrap().time_y, at(7, 30));
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START]);
}

#[test]
fn test_session_signals_dropped_while_idle() {
    let mut grid = TestGridBuilder::new().build();

    assert!(!grid.drag(300.0));
    assert!(!grid.end(300.0));
    assert!(!grid.click(300.0));
    assert!(grid.log.is_empty());
}

#[test]
fn test_direct_session_calls_while_idle_are_no_ops() {
    let mut grid = TestGridBuilder::new().build();

    assert!(grid.creation.on_drag(&py(300.0), None, None).unwrap().is_none());
    assert!(grid.creation.on_drag_end(&py(300.0)).unwrap().is_none());
    assert!(grid.creation.on_click(&py(300.0)).unwrap().is_none());
    assert!(grid.log.is_empty());
}

#[test]
fn test_destroy_is_idempotent() {
    let mut grid = TestGridBuilder::new().build();

    grid.creation.destroy();
    grid.creation.destroy();
    assert!(grid.source.listening().is_empty());
    assert!(grid.creation.state().is_idle());
}

#[test]
fn test_destroy_mid_session_clears_everything() {
    let mut grid = TestGridBuilder::new().build();
    grid.start(column_target(0), 300.0);

    grid.creation.destroy();

    assert!(grid.creation.state().is_idle());
    assert!(grid.creation.state().start().is_none());
    assert!(grid.source.listening().is_empty());
    assert!(!grid.drag(320.0));
    assert!(!grid.end(320.0));
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START]);
}

#[test]
fn test_drop_detaches_from_source() {
    let source = Rc::new(DragSource::new());
    {
        let _creation =
            TimeCreation::new(CreationConfig::default(), ColumnCollection::new(), Rc::clone(&source))
                .unwrap();
        assert!(source.is_listening(DragSignal::DragStart));
    }
    assert!(source.listening().is_empty());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = CreationConfig {
        grid_unit_minutes: 0,
        ..Default::default()
    };
    let source = Rc::new(DragSource::new());
    let result = TimeCreation::new(config, ColumnCollection::new(), Rc::clone(&source));

    assert!(result.is_err());
    assert!(source.listening().is_empty());
}

// ============================================================================
// Conversion failures
// ============================================================================

fn scripted_grid() -> crate::helpers::TestGrid {
    let column = ScriptedColumn::new(0)
        .with_position(100.0, 2.0, at(1, 0), 2.0, at(1, 0))
        .with_position(140.0, 4.0, at(2, 0), 4.0, at(2, 0));
    TestGridBuilder::new().with_columns(column.into_collection()).build()
}

#[test]
fn test_failed_start_conversion_stays_idle() {
    let mut grid = scripted_grid();

    let result = grid.try_dispatch(DragInput::Start {
        target: column_target(0),
        event: py(999.0),
    });

    assert!(result.is_err());
    assert!(grid.creation.state().is_idle());
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
    assert!(grid.log.is_empty());
}

#[test]
fn test_failed_move_ends_session() {
    let mut grid = scripted_grid();
    grid.start(column_target(0), 100.0);

    assert!(grid.try_dispatch(DragInput::Drag { event: py(999.0) }).is_err());

    assert!(grid.creation.state().is_idle());
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
    // The rest of the gesture is dropped
    assert!(!grid.drag(140.0));
    assert!(!grid.end(140.0));
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START]);

    // A new gesture starts from idle
    assert!(grid.start(column_target(0), 100.0));
    assert!(grid.end(140.0));
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START, EVENT_DRAG_START, EVENT_DRAG_END]);
}

#[test]
fn test_failed_direct_move_ends_session() {
    let mut grid = scripted_grid();
    grid.start(column_target(0), 100.0);

    assert!(grid.creation.on_drag(&py(999.0), None, None).is_err());
    assert!(!grid.creation.is_active());
    assert!(grid.creation.on_drag_end(&py(140.0)).unwrap().is_none());
}

#[test]
fn test_failed_end_conversion_still_tears_down() {
    let mut grid = scripted_grid();
    grid.start(column_target(0), 100.0);

    assert!(grid.try_dispatch(DragInput::End { event: py(999.0) }).is_err());

    assert!(grid.creation.state().is_idle());
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START]);

    // Next gesture works normally
    assert!(grid.start(column_target(0), 100.0));
    assert!(grid.end(140.0));
    assert_eq!(grid.log.last(EVENT_DRAG_END).unwrap().time_y, at(2, 0));
}

#[test]
fn test_failed_click_conversion_still_tears_down() {
    let mut grid = scripted_grid();
    grid.start(column_target(0), 100.0);

    assert!(grid.try_dispatch(DragInput::Click { event: py(999.0) }).is_err());

    assert!(grid.creation.state().is_idle());
    assert_eq!(grid.source.listening(), vec![DragSignal::DragStart]);
}
