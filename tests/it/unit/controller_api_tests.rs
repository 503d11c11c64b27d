//! Unit tests for the controller's direct-call API.

use crate::helpers::{TestGridBuilder, at, column_target, on_day, py};
use timegrid_creation::PointerSample;
use timegrid_creation::constants::{EVENT_DRAG_CLICK, EVENT_DRAG_MOVE, EVENT_DRAG_START};

#[test]
fn test_start_event_name_override() {
    let mut grid = TestGridBuilder::new().build();

    let sample = grid
        .creation
        .on_drag_start(&column_target(0), &py(300.0), Some("allday-creation-start"), None)
        .unwrap()
        .unwrap();

    assert_eq!(grid.log.names(), vec!["allday-creation-start"]);
    assert_eq!(sample.time_y, at(7, 30));
}

#[test]
fn test_start_revision_is_kept_as_session_start() {
    let mut grid = TestGridBuilder::new().build();
    let mut revise = |sample: &mut PointerSample| sample.nearest_grid_time_y = at(6, 0);

    grid.creation
        .on_drag_start(&column_target(0), &py(300.0), None, Some(&mut revise))
        .unwrap();

    let emitted = grid.log.last(EVENT_DRAG_START).unwrap();
    assert_eq!(emitted.nearest_grid_time_y, at(6, 0));
    assert_eq!(grid.creation.state().start().unwrap().nearest_grid_time_y, at(6, 0));

    // The revised start anchors the final range
    let end = grid.creation.on_drag_end(&py(300.0)).unwrap().unwrap();
    assert_eq!(end.nearest_range.unwrap().start(), at(6, 0));
}

#[test]
fn test_move_revision_runs_after_bias() {
    let mut grid = TestGridBuilder::new().build();
    grid.start(column_target(0), 300.0);

    let mut seen_bias = None;
    let mut revise = |sample: &mut PointerSample| {
        seen_bias = Some(sample.nearest_grid_y);
        sample.mouse_y = -1.0;
    };
    let sample = grid
        .creation
        .on_drag(&py(370.0), Some("resize-move"), Some(&mut revise))
        .unwrap()
        .unwrap();

    assert_eq!(seen_bias, Some(19.5));
    assert_eq!(sample.mouse_y, -1.0);
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START, "resize-move"]);
    assert!(grid.log.last(EVENT_DRAG_MOVE).is_none());
}

#[test]
fn test_invoke_creation_click_targets_matching_day() {
    let mut grid = TestGridBuilder::new().build();

    let sample = grid.creation.invoke_creation_click(on_day(1, 9, 0)).unwrap().unwrap();

    assert_eq!(sample.related_view, 1);
    assert_eq!(sample.time_y, on_day(1, 9, 0));
    assert_eq!(sample.nearest_grid_time_y, on_day(1, 9, 0));
    assert_eq!(sample.nearest_grid_y, 18.5);
    assert!(sample.range.is_none());
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_CLICK]);
    assert!(grid.creation.state().is_idle());
}

#[test]
fn test_invoke_creation_click_falls_back_to_first_column() {
    let mut grid = TestGridBuilder::new().build();

    let sample = grid.creation.invoke_creation_click(on_day(5, 9, 0)).unwrap().unwrap();
    assert_eq!(sample.related_view, 0);
}

#[test]
fn test_invoke_creation_click_at_extreme_timestamps() {
    let mut grid = TestGridBuilder::new().build();

    // Off every rendered day: first column, clamped to its edges
    let earliest = grid.creation.invoke_creation_click(i64::MIN).unwrap().unwrap();
    assert_eq!(earliest.related_view, 0);
    assert_eq!(earliest.time_y, at(0, 0));

    let latest = grid.creation.invoke_creation_click(i64::MAX).unwrap().unwrap();
    assert_eq!(latest.related_view, 0);
    assert_eq!(latest.time_y, on_day(1, 0, 0));

    assert_eq!(grid.log.names(), vec![EVENT_DRAG_CLICK, EVENT_DRAG_CLICK]);
}

#[test]
fn test_invoke_creation_click_ignored_during_session() {
    let mut grid = TestGridBuilder::new().build();
    grid.start(column_target(0), 300.0);

    assert!(grid.creation.invoke_creation_click(at(9, 0)).unwrap().is_none());
    assert_eq!(grid.log.names(), vec![EVENT_DRAG_START]);
}

#[test]
fn test_invoke_creation_click_without_columns() {
    let mut grid = TestGridBuilder::new().with_days(0).build();
    assert!(grid.creation.invoke_creation_click(at(9, 0)).unwrap().is_none());
    assert!(grid.log.is_empty());
}

#[test]
fn test_unsubscribed_listener_stops_receiving() {
    let mut grid = TestGridBuilder::new().build();
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let c = std::rc::Rc::clone(&count);
    let id = grid.creation.on(EVENT_DRAG_START, move |_| c.set(c.get() + 1));

    grid.start(column_target(0), 300.0);
    grid.click(300.0);
    assert!(grid.creation.off(id));
    grid.start(column_target(0), 300.0);

    assert_eq!(count.get(), 1);
}
