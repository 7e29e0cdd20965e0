#![forbid(unsafe_code)]

//! Integration tests for VirtualList + HeadlessViewport.
//!
//! These tests validate that the list:
//! - Fills every visible screen line from the rendered window
//! - Keeps row content attached to the original collection index
//! - Produces stable snapshots at the top, middle, and bottom of the track
//! - Stays blank for an empty collection

use proptest::prelude::*;
use std::cell::Cell;
use tracing::{Level, info};
use vlist_core::{ScrollEvent, ViewportGeometry};
use vlist_render::HeadlessViewport;
use vlist_widgets::{VirtualList, VirtualListState};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::INFO)
        .try_init();
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("row {i}")).collect()
}

fn label(item: &String, _: usize) -> String {
    item.clone()
}

#[test]
fn top_of_list_snapshot() {
    init_tracing();
    let items = labels(1000);
    let geometry = ViewportGeometry::new(20.0, 100.0).unwrap();
    let list = VirtualList::new(&items, geometry, label);
    let state = VirtualListState::new();

    let frame = HeadlessViewport::new(14, 20.0).render(&list.render(&state));
    info!(frame = %frame.export_string(), "top of list");
    frame.assert_matches(&[
        "row 0        █",
        "row 1        │",
        "row 2        │",
        "row 3        │",
        "row 4        │",
    ]);
    assert_eq!(frame.gap_lines(), 0);
}

#[test]
fn bottom_of_list_snapshot() {
    init_tracing();
    let items = labels(1000);
    let geometry = ViewportGeometry::new(20.0, 100.0).unwrap();
    let list = VirtualList::new(&items, geometry, label);
    let mut state = VirtualListState::new();
    state.scroll_to_bottom(&geometry, items.len());

    let frame = HeadlessViewport::new(14, 20.0).render(&list.render(&state));
    frame.assert_row(0, "row 995      │");
    frame.assert_row(4, "row 999      █");
    assert_eq!(frame.gap_lines(), 0);
}

#[test]
fn scroll_sequence_moves_the_screen() {
    init_tracing();
    let items = labels(1000);
    let geometry = ViewportGeometry::new(20.0, 100.0).unwrap();
    let list = VirtualList::new(&items, geometry, label);
    let screen = HeadlessViewport::new(14, 20.0);
    let mut state = VirtualListState::new();

    for (offset, first) in [(0.0, "row 0"), (200.0, "row 10"), (-5.0, "row 0"), (4_000.0, "row 200")] {
        list.handle_scroll(&mut state, ScrollEvent::new(offset));
        let frame = screen.render(&list.render(&state));
        assert!(
            frame.row_text(0).starts_with(first),
            "offset {offset}: got {:?}",
            frame.row_text(0)
        );
        assert_eq!(frame.gap_lines(), 0);
    }
}

#[test]
fn empty_collection_renders_blank_screen() {
    init_tracing();
    let items: Vec<String> = Vec::new();
    let calls = Cell::new(0usize);
    let geometry = ViewportGeometry::new(30.0, 300.0).unwrap();
    let list = VirtualList::new(&items, geometry, |s: &String, _: usize| {
        calls.set(calls.get() + 1);
        s.clone()
    });

    let frame = HeadlessViewport::new(10, 30.0).render(&list.render(&VirtualListState::new()));
    assert_eq!(frame.height(), 10);
    assert!(frame.screen_text().iter().all(String::is_empty));
    assert_eq!(calls.get(), 0);
}

#[test]
fn class_name_survives_into_node() {
    let items = labels(5);
    let geometry = ViewportGeometry::new(20.0, 100.0).unwrap();
    let node = VirtualList::new(&items, geometry, label)
        .class_name("inbox")
        .render(&VirtualListState::new());
    assert_eq!(node.class_name.as_deref(), Some("inbox"));
}

proptest! {
    /// No screen line over the track is ever left without a rendered row.
    #[test]
    fn rendered_window_never_leaves_gaps(
        count in 0usize..2_000,
        item_h in 1u32..50,
        container in 0u32..500,
        line_h in 1u32..40,
        offset in 0u32..120_000,
    ) {
        let items: Vec<usize> = (0..count).collect();
        let geometry = ViewportGeometry::new(f64::from(item_h), f64::from(container)).unwrap();
        let list = VirtualList::new(&items, geometry, |n: &usize, _: usize| n.to_string());
        let mut state = VirtualListState::new();
        list.handle_scroll(&mut state, ScrollEvent::new(f64::from(offset)));

        let node = list.render(&state);
        let frame = HeadlessViewport::new(20, f64::from(line_h)).render(&node);
        prop_assert_eq!(frame.gap_lines(), 0);
    }

    /// The callback runs exactly once per rendered row, with matching indices.
    #[test]
    fn callback_count_matches_window(
        count in 0usize..5_000,
        item_h in 1u32..80,
        container in 0u32..800,
        offset in 0u32..400_000,
    ) {
        let items: Vec<usize> = (0..count).collect();
        let calls = Cell::new(0usize);
        let geometry = ViewportGeometry::new(f64::from(item_h), f64::from(container)).unwrap();
        let list = VirtualList::new(&items, geometry, |n: &usize, idx: usize| {
            calls.set(calls.get() + 1);
            (*n, idx)
        });
        let mut state = VirtualListState::new();
        state.on_scroll(ScrollEvent::new(f64::from(offset)));

        let window = list.window(&state);
        let node = list.render(&state);
        prop_assert_eq!(calls.get(), window.len());
        prop_assert_eq!(node.row_count(), window.len());
        for row in &node.slice.rows {
            prop_assert_eq!(row.content.0, row.index);
            prop_assert_eq!(row.content.1, row.index);
        }
    }
}
