#![forbid(unsafe_code)]

//! Row lookup against trees laid out by the window calculator.

use proptest::prelude::*;
use vlist_core::{ViewportGeometry, WindowCalculator};
use vlist_render::{HeadlessViewport, RowNode, ScrollbarMetrics, SliceNode, TrackNode, ViewportNode};

fn laid_out(count: usize, item_h: f64, container: f64, offset: f64) -> ViewportNode<usize> {
    let layout = WindowCalculator::new(ViewportGeometry::new(item_h, container).unwrap())
        .layout(offset, count);
    ViewportNode {
        height: container,
        scroll_offset: offset,
        class_name: None,
        track: TrackNode {
            height: layout.total_height,
        },
        slice: SliceNode {
            offset_y: layout.offset_y,
            rows: layout
                .window
                .range()
                .map(|index| RowNode {
                    index,
                    height: item_h,
                    content: index,
                })
                .collect(),
        },
        scrollbar: ScrollbarMetrics::new(layout.total_height, container, offset),
    }
}

#[test]
fn small_rows_far_down_the_track() {
    let node = laid_out(200_000, 0.01, 0.05, 945.67);
    let (row, _) = node.row_at(945.67).unwrap();
    assert_eq!(row.index, node.slice.rows[0].index);
    assert_eq!(node.row_top(0), Some(node.slice.offset_y));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scroll_offset_resolves_to_first_rendered_row(
        count in 1usize..1_000_000,
        item_h in 0.001f64..100.0,
        rows_visible in 1.0f64..40.0,
        fraction in 0.0f64..1.0,
    ) {
        let container = item_h * rows_visible;
        let total = count as f64 * item_h;
        let offset = fraction * (total - container).max(0.0);
        let node = laid_out(count, item_h, container, offset);
        let (row, top) = node.row_at(offset).unwrap();
        prop_assert_eq!(row.index, node.slice.rows[0].index);
        prop_assert_eq!(Some(top), node.row_top(0));
    }

    #[test]
    fn row_at_and_row_top_agree(
        count in 1usize..10_000,
        item_h in 1u32..64,
        offset in 0u32..100_000,
    ) {
        let item_h = f64::from(item_h);
        let node = laid_out(count, item_h, 200.0, f64::from(offset));
        for k in 0..node.row_count() {
            let top = node.row_top(k).unwrap();
            let (row, found_top) = node.row_at(top + item_h / 2.0).unwrap();
            prop_assert_eq!(row.index, node.slice.rows[k].index);
            prop_assert_eq!(found_top, top);
        }
    }

    #[test]
    fn headless_screen_has_no_gaps_for_fractional_rows(
        count in 1usize..100_000,
        hundredths in 1u32..1_000,
        rows_visible in 1u32..20,
        fraction in 0.0f64..1.0,
    ) {
        let item_h = f64::from(hundredths) / 100.0;
        let container = item_h * f64::from(rows_visible);
        let total = count as f64 * item_h;
        let offset = fraction * (total - container).max(0.0);
        let node = laid_out(count, item_h, container, offset).map(|i| format!("item {i}"));
        let frame = HeadlessViewport::new(16, item_h).render(&node);
        prop_assert_eq!(frame.gap_lines(), 0);
    }
}
