#![forbid(unsafe_code)]

//! Fixed-height window calculation.
//!
//! Given a scroll offset, a uniform item height, the viewport height, and the
//! collection length, decide which contiguous slice of rows must be rendered
//! and where that slice sits in the full (unrendered) layout.
//!
//! # Algorithm
//!
//! ```text
//! visible_count = ceil(container_height / item_height)
//! start         = min(floor(scroll_offset / item_height), item_count - 1)
//! end           = min(start + visible_count + OVERSCAN_ROWS, item_count - 1)
//! total_height  = item_count * item_height
//! offset_y      = start * item_height
//! ```
//!
//! Rounding `visible_count` up keeps a partially visible trailing row on
//! screen; rounding `start` down keeps a partially scrolled-out leading row.
//! `end` is inclusive.
//!
//! # Invariants
//!
//! For a non-empty collection: `start <= end < item_count`.
//! For an empty collection the window is empty: [`VisibleWindow::range`]
//! yields nothing even though `start == end == 0`.
//!
//! Every call is O(1) and depends only on its inputs, so the result can be
//! recomputed on every scroll signal without caching.

use std::ops::Range;

use crate::geometry::ViewportGeometry;

/// Extra rows rendered past the strictly visible region.
pub const OVERSCAN_ROWS: usize = 1;

/// The slice of rows to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// First rendered index.
    pub start: usize,
    /// Last rendered index (inclusive).
    pub end: usize,
    /// Rows needed to cover the viewport, independent of the scroll offset.
    pub visible_count: usize,
    /// Length of the collection the window was computed for.
    pub item_count: usize,
}

impl VisibleWindow {
    /// The window for an empty collection.
    #[must_use]
    pub const fn empty(visible_count: usize) -> Self {
        Self {
            start: 0,
            end: 0,
            visible_count,
            item_count: 0,
        }
    }

    /// True when there is nothing to render.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of rows to render.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Half-open form of `[start, end]`, empty for an empty collection.
    ///
    /// Safe to use directly as a slice index into the collection.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.start..self.end + 1
        }
    }

    /// Whether row `index` is rendered.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        !self.is_empty() && index >= self.start && index <= self.end
    }
}

/// A window plus the geometry the host needs to place it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    /// Rows to render.
    pub window: VisibleWindow,
    /// Size of the scroll track (`item_count * item_height`).
    pub total_height: f64,
    /// Translation of the rendered slice (`start * item_height`).
    pub offset_y: f64,
}

/// Compute the visible window from raw numbers.
///
/// Callers must pass `item_height > 0` and `container_height >= 0`; use
/// [`WindowCalculator`] with a validated [`ViewportGeometry`] to have that
/// checked once. Negative or NaN scroll offsets are treated as zero.
#[must_use]
pub fn compute_window(
    scroll_offset: f64,
    item_height: f64,
    container_height: f64,
    item_count: usize,
) -> VisibleWindow {
    debug_assert!(item_height > 0.0, "item_height must be > 0");
    debug_assert!(container_height >= 0.0, "container_height must be >= 0");

    // `as usize` saturates: negative ratios become 0, huge ones usize::MAX.
    let visible_count = (container_height / item_height).ceil() as usize;
    if item_count == 0 {
        return VisibleWindow::empty(visible_count);
    }

    let last = item_count - 1;
    let raw_start = (scroll_offset.max(0.0) / item_height).floor() as usize;
    let start = raw_start.min(last);
    let raw_end = start
        .saturating_add(visible_count)
        .saturating_add(OVERSCAN_ROWS);
    let end = raw_end.min(last);

    VisibleWindow {
        start,
        end,
        visible_count,
        item_count,
    }
}

/// Window calculator bound to one session's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowCalculator {
    geometry: ViewportGeometry,
}

impl WindowCalculator {
    /// Create a calculator for the given geometry.
    #[must_use]
    pub const fn new(geometry: ViewportGeometry) -> Self {
        Self { geometry }
    }

    /// The geometry this calculator was built with.
    #[must_use]
    pub const fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Visible window for `scroll_offset` over `item_count` rows.
    #[must_use]
    pub fn compute(&self, scroll_offset: f64, item_count: usize) -> VisibleWindow {
        let window = compute_window(
            scroll_offset,
            self.geometry.item_height(),
            self.geometry.container_height(),
            item_count,
        );

        #[cfg(feature = "tracing")]
        tracing::trace!(
            scroll_offset,
            item_count,
            start = window.start,
            end = window.end,
            visible_count = window.visible_count,
            "window computed"
        );

        window
    }

    /// Window plus track height and slice translation.
    #[must_use]
    pub fn layout(&self, scroll_offset: f64, item_count: usize) -> WindowLayout {
        let window = self.compute(scroll_offset, item_count);
        WindowLayout {
            window,
            total_height: self.geometry.total_height(item_count),
            offset_y: if window.is_empty() {
                0.0
            } else {
                self.geometry.offset_of(window.start)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(item_height: f64, container_height: f64) -> WindowCalculator {
        WindowCalculator::new(ViewportGeometry::new(item_height, container_height).unwrap())
    }

    #[test]
    fn visible_count_rounds_partial_row_up() {
        let w = compute_window(0.0, 30.0, 100.0, 1000);
        assert_eq!(w.visible_count, 4);
    }

    #[test]
    fn start_rounds_down() {
        let w = compute_window(100.0, 30.0, 100.0, 1000);
        assert_eq!(w.start, 3);
    }

    #[test]
    fn end_includes_one_overscan_row() {
        let w = compute_window(0.0, 30.0, 100.0, 1000);
        assert_eq!(w.start, 0);
        assert_eq!(w.end, 5);
        assert_eq!(w.len(), 6);
        assert_eq!(w.range(), 0..6);
    }

    #[test]
    fn end_clamps_to_last_index() {
        // start = 3, visible_count = 4 -> raw end 8, clamped to 4.
        let w = compute_window(90.0, 30.0, 100.0, 5);
        assert_eq!(w.start, 3);
        assert_eq!(w.visible_count, 4);
        assert_eq!(w.end, 4);
        assert_eq!(w.range(), 3..5);
    }

    #[test]
    fn start_clamps_when_scrolled_past_content() {
        let w = compute_window(10_000.0, 30.0, 100.0, 5);
        assert_eq!(w.start, 4);
        assert_eq!(w.end, 4);
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let w = compute_window(250.0, 30.0, 100.0, 0);
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
        assert_eq!(w.range(), 0..0);
        assert!(!w.contains(0));
        assert_eq!(w.visible_count, 4);
    }

    #[test]
    fn single_item() {
        let w = compute_window(0.0, 30.0, 100.0, 1);
        assert_eq!((w.start, w.end), (0, 0));
        assert_eq!(w.range(), 0..1);
    }

    #[test]
    fn zero_height_container_keeps_overscan_row() {
        let w = compute_window(0.0, 30.0, 0.0, 10);
        assert_eq!(w.visible_count, 0);
        assert_eq!((w.start, w.end), (0, 1));
    }

    #[test]
    fn negative_and_nan_offsets_are_zero() {
        assert_eq!(compute_window(-50.0, 30.0, 100.0, 10).start, 0);
        assert_eq!(compute_window(f64::NAN, 30.0, 100.0, 10).start, 0);
    }

    #[test]
    fn row_boundary_is_exact() {
        assert_eq!(compute_window(29.999, 30.0, 100.0, 100).start, 0);
        assert_eq!(compute_window(30.0, 30.0, 100.0, 100).start, 1);
    }

    #[test]
    fn contains_matches_range() {
        let w = compute_window(95.0, 30.0, 100.0, 1000);
        for i in 0..20 {
            assert_eq!(w.contains(i), w.range().contains(&i), "index {i}");
        }
    }

    #[test]
    fn layout_derives_offset_and_total_height() {
        let layout = calc(30.0, 100.0).layout(100.0, 1000);
        assert_eq!(layout.window.start, 3);
        assert_eq!(layout.offset_y, 90.0);
        assert_eq!(layout.total_height, 30_000.0);
    }

    #[test]
    fn layout_of_empty_collection() {
        let layout = calc(30.0, 100.0).layout(100.0, 0);
        assert!(layout.window.is_empty());
        assert_eq!(layout.offset_y, 0.0);
        assert_eq!(layout.total_height, 0.0);
    }

    #[test]
    fn calculator_matches_free_function() {
        let c = calc(17.5, 333.0);
        for offset in [0.0, 1.0, 17.5, 400.25, 9_999.0] {
            assert_eq!(
                c.compute(offset, 321),
                compute_window(offset, 17.5, 333.0, 321)
            );
        }
    }
}
