#![forbid(unsafe_code)]

//! Host-facing render tree.
//!
//! ```text
//! ViewportNode  height = container_height, scrolled by scroll_offset
//! ├── TrackNode height = item_count * item_height   (sizes the scrollbar)
//! └── SliceNode translated by offset_y = start * item_height
//!     ├── RowNode index = start,     height = item_height
//!     ├── ...
//!     └── RowNode index = end,       height = item_height
//! ```
//!
//! Rows carry their *original* collection index, so row `k` of the slice
//! sits at `offset_y + k * item_height` in track coordinates, exactly where
//! it would sit in a fully materialized list.

use crate::scrollbar::ScrollbarMetrics;

/// One materialized row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowNode<O> {
    /// Index of the item in the full collection.
    pub index: usize,
    /// Row height.
    pub height: f64,
    /// Caller-rendered content.
    pub content: O,
}

/// The translated container holding the rendered rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceNode<O> {
    /// Vertical translation of the first row.
    pub offset_y: f64,
    /// Rendered rows, in index order.
    pub rows: Vec<RowNode<O>>,
}

/// Invisible element sized to the whole collection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackNode {
    /// Full content height.
    pub height: f64,
}

/// The scrollable region handed to the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportNode<O> {
    /// Fixed viewport height.
    pub height: f64,
    /// Scroll offset the tree was rendered for.
    pub scroll_offset: f64,
    /// Opaque styling passthrough.
    pub class_name: Option<String>,
    /// Full-height track.
    pub track: TrackNode,
    /// Rendered rows.
    pub slice: SliceNode<O>,
    /// Thumb geometry derived from the track.
    pub scrollbar: ScrollbarMetrics,
}

impl<O> ViewportNode<O> {
    /// Number of rendered rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.slice.rows.len()
    }

    /// True when no rows were rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slice.rows.is_empty()
    }

    /// Original indices of the rendered rows.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slice.rows.iter().map(|row| row.index)
    }

    /// Top edge of the `k`-th rendered row in track coordinates.
    #[must_use]
    pub fn row_top(&self, k: usize) -> Option<f64> {
        let first = self.slice.rows.first()?;
        (k < self.slice.rows.len()).then(|| self.slice.offset_y + k as f64 * first.height)
    }

    /// The rendered row covering track position `y`, with its top edge.
    ///
    /// The covering item is `floor(y / height)`, the same division the
    /// window calculator uses for its start index, so a position inside
    /// the window always resolves to a rendered row even when `offset_y`
    /// is not exactly representable.
    #[must_use]
    pub fn row_at(&self, y: f64) -> Option<(&RowNode<O>, f64)> {
        let first = self.slice.rows.first()?;
        let height = first.height;
        if !y.is_finite() || y < 0.0 || height <= 0.0 {
            return None;
        }
        let k = ((y / height).floor() as usize).checked_sub(first.index)?;
        let row = self.slice.rows.get(k)?;
        Some((row, self.slice.offset_y + k as f64 * height))
    }

    /// Convert row contents, keeping the layout.
    #[must_use]
    pub fn map<U, F>(self, mut f: F) -> ViewportNode<U>
    where
        F: FnMut(O) -> U,
    {
        ViewportNode {
            height: self.height,
            scroll_offset: self.scroll_offset,
            class_name: self.class_name,
            track: self.track,
            slice: SliceNode {
                offset_y: self.slice.offset_y,
                rows: self
                    .slice
                    .rows
                    .into_iter()
                    .map(|row| RowNode {
                        index: row.index,
                        height: row.height,
                        content: f(row.content),
                    })
                    .collect(),
            },
            scrollbar: self.scrollbar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlist_core::{ViewportGeometry, WindowCalculator};

    fn node(offset_y: f64, first: usize, n: usize) -> ViewportNode<String> {
        ViewportNode {
            height: 100.0,
            scroll_offset: offset_y,
            class_name: None,
            track: TrackNode { height: 30_000.0 },
            slice: SliceNode {
                offset_y,
                rows: (first..first + n)
                    .map(|index| RowNode {
                        index,
                        height: 30.0,
                        content: format!("row {index}"),
                    })
                    .collect(),
            },
            scrollbar: ScrollbarMetrics::new(30_000.0, 100.0, offset_y),
        }
    }

    #[test]
    fn indices_are_original() {
        let n = node(90.0, 3, 6);
        assert_eq!(n.indices().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(n.row_count(), 6);
    }

    #[test]
    fn row_top_follows_offset() {
        let n = node(90.0, 3, 6);
        assert_eq!(n.row_top(0), Some(90.0));
        assert_eq!(n.row_top(2), Some(150.0));
        assert_eq!(n.row_top(6), None);
    }

    #[test]
    fn row_at_finds_covering_row() {
        let n = node(90.0, 3, 6);
        let (row, top) = n.row_at(100.0).unwrap();
        assert_eq!(row.index, 3);
        assert_eq!(top, 90.0);
        let (row, top) = n.row_at(120.0).unwrap();
        assert_eq!(row.index, 4);
        assert_eq!(top, 120.0);
        assert!(n.row_at(80.0).is_none());
        assert!(n.row_at(270.0).is_none());
    }

    #[test]
    fn row_at_agrees_with_window_start_for_fractional_heights() {
        let layout = WindowCalculator::new(ViewportGeometry::new(0.01, 0.05).unwrap())
            .layout(945.67, 200_000);
        let start = layout.window.start;
        let n = ViewportNode {
            height: 0.05,
            scroll_offset: 945.67,
            class_name: None,
            track: TrackNode { height: layout.total_height },
            slice: SliceNode {
                offset_y: layout.offset_y,
                rows: layout
                    .window
                    .range()
                    .map(|index| RowNode { index, height: 0.01, content: index })
                    .collect(),
            },
            scrollbar: ScrollbarMetrics::new(layout.total_height, 0.05, 945.67),
        };
        let (row, _) = n.row_at(945.67).unwrap();
        assert_eq!(row.index, start);
    }

    #[test]
    fn row_at_rejects_negative_and_non_finite() {
        let n = node(0.0, 0, 4);
        assert!(n.row_at(-5.0).is_none());
        assert!(n.row_at(f64::NAN).is_none());
        assert!(n.row_at(f64::INFINITY).is_none());
        assert_eq!(n.row_at(0.0).unwrap().0.index, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        let n = node(90.0, 3, 2);
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("\"offset_y\":90.0"));
        let back: ViewportNode<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn empty_tree() {
        let n = node(0.0, 0, 0);
        assert!(n.is_empty());
        assert!(n.row_at(0.0).is_none());
        assert_eq!(n.row_top(0), None);
    }

    #[test]
    fn map_keeps_layout() {
        let n = node(90.0, 3, 2).map(|s| s.len());
        assert_eq!(n.slice.rows[0].content, 5);
        assert_eq!(n.slice.rows[1].index, 4);
        assert_eq!(n.slice.offset_y, 90.0);
    }
}
