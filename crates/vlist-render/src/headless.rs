#![forbid(unsafe_code)]

//! Headless rasterizer for CI testing.
//!
//! `HeadlessViewport` turns a [`ViewportNode`] of text rows into the lines a
//! fixed-size text screen would show, without a real host. It is designed
//! for:
//!
//! - **Snapshot testing** with human-readable diff output
//! - **Window verification**: every screen line whose track position holds
//!   content but no rendered row is counted as a *gap line*
//! - **The demo binary**, which prints frames to stdout
//!
//! One screen line covers `line_height` track units. A row's text is drawn on
//! the first screen line that shows it; taller rows leave blank continuation
//! lines. When the content overflows, the last column holds a scrollbar.
//!
//! # Example
//!
//! ```
//! use vlist_render::headless::HeadlessViewport;
//! use vlist_render::node::{RowNode, SliceNode, TrackNode, ViewportNode};
//! use vlist_render::scrollbar::ScrollbarMetrics;
//!
//! let node = ViewportNode {
//!     height: 40.0,
//!     scroll_offset: 0.0,
//!     class_name: None,
//!     track: TrackNode { height: 40.0 },
//!     slice: SliceNode {
//!         offset_y: 0.0,
//!         rows: vec![
//!             RowNode { index: 0, height: 20.0, content: "alpha".to_string() },
//!             RowNode { index: 1, height: 20.0, content: "beta".to_string() },
//!         ],
//!     },
//!     scrollbar: ScrollbarMetrics::new(40.0, 40.0, 0.0),
//! };
//!
//! let frame = HeadlessViewport::new(10, 20.0).render(&node);
//! frame.assert_matches(&["alpha", "beta"]);
//! ```

use std::fmt;

use crate::node::ViewportNode;
use crate::text_width::{clip_to_width, display_width};

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// Most lines a single frame will rasterize; taller screens are truncated.
pub const MAX_SCREEN_LINES: usize = 10_000;

/// A text screen of fixed width onto which viewports are rasterized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessViewport {
    width: u16,
    line_height: f64,
}

impl HeadlessViewport {
    /// Create a screen `width` columns wide where each line spans
    /// `line_height` track units.
    ///
    /// # Panics
    ///
    /// Panics if width is 0 or `line_height` is not a positive finite number.
    pub fn new(width: u16, line_height: f64) -> Self {
        assert!(width > 0, "width must be > 0");
        assert!(
            line_height.is_finite() && line_height > 0.0,
            "line_height must be > 0"
        );
        Self { width, line_height }
    }

    /// Screen width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Track units per screen line.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Lines needed to show `height` track units, saturating at `usize::MAX`.
    pub fn line_count(&self, height: f64) -> usize {
        let lines = (height / self.line_height).ceil();
        if lines >= usize::MAX as f64 {
            usize::MAX
        } else if lines > 0.0 {
            lines as usize
        } else {
            0
        }
    }

    /// Rasterize a viewport of text rows.
    ///
    /// At most [`MAX_SCREEN_LINES`] lines are produced.
    pub fn render<O: AsRef<str>>(&self, node: &ViewportNode<O>) -> HeadlessFrame {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "headless_render",
            width = self.width,
            rows = node.row_count(),
            scroll_offset = node.scroll_offset
        )
        .entered();

        let line_count = self.line_count(node.height).min(MAX_SCREEN_LINES);
        let show_bar = node.scrollbar.is_needed() && self.width >= 2;
        let text_cols = usize::from(self.width) - usize::from(show_bar);

        let mut lines = Vec::with_capacity(line_count);
        let mut gap_lines = 0;

        for y in 0..line_count {
            let top = node.scroll_offset + y as f64 * self.line_height;
            let mut line = String::with_capacity(text_cols + 4);
            let mut used = 0;

            if top < node.track.height {
                match node.row_at(top) {
                    // Text goes on the row's first visible line only.
                    Some((row, row_top)) if y == 0 || row_top > top - self.line_height => {
                        let (clipped, w) = clip_to_width(row.content.as_ref(), text_cols);
                        line.push_str(clipped);
                        used = w;
                    }
                    Some(_) => {}
                    None => gap_lines += 1,
                }
            }

            if show_bar {
                line.extend(std::iter::repeat_n(' ', text_cols.saturating_sub(used)));
                let symbol = if node.scrollbar.is_thumb(y, line_count) {
                    THUMB_SYMBOL
                } else {
                    TRACK_SYMBOL
                };
                line.push_str(symbol);
            }

            lines.push(line);
        }

        #[cfg(feature = "tracing")]
        {
            if gap_lines > 0 {
                tracing::warn!(gap_lines, "viewport has visible lines with no rendered row");
            }
        }

        HeadlessFrame {
            width: self.width,
            lines,
            gap_lines,
        }
    }
}

/// The rasterized screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessFrame {
    width: u16,
    lines: Vec<String>,
    gap_lines: usize,
}

impl HeadlessFrame {
    /// Screen width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Screen height in lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Lines that show track content but had no rendered row behind them.
    ///
    /// A correct window keeps this at zero.
    pub fn gap_lines(&self) -> usize {
        self.gap_lines
    }

    /// Text of a single line, trimmed of trailing spaces.
    ///
    /// Returns an empty string for out-of-bounds lines.
    pub fn row_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|line| line.trim_end().to_string())
            .unwrap_or_default()
    }

    /// All lines, trimmed of trailing spaces.
    pub fn screen_text(&self) -> Vec<String> {
        (0..self.lines.len()).map(|y| self.row_text(y)).collect()
    }

    /// All lines joined by newlines.
    pub fn screen_string(&self) -> String {
        self.screen_text().join("\n")
    }

    /// Widest line, in columns.
    pub fn max_line_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0)
    }

    /// Compare with expected lines and return the diff.
    ///
    /// Returns `None` if the content matches exactly.
    pub fn diff(&self, expected: &[&str]) -> Option<ScreenDiff> {
        let actual = self.screen_text();
        let mismatches: Vec<LineDiff> = actual
            .iter()
            .zip(expected.iter())
            .enumerate()
            .filter_map(|(i, (got, want))| {
                let want_trimmed = want.trim_end();
                (got.as_str() != want_trimmed).then(|| LineDiff {
                    line: i,
                    got: got.clone(),
                    want: want_trimmed.to_string(),
                })
            })
            .collect();

        if mismatches.is_empty() && actual.len() == expected.len() {
            None
        } else {
            Some(ScreenDiff {
                actual_lines: actual.len(),
                expected_lines: expected.len(),
                mismatches,
            })
        }
    }

    /// Assert that the screen matches the expected lines exactly.
    ///
    /// # Panics
    ///
    /// Panics with a line diff if the content or line count differs.
    pub fn assert_matches(&self, expected: &[&str]) {
        assert_eq!(
            self.lines.len(),
            expected.len(),
            "HeadlessFrame: line count mismatch: got {} lines, expected {} lines",
            self.lines.len(),
            expected.len(),
        );
        if let Some(diff) = self.diff(expected) {
            panic!("HeadlessFrame: screen content mismatch\n{diff}");
        }
    }

    /// Assert that one line matches.
    ///
    /// # Panics
    ///
    /// Panics if the line differs.
    pub fn assert_row(&self, row: usize, expected: &str) {
        let actual = self.row_text(row);
        let expected_trimmed = expected.trim_end();
        assert_eq!(
            actual, expected_trimmed,
            "HeadlessFrame: row {row} mismatch\n  got:  {actual:?}\n  want: {expected_trimmed:?}",
        );
    }

    /// Debug dump with line numbers.
    pub fn export_string(&self) -> String {
        let mut out = format!("{}x{} gaps={}\n", self.width, self.lines.len(), self.gap_lines);
        for (y, _) in self.lines.iter().enumerate() {
            out.push_str(&format!("{y:3}| {}\n", self.row_text(y)));
        }
        out
    }
}

/// A single line difference.
#[derive(Debug, Clone)]
pub struct LineDiff {
    /// 0-based line index.
    pub line: usize,
    /// Actual content.
    pub got: String,
    /// Expected content.
    pub want: String,
}

/// Result of comparing a frame with expected lines.
#[derive(Debug, Clone)]
pub struct ScreenDiff {
    /// Lines in the frame.
    pub actual_lines: usize,
    /// Lines expected.
    pub expected_lines: usize,
    /// Per-line mismatches.
    pub mismatches: Vec<LineDiff>,
}

impl fmt::Display for ScreenDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actual_lines != self.expected_lines {
            writeln!(
                f,
                "Line count: got {}, expected {}",
                self.actual_lines, self.expected_lines,
            )?;
        }
        for d in &self.mismatches {
            writeln!(f, "  line {}:", d.line)?;
            writeln!(f, "    got:  {:?}", d.got)?;
            writeln!(f, "    want: {:?}", d.want)?;
            if let Some(col) = d.got.chars().zip(d.want.chars()).position(|(a, b)| a != b) {
                writeln!(f, "    first difference at column {col}")?;
            }
        }
        Ok(())
    }
}
