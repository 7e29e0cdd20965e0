#![forbid(unsafe_code)]

//! Render tree and headless rasterizer.
//!
//! # Role in vlist
//! `vlist-render` describes what a virtualized viewport hands to its host:
//! a fixed-height scroll region, a track sized to the full collection so the
//! host's scroll machinery reports the right range, and a translated slice
//! holding only the rendered rows.
//!
//! # Primary responsibilities
//! - **ViewportNode**: the host-facing tree (region, track, slice, rows).
//! - **ScrollbarMetrics**: thumb length/offset for hosts that draw their own
//!   scrollbar.
//! - **HeadlessViewport**: rasterizes a tree of text rows into screen lines
//!   for snapshot tests and the demo.

pub mod headless;
pub mod node;
pub mod scrollbar;

pub use headless::{HeadlessFrame, HeadlessViewport};
pub use node::{RowNode, SliceNode, TrackNode, ViewportNode};
pub use scrollbar::ScrollbarMetrics;

mod text_width {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    /// Display width of `text` in terminal columns.
    #[inline]
    pub(crate) fn display_width(text: &str) -> usize {
        if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            return text.len();
        }
        text.graphemes(true).map(UnicodeWidthStr::width).sum()
    }

    /// Longest prefix of `text` (by whole graphemes) fitting in `max` columns,
    /// plus its width.
    pub(crate) fn clip_to_width(text: &str, max: usize) -> (&str, usize) {
        let mut width = 0;
        let mut end = 0;
        for (idx, g) in text.grapheme_indices(true) {
            if g.contains(['\n', '\r']) {
                break;
            }
            let w = UnicodeWidthStr::width(g);
            if width + w > max {
                break;
            }
            width += w;
            end = idx + g.len();
        }
        (&text[..end], width)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn ascii_width_is_byte_len() {
            assert_eq!(display_width("hello"), 5);
        }

        #[test]
        fn wide_glyphs_count_double() {
            assert_eq!(display_width("日本"), 4);
        }

        #[test]
        fn clip_never_splits_wide_glyph() {
            assert_eq!(clip_to_width("日本語", 5), ("日本", 4));
            assert_eq!(clip_to_width("abc", 10), ("abc", 3));
            assert_eq!(clip_to_width("abc", 0), ("", 0));
        }

        #[test]
        fn clip_stops_at_newline() {
            assert_eq!(clip_to_width("ab\ncd", 10), ("ab", 2));
        }
    }
}
