#![forbid(unsafe_code)]

//! Scrollbar geometry for a virtualized track.
//!
//! The thumb is sized and positioned from the *full* content height, not
//! from the rendered slice, so it stays consistent with the unrendered
//! collection.

/// Scroll position of a viewport over its track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarMetrics {
    /// Height of the full content (the track).
    pub content_height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
    /// Current scroll offset.
    pub position: f64,
}

impl ScrollbarMetrics {
    /// Create metrics for the given content, viewport, and offset.
    #[must_use]
    pub const fn new(content_height: f64, viewport_height: f64, position: f64) -> Self {
        Self {
            content_height,
            viewport_height,
            position,
        }
    }

    /// Whether the content overflows the viewport.
    #[must_use]
    pub fn is_needed(&self) -> bool {
        self.content_height > self.viewport_height
    }

    /// Largest meaningful scroll position.
    #[must_use]
    pub fn max_position(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Fraction of the scroll range covered, in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let max_pos = self.max_position();
        if max_pos <= 0.0 {
            0.0
        } else {
            (self.position.max(0.0) / max_pos).min(1.0)
        }
    }

    /// Thumb length for a track of `track_len` cells.
    ///
    /// At least one cell when the track is non-empty; the whole track when
    /// nothing overflows.
    #[must_use]
    pub fn thumb_length(&self, track_len: usize) -> usize {
        if track_len == 0 {
            return 0;
        }
        if !self.is_needed() {
            return track_len;
        }
        let viewport_ratio = self.viewport_height / self.content_height;
        let thumb = (track_len as f64 * viewport_ratio).max(1.0).round() as usize;
        thumb.min(track_len)
    }

    /// Thumb start within a track of `track_len` cells.
    #[must_use]
    pub fn thumb_offset(&self, track_len: usize) -> usize {
        let available = track_len.saturating_sub(self.thumb_length(track_len));
        (available as f64 * self.ratio()).round() as usize
    }

    /// Whether cell `i` of a `track_len` track is part of the thumb.
    #[must_use]
    pub fn is_thumb(&self, i: usize, track_len: usize) -> bool {
        let offset = self.thumb_offset(track_len);
        i >= offset && i < offset + self.thumb_length(track_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_fits_fills_track() {
        let m = ScrollbarMetrics::new(50.0, 100.0, 0.0);
        assert!(!m.is_needed());
        assert_eq!(m.thumb_length(10), 10);
        assert_eq!(m.thumb_offset(10), 0);
    }

    #[test]
    fn thumb_proportional_to_viewport() {
        // 300 of 30_000 visible -> 1% of a 100-cell track.
        let m = ScrollbarMetrics::new(30_000.0, 300.0, 0.0);
        assert_eq!(m.thumb_length(100), 1);
        let half = ScrollbarMetrics::new(200.0, 100.0, 0.0);
        assert_eq!(half.thumb_length(10), 5);
    }

    #[test]
    fn thumb_moves_with_position() {
        let top = ScrollbarMetrics::new(200.0, 100.0, 0.0);
        let bottom = ScrollbarMetrics::new(200.0, 100.0, 100.0);
        assert_eq!(top.thumb_offset(10), 0);
        assert_eq!(bottom.thumb_offset(10), 5);
        assert!(bottom.is_thumb(9, 10));
        assert!(!bottom.is_thumb(4, 10));
    }

    #[test]
    fn position_beyond_max_is_clamped() {
        let m = ScrollbarMetrics::new(200.0, 100.0, 10_000.0);
        assert_eq!(m.ratio(), 1.0);
        assert_eq!(m.thumb_offset(10), 5);
    }

    #[test]
    fn empty_track() {
        let m = ScrollbarMetrics::new(200.0, 100.0, 50.0);
        assert_eq!(m.thumb_length(0), 0);
        assert_eq!(m.thumb_offset(0), 0);
    }
}
