#![forbid(unsafe_code)]

//! Scroll signals delivered by the host.

/// A scroll-position change reported by the host environment.
///
/// Carries the new absolute offset from the top of the track, in the same
/// units as the item height. The host may deliver one per scroll event with
/// no batching; each one replaces the stored offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    offset: f64,
}

impl ScrollEvent {
    /// Wrap a raw offset as reported by the host.
    #[inline]
    #[must_use]
    pub const fn new(offset: f64) -> Self {
        Self { offset }
    }

    /// The offset exactly as reported.
    #[inline]
    #[must_use]
    pub const fn raw_offset(&self) -> f64 {
        self.offset
    }

    /// The offset clamped into the calculator's domain.
    ///
    /// Negative values (elastic overscroll) and NaN/infinite values become 0.
    #[inline]
    #[must_use]
    pub fn sanitized_offset(&self) -> f64 {
        if self.offset.is_finite() && self.offset > 0.0 {
            self.offset
        } else {
            0.0
        }
    }
}

impl From<f64> for ScrollEvent {
    fn from(offset: f64) -> Self {
        Self::new(offset)
    }
}
