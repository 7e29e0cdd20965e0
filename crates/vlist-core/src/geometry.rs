#![forbid(unsafe_code)]

//! Viewport geometry.

use crate::error::GeometryError;

/// Uniform row height and viewport height, in host units (usually pixels).
///
/// Constant for the lifetime of one rendering session. Construct through
/// [`ViewportGeometry::new`] so the window calculation only ever sees a
/// positive, finite item height and a non-negative, finite container height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    item_height: f64,
    container_height: f64,
}

impl ViewportGeometry {
    /// Validate and create a geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when `item_height` is not a positive
    /// finite number or `container_height` is negative or not finite.
    pub fn new(item_height: f64, container_height: f64) -> Result<Self, GeometryError> {
        if !item_height.is_finite() {
            return Err(GeometryError::NonFiniteItemHeight(item_height));
        }
        if item_height <= 0.0 {
            return Err(GeometryError::NonPositiveItemHeight(item_height));
        }
        if !container_height.is_finite() {
            return Err(GeometryError::NonFiniteContainerHeight(container_height));
        }
        if container_height < 0.0 {
            return Err(GeometryError::NegativeContainerHeight(container_height));
        }
        Ok(Self {
            item_height,
            container_height,
        })
    }

    /// Height of every row.
    #[inline]
    #[must_use]
    pub const fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Height of the scrollable viewport.
    #[inline]
    #[must_use]
    pub const fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Rows needed to cover the viewport, counting a partially visible
    /// trailing row.
    #[inline]
    #[must_use]
    pub fn visible_count(&self) -> usize {
        (self.container_height / self.item_height).ceil() as usize
    }

    /// Height of the full, unvirtualized collection.
    #[inline]
    #[must_use]
    pub fn total_height(&self, item_count: usize) -> f64 {
        item_count as f64 * self.item_height
    }

    /// Top edge of row `index` in the full layout.
    #[inline]
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.item_height
    }

    /// Largest scroll offset that still shows a full viewport of content.
    ///
    /// Zero when the content fits inside the viewport.
    #[inline]
    #[must_use]
    pub fn max_scroll_offset(&self, item_count: usize) -> f64 {
        (self.total_height(item_count) - self.container_height).max(0.0)
    }
}
