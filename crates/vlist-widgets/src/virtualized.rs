#![forbid(unsafe_code)]

//! Virtualized list over a borrowed, fixed-height collection.
//!
//! Only the rows in the current [`VisibleWindow`] are passed to the
//! [`RenderItem`] callback. The scroll offset lives in [`VirtualListState`],
//! which is updated exclusively through [`VirtualListState::on_scroll`] so
//! that every change goes through the same sanitizing path.

use std::fmt;

use vlist_core::{ScrollEvent, ViewportGeometry, VisibleWindow, WindowCalculator, WindowLayout};
use vlist_render::{RowNode, ScrollbarMetrics, SliceNode, TrackNode, ViewportNode};

/// Produces the displayable content of one row.
///
/// Receives the item and its index in the full collection. Any
/// `Fn(&T, usize) -> O` closure implements it.
pub trait RenderItem<T: ?Sized> {
    /// Rendered row content.
    type Output;

    /// Render `item`, which sits at `index` in the full collection.
    fn render(&self, item: &T, index: usize) -> Self::Output;
}

impl<T: ?Sized, O, F> RenderItem<T> for F
where
    F: Fn(&T, usize) -> O,
{
    type Output = O;

    fn render(&self, item: &T, index: usize) -> O {
        self(item, index)
    }
}

/// Scroll state for a [`VirtualList`].
///
/// Starts at offset `0.0`. Negative or NaN offsets delivered by the host are
/// stored as `0.0`; offsets past the end are kept and resolved by the window
/// calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VirtualListState {
    scroll_offset: f64,
    /// Optional persistence ID for state saving/restoration.
    persistence_id: Option<String>,
}

impl VirtualListState {
    /// Fresh state at the top of the list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a persistence ID for state saving.
    #[must_use]
    pub fn with_persistence_id(mut self, id: impl Into<String>) -> Self {
        self.persistence_id = Some(id.into());
        self
    }

    /// Get the persistence ID, if set.
    #[must_use = "use the persistence id (if any)"]
    pub fn persistence_id(&self) -> Option<&str> {
        self.persistence_id.as_deref()
    }

    /// Current (sanitized) scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Record the host's scroll position.
    pub fn on_scroll(&mut self, event: ScrollEvent) {
        self.scroll_offset = event.sanitized_offset();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            raw = event.raw_offset(),
            stored = self.scroll_offset,
            "scroll event"
        );
    }

    /// Largest offset that still shows a full viewport.
    #[must_use]
    pub fn max_scroll_offset(geometry: &ViewportGeometry, item_count: usize) -> f64 {
        geometry.max_scroll_offset(item_count)
    }

    /// Scroll by `delta`, clamped to `[0, max_scroll_offset]`.
    ///
    /// Non-finite deltas are ignored.
    pub fn scroll_by(&mut self, delta: f64, geometry: &ViewportGeometry, item_count: usize) {
        if !delta.is_finite() {
            return;
        }
        let max = geometry.max_scroll_offset(item_count);
        let target = (self.scroll_offset + delta).clamp(0.0, max);
        self.on_scroll(ScrollEvent::new(target));
    }

    /// Scroll so that row `index` is at the top, as far as the track allows.
    pub fn scroll_to_index(&mut self, index: usize, geometry: &ViewportGeometry, item_count: usize) {
        if item_count == 0 {
            self.scroll_to_top();
            return;
        }
        let target = geometry
            .offset_of(index.min(item_count - 1))
            .min(geometry.max_scroll_offset(item_count));
        self.on_scroll(ScrollEvent::new(target));
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) {
        self.on_scroll(ScrollEvent::new(0.0));
    }

    /// Jump so the last row sits at the bottom of the viewport.
    pub fn scroll_to_bottom(&mut self, geometry: &ViewportGeometry, item_count: usize) {
        self.on_scroll(ScrollEvent::new(geometry.max_scroll_offset(item_count)));
    }

    /// Scroll up by one viewport height.
    pub fn page_up(&mut self, geometry: &ViewportGeometry, item_count: usize) {
        self.scroll_by(-geometry.container_height(), geometry, item_count);
    }

    /// Scroll down by one viewport height.
    pub fn page_down(&mut self, geometry: &ViewportGeometry, item_count: usize) {
        self.scroll_by(geometry.container_height(), geometry, item_count);
    }

    /// Whether the viewport shows the end of the track.
    #[must_use]
    pub fn is_at_bottom(&self, geometry: &ViewportGeometry, item_count: usize) -> bool {
        self.scroll_offset >= geometry.max_scroll_offset(item_count)
    }

    /// Key under which this state is persisted.
    #[must_use]
    pub fn state_key(&self) -> String {
        format!(
            "VirtualList::{}",
            self.persistence_id.as_deref().unwrap_or("default")
        )
    }

    /// Snapshot the persistable part of the state.
    #[must_use]
    pub fn save_state(&self) -> VirtualListPersistState {
        VirtualListPersistState {
            scroll_offset: self.scroll_offset,
        }
    }

    /// Restore a snapshot. The offset is sanitized like a scroll event.
    pub fn restore_state(&mut self, state: VirtualListPersistState) {
        self.on_scroll(ScrollEvent::new(state.scroll_offset));
    }
}

/// Persistable state for a [`VirtualListState`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VirtualListPersistState {
    /// Scroll offset in the host's units.
    pub scroll_offset: f64,
}

/// A list component that materializes only the visible rows.
///
/// The collection is borrowed and never copied; geometry is fixed for the
/// lifetime of the component.
pub struct VirtualList<'a, T, R> {
    items: &'a [T],
    calculator: WindowCalculator,
    render_item: R,
    class_name: Option<&'a str>,
}

impl<T, R> fmt::Debug for VirtualList<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("len", &self.items.len())
            .field("calculator", &self.calculator)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

impl<'a, T, R> VirtualList<'a, T, R>
where
    R: RenderItem<T>,
{
    /// Create a list over `items` with the given geometry and row renderer.
    #[must_use]
    pub fn new(items: &'a [T], geometry: ViewportGeometry, render_item: R) -> Self {
        Self {
            items,
            calculator: WindowCalculator::new(geometry),
            render_item,
            class_name: None,
        }
    }

    /// Attach an opaque class name, passed through to the viewport node.
    #[must_use]
    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    /// Number of items in the full collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the collection has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Geometry the list was built with.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.calculator.geometry()
    }

    /// Visible window for the state's offset.
    #[must_use]
    pub fn window(&self, state: &VirtualListState) -> VisibleWindow {
        self.calculator.compute(state.scroll_offset(), self.items.len())
    }

    /// Window plus track height and slice translation.
    #[must_use]
    pub fn layout(&self, state: &VirtualListState) -> WindowLayout {
        self.calculator.layout(state.scroll_offset(), self.items.len())
    }

    /// Apply a scroll event and return the window it produces.
    pub fn handle_scroll(&self, state: &mut VirtualListState, event: ScrollEvent) -> VisibleWindow {
        state.on_scroll(event);
        self.window(state)
    }

    /// Items in the visible window, paired with their original indices.
    pub fn visible_items(
        &self,
        state: &VirtualListState,
    ) -> impl Iterator<Item = (usize, &'a T)> + use<'a, T, R> {
        let range = self.window(state).range();
        let items = self.items;
        range.map(move |index| (index, &items[index]))
    }

    /// Build the render tree for the state's offset.
    ///
    /// `render_item` is called once per index in the visible window, in
    /// ascending order, and never for an empty collection.
    #[must_use]
    pub fn render(&self, state: &VirtualListState) -> ViewportNode<R::Output> {
        let geometry = self.calculator.geometry();
        let layout = self.layout(state);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "vlist.render",
            item_count = self.items.len(),
            start = layout.window.start,
            end = layout.window.end,
            empty = layout.window.is_empty()
        )
        .entered();

        let item_height = geometry.item_height();
        let rows = layout
            .window
            .range()
            .map(|index| RowNode {
                index,
                height: item_height,
                content: self.render_item.render(&self.items[index], index),
            })
            .collect();

        ViewportNode {
            height: geometry.container_height(),
            scroll_offset: state.scroll_offset(),
            class_name: self.class_name.map(str::to_owned),
            track: TrackNode {
                height: layout.total_height,
            },
            slice: SliceNode {
                offset_y: layout.offset_y,
                rows,
            },
            scrollbar: ScrollbarMetrics::new(
                layout.total_height,
                geometry.container_height(),
                state.scroll_offset(),
            ),
        }
    }
}
