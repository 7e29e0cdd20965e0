#![forbid(unsafe_code)]

//! Virtualized list component.
//!
//! [`VirtualList`] borrows a caller-owned collection, computes the visible
//! window for the scroll offset held in [`VirtualListState`], and produces a
//! [`ViewportNode`](vlist_render::ViewportNode) holding only the rows in that
//! window. Row content comes from a caller-supplied [`RenderItem`].
//!
//! ```
//! use vlist_core::{ScrollEvent, ViewportGeometry};
//! use vlist_widgets::{VirtualList, VirtualListState};
//!
//! let items: Vec<String> = (0..1000).map(|i| format!("row {i}")).collect();
//! let geometry = ViewportGeometry::new(30.0, 100.0)?;
//! let list = VirtualList::new(&items, geometry, |item: &String, idx: usize| {
//!     format!("{idx}: {item}")
//! });
//!
//! let mut state = VirtualListState::new();
//! list.handle_scroll(&mut state, ScrollEvent::new(100.0));
//!
//! let node = list.render(&state);
//! assert_eq!(node.indices().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7, 8]);
//! assert_eq!(node.slice.offset_y, 90.0);
//! assert_eq!(node.track.height, 30_000.0);
//! # Ok::<(), vlist_core::GeometryError>(())
//! ```

pub mod virtualized;

pub use virtualized::{RenderItem, VirtualList, VirtualListPersistState, VirtualListState};
