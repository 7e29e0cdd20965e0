#![forbid(unsafe_code)]

//! Core: viewport geometry, window calculation, and scroll signals.
//!
//! # Role in vlist
//! `vlist-core` is the arithmetic layer. It owns the fixed-height windowing
//! calculation that decides which rows of a large collection must be
//! materialized for a given scroll offset, plus the small set of types the
//! other crates share: validated geometry, the scroll signal, errors, and
//! environment configuration.
//!
//! # Primary responsibilities
//! - **WindowCalculator**: O(1) visible-range computation with one row of
//!   overscan.
//! - **ViewportGeometry**: item height and container height, validated once.
//! - **ScrollEvent**: the opaque scroll-position signal from the host.
//! - **ViewportConfig**: `VLIST_*` environment overrides.
//!
//! # How it fits in the system
//! `vlist-widgets` feeds the stored scroll offset into
//! [`window::WindowCalculator`] and hands the result to the render tree in
//! `vlist-render`. `vlist-runtime` delivers [`event::ScrollEvent`] values
//! one at a time.

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod window;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, trace_span, warn};

pub use error::{ConfigError, GeometryError};
pub use event::ScrollEvent;
pub use geometry::ViewportGeometry;
pub use window::{OVERSCAN_ROWS, VisibleWindow, WindowCalculator, WindowLayout, compute_window};
