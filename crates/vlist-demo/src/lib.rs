#![forbid(unsafe_code)]

//! vlist demo library.
//!
//! Exposes the demo model and CLI parsing so integration tests can drive the
//! same code path as the binary.
//!
//! # How it fits in the system
//! The demo is a consumer of every other crate: it validates geometry with
//! `vlist-core`, builds frames with `vlist-widgets`, rasterizes them with
//! `vlist-render`, and replays a scroll script through `vlist-runtime`.

pub mod app;
pub mod cli;

use vlist_core::ViewportGeometry;
use vlist_render::HeadlessViewport;
use vlist_render::headless::MAX_SCREEN_LINES;
use vlist_runtime::Program;

use crate::app::{DemoModel, FrameRecord, Msg, format_frame, generate_items};
use crate::cli::Opts;

/// Errors that stop a demo run.
#[derive(Debug)]
pub enum DemoError {
    /// Item or container height rejected.
    Geometry(vlist_core::GeometryError),
    /// Frame could not be encoded as JSON.
    Json(serde_json::Error),
    /// The container needs more screen lines than a frame may hold.
    ScreenTooTall {
        /// Lines the container would need.
        lines: usize,
        /// Largest supported screen.
        max: usize,
    },
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "invalid geometry: {err}"),
            Self::Json(err) => write!(f, "failed to encode frame: {err}"),
            Self::ScreenTooTall { lines, max } => {
                write!(f, "screen needs {lines} lines, limit is {max}")
            }
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::ScreenTooTall { .. } => None,
        }
    }
}

impl From<vlist_core::GeometryError> for DemoError {
    fn from(err: vlist_core::GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Replay the scroll script in `opts` and return the printed output.
///
/// # Errors
///
/// Fails if the geometry is invalid, the container is taller than
/// [`MAX_SCREEN_LINES`] screen lines, or a frame cannot be serialized.
pub fn run(opts: &Opts) -> Result<String, DemoError> {
    let geometry = ViewportGeometry::new(opts.item_height, opts.container_height)?;
    let screen = HeadlessViewport::new(opts.width, opts.effective_line_height());
    let lines = screen.line_count(opts.container_height);
    if lines > MAX_SCREEN_LINES {
        return Err(DemoError::ScreenTooTall {
            lines,
            max: MAX_SCREEN_LINES,
        });
    }
    let model = DemoModel::new(generate_items(opts.items), geometry)
        .with_class_name(opts.class_name.clone());

    tracing::info!(
        items = opts.items,
        item_height = opts.item_height,
        container_height = opts.container_height,
        steps = opts.script.len(),
        "starting demo"
    );

    let mut program = Program::new(model);
    for step in &opts.script {
        program.send(Msg::from(*step));
    }
    let processed = program.run_until_idle();

    let mut out = String::new();
    for (seq, node) in program.frames().iter().enumerate() {
        if opts.jsonl {
            let record = FrameRecord::new(seq, node, &screen);
            out.push_str(&serde_json::to_string(&record)?);
            out.push('\n');
        } else {
            out.push_str(&format_frame(seq, node, &screen));
        }
    }

    let stats = program.stats();
    tracing::info!(
        processed,
        frames = stats.frames,
        max_cycle_us = stats.max_cycle.as_micros() as u64,
        "demo finished"
    );
    Ok(out)
}
