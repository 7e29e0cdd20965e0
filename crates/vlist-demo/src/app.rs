#![forbid(unsafe_code)]

//! Demo model: a generated collection behind a [`VirtualList`].

use serde::Serialize;
use vlist_core::{ScrollEvent, ViewportGeometry};
use vlist_render::{HeadlessViewport, ViewportNode};
use vlist_runtime::{Cmd, Model};
use vlist_widgets::{VirtualList, VirtualListState};

use crate::cli::ScriptStep;

/// Messages understood by [`DemoModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Scroll to an absolute offset.
    Scroll(ScrollEvent),
    /// Move up by one viewport.
    PageUp,
    /// Move down by one viewport.
    PageDown,
    /// Jump to offset zero.
    Top,
    /// Jump to the last full page.
    Bottom,
    /// Stop processing the script.
    Quit,
}

impl From<ScrollEvent> for Msg {
    fn from(event: ScrollEvent) -> Self {
        Msg::Scroll(event)
    }
}

impl From<ScriptStep> for Msg {
    fn from(step: ScriptStep) -> Self {
        match step {
            ScriptStep::Offset(y) => Msg::Scroll(ScrollEvent::new(y)),
            ScriptStep::PageUp => Msg::PageUp,
            ScriptStep::PageDown => Msg::PageDown,
            ScriptStep::Top => Msg::Top,
            ScriptStep::Bottom => Msg::Bottom,
            ScriptStep::Quit => Msg::Quit,
        }
    }
}

/// Generate `n` item labels.
pub fn generate_items(n: usize) -> Vec<String> {
    const WORDS: [&str; 8] = [
        "amber", "birch", "cedar", "delta", "ember", "fjord", "gamma", "harbor",
    ];
    (0..n)
        .map(|i| format!("{} {}", WORDS[i % WORDS.len()], i))
        .collect()
}

/// Row content shown for each item.
#[allow(clippy::ptr_arg)]
pub fn render_row(item: &String, index: usize) -> String {
    format!("{index:>5}  {item}")
}

/// The demo's state.
#[derive(Debug)]
pub struct DemoModel {
    items: Vec<String>,
    geometry: ViewportGeometry,
    state: VirtualListState,
    class_name: Option<String>,
}

impl DemoModel {
    /// Create a model over `items`.
    pub fn new(items: Vec<String>, geometry: ViewportGeometry) -> Self {
        Self {
            items,
            geometry,
            state: VirtualListState::new().with_persistence_id("demo"),
            class_name: None,
        }
    }

    /// Attach a class name to every rendered viewport.
    #[must_use]
    pub fn with_class_name(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name;
        self
    }

    /// Current scroll state.
    pub fn state(&self) -> &VirtualListState {
        &self.state
    }

    /// The generated collection.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Model for DemoModel {
    type Message = Msg;
    type View = ViewportNode<String>;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        let count = self.items.len();
        match msg {
            Msg::Scroll(event) => self.state.on_scroll(event),
            Msg::PageUp => self.state.page_up(&self.geometry, count),
            Msg::PageDown => self.state.page_down(&self.geometry, count),
            Msg::Top => self.state.scroll_to_top(),
            Msg::Bottom => self.state.scroll_to_bottom(&self.geometry, count),
            Msg::Quit => return Cmd::quit(),
        }
        Cmd::none()
    }

    fn view(&self) -> ViewportNode<String> {
        let list = VirtualList::new(&self.items, self.geometry, render_row);
        match self.class_name.as_deref() {
            Some(name) => list.class_name(name).render(&self.state),
            None => list.render(&self.state),
        }
    }
}

/// One frame of JSONL output.
#[derive(Debug, Serialize)]
pub struct FrameRecord<'a> {
    /// Frame number, starting at the initial render.
    pub seq: usize,
    /// Offset the frame was rendered for.
    pub scroll_offset: f64,
    /// First rendered index, `None` for an empty collection.
    pub first: Option<usize>,
    /// Last rendered index.
    pub last: Option<usize>,
    /// Screen lines with no row behind them.
    pub gap_lines: usize,
    /// The full render tree.
    pub node: &'a ViewportNode<String>,
}

impl<'a> FrameRecord<'a> {
    /// Describe `node`, rasterized on `screen` to count gaps.
    pub fn new(seq: usize, node: &'a ViewportNode<String>, screen: &HeadlessViewport) -> Self {
        Self {
            seq,
            scroll_offset: node.scroll_offset,
            first: node.slice.rows.first().map(|row| row.index),
            last: node.slice.rows.last().map(|row| row.index),
            gap_lines: screen.render(node).gap_lines(),
            node,
        }
    }
}

/// Human-readable frame: a header line, then the screen.
pub fn format_frame(seq: usize, node: &ViewportNode<String>, screen: &HeadlessViewport) -> String {
    let frame = screen.render(node);
    let rows = match (node.slice.rows.first(), node.slice.rows.last()) {
        (Some(first), Some(last)) => format!("rows {}..={}", first.index, last.index),
        _ => "rows none".to_string(),
    };
    let mut out = format!(
        "-- frame {seq} offset={} {rows} track={}\n",
        node.scroll_offset, node.track.height
    );
    for line in frame.screen_text() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
