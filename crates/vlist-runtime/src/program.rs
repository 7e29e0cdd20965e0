#![forbid(unsafe_code)]

//! Elm-style program loop.
//!
//! # Example
//!
//! ```
//! use vlist_core::ScrollEvent;
//! use vlist_runtime::{Cmd, Model, Program};
//!
//! struct Offset(f64);
//!
//! enum Msg {
//!     Scrolled(f64),
//! }
//!
//! impl From<ScrollEvent> for Msg {
//!     fn from(event: ScrollEvent) -> Self {
//!         Msg::Scrolled(event.sanitized_offset())
//!     }
//! }
//!
//! impl Model for Offset {
//!     type Message = Msg;
//!     type View = String;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         let Msg::Scrolled(y) = msg;
//!         self.0 = y;
//!         Cmd::none()
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("at {}", self.0)
//!     }
//! }
//!
//! let mut program = Program::new(Offset(0.0));
//! program.scroll(ScrollEvent::new(42.0));
//! program.scroll(ScrollEvent::new(-1.0));
//! assert_eq!(program.run_until_idle(), 2);
//! assert_eq!(program.frames(), ["at 0", "at 42", "at 0"]);
//! ```

use std::collections::VecDeque;

use tracing::{debug, debug_span, info};
use vlist_core::ScrollEvent;
use web_time::{Duration, Instant};

/// The state machine driven by a [`Program`].
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Must be convertible from host scroll events.
    type Message: From<ScrollEvent>;

    /// What `view` produces for the host.
    type View;

    /// Initialize the model with startup commands.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self) -> Self::View;
}

/// Side effects returned from `init` and `update`.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop processing messages.
    Quit,
    /// Queue a message behind those already pending.
    Msg(M),
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Self::Batch(cmds),
        }
    }

    /// Number of leaf commands.
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Batch(cmds) => cmds.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}

/// Counters kept by a [`Program`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramStats {
    /// Messages handed to `update`.
    pub messages: u64,
    /// Views produced, including the initial one.
    pub frames: u64,
    /// Duration of the most recent update + view.
    pub last_cycle: Duration,
    /// Longest update + view seen so far.
    pub max_cycle: Duration,
}

/// Drives a [`Model`], one message at a time.
///
/// Messages are processed in arrival order. Commands that emit messages
/// append them to the back of the queue, behind anything already pending.
pub struct Program<M: Model> {
    model: M,
    queue: VecDeque<M::Message>,
    frames: Vec<M::View>,
    running: bool,
    stats: ProgramStats,
}

impl<M: Model> Program<M> {
    /// Initialize `model` and render its first view.
    pub fn new(mut model: M) -> Self {
        let init = model.init();
        let first = model.view();
        let mut program = Self {
            model,
            queue: VecDeque::new(),
            frames: vec![first],
            running: true,
            stats: ProgramStats {
                frames: 1,
                ..ProgramStats::default()
            },
        };
        program.apply(init);
        info!(queued = program.queue.len(), "program initialized");
        program
    }

    /// Queue a host scroll event.
    pub fn scroll(&mut self, event: ScrollEvent) {
        self.send(M::Message::from(event));
    }

    /// Queue a message.
    pub fn send(&mut self, msg: M::Message) {
        self.queue.push_back(msg);
    }

    /// Process queued messages until the queue is empty or the model quits.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_idle(&mut self) -> usize {
        let mut processed = 0;
        while self.running {
            let Some(msg) = self.queue.pop_front() else {
                break;
            };
            let seq = self.stats.messages;
            let span = debug_span!("vlist.update", seq, pending = self.queue.len());
            let _guard = span.enter();

            let started = Instant::now();
            let cmd = self.model.update(msg);
            let view = self.model.view();
            let elapsed = started.elapsed();

            self.frames.push(view);
            self.stats.messages += 1;
            self.stats.frames += 1;
            self.stats.last_cycle = elapsed;
            self.stats.max_cycle = self.stats.max_cycle.max(elapsed);
            processed += 1;

            debug!(
                cycle_us = elapsed.as_micros() as u64,
                commands = cmd.count(),
                "message processed"
            );
            self.apply(cmd);
        }
        processed
    }

    fn apply(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                if self.running {
                    info!(
                        messages = self.stats.messages,
                        dropped = self.queue.len(),
                        "program quit"
                    );
                }
                self.running = false;
            }
            Cmd::Msg(m) => self.queue.push_back(m),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.apply(cmd);
                }
            }
        }
    }

    /// Every view produced so far, oldest first.
    pub fn frames(&self) -> &[M::View] {
        &self.frames
    }

    /// Remove and return the views produced so far.
    pub fn drain_frames(&mut self) -> std::vec::Drain<'_, M::View> {
        self.frames.drain(..)
    }

    /// The most recent view.
    pub fn last_view(&self) -> Option<&M::View> {
        self.frames.last()
    }

    /// False once the model has returned [`Cmd::Quit`].
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Messages waiting to be processed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Borrow the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Loop counters.
    pub fn stats(&self) -> ProgramStats {
        self.stats
    }
}
