#![forbid(unsafe_code)]

//! Runtime: a single-threaded, strictly ordered message loop.
//!
//! The host delivers [`ScrollEvent`](vlist_core::ScrollEvent)s (and any other
//! messages) to a [`Program`], which hands them to a [`Model`] one at a time.
//! Each processed message yields exactly one `update` followed by one `view`.

pub mod program;

pub use program::{Cmd, Model, Program, ProgramStats};
