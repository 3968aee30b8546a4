//! # CLI Behavior
//!
//! This is **one possible host** for the widget, not the widget itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Event Scripts
//!
//! `uitag run [FILE]` reads a script (stdin when no file is given) and
//! replays it against a fresh widget rendered into an in-memory board:
//!
//! ```text
//! // pool and target first
//! set tags ["#3","#10","#2"]
//! set target tags
//! id #5
//! type blocked
//! confirm
//! show
//! ```
//!
//! Each line is one event. The first error stops the replay and is reported
//! with its line number.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `script`: line parser producing [`script::Event`]s
//! - `commands`: `run()`, logging and config setup, event dispatch
//! - `render`: string rendering of messages, widget state and attributes

mod commands;
mod render;
mod script;
mod setup;

pub use commands::run;
