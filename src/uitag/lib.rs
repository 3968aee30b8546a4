//! # uitag Architecture
//!
//! uitag is the **state core of a tag assignment widget**: a user picks a tag
//! (an issue reference such as `#42`), marks it with a type (`blocked`,
//! `duplicate`, ...) and attaches it to a target container, or removes it
//! again. The core knows nothing about how any of that is drawn.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, replays event scripts, prints state    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - TagWidget facade, one per widget instance                │
//! │  - Resolves attribute names, mirrors outbound writes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Ledger, edit session, inbound/outbound attribute sync    │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rendering Collaborator (render/)                           │
//! │  - Abstract TagRenderer trait                               │
//! │  - Board (in-memory containers)                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Attributes Are the Interface
//!
//! External code drives and observes a widget only through six string
//! attributes (`tags`, `assigned`, `id`, `name`, `type`, `target`; see
//! [`attributes`]). Inbound changes are parsed into typed updates and applied;
//! after every internal change the affected attributes are written back.
//! The attributes are a serialization boundary: the authoritative state is
//! [`commands::WidgetState`].
//!
//! ## Invariants
//!
//! - No id is ever both available and assigned; moves are paired.
//! - The pool is re-sorted by embedded issue number whenever a tag returns to it.
//! - Confirm is only effective when the candidate has an id and a real type.
//!
//! ## Module Overview
//!
//! - [`api`]: The `TagWidget` facade
//! - [`commands`]: Ledger, session and sync logic
//! - [`attributes`]: Attribute keys and value codec
//! - [`render`]: Rendering collaborator trait and `Board`
//! - [`model`]: Core data types (`TagId`, `TagType`, `CandidateTag`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, script replay and printing for the binary (not part of the lib API)

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
