//! # uitag CLI
//!
//! The binary is a thin driver around the library: the CLI lives in
//! `src/uitag/cli/`, while this file only invokes `cli::run()` and handles
//! process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/uitag/cli/)                                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Script parsing (script.rs)                               │
//! │  - Context wiring + event replay (commands.rs)              │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/uitag/api.rs)                               │
//! │  - TagWidget<Board>, one per replay                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A browser host would drive the same `TagWidget` from attribute change
//! callbacks; the CLI drives it from a script, one event per line, which
//! makes every widget scenario reproducible from a text file.
//!
//! ## Testing Approach
//!
//! - **Command layer**: unit tests beside each module.
//! - **CLI layer**: argument parsing and rendering are unit tested in place;
//!   whole scripts are replayed end to end in `tests/cli_script.rs`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
