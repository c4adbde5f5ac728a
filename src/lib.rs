//! Causerie is a terminal chat view that formats lines with /me and /w
//! commands.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`commands`] classifies raw submissions into action, whisper, or plain
//!   lines by their leading command prefix.
//! - [`core`] owns the transcript, the single-line composer, the session
//!   state machine, and window configuration.
//! - [`transport`] is the delivery boundary; [`transport::LocalEcho`] loops
//!   sent lines straight back.
//! - [`ui`] lays classified lines out as styled segments and renders the
//!   terminal front-end.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`]
//! for interactive sessions.

pub mod cli;
pub mod commands;
pub mod core;
pub mod transport;
pub mod ui;
pub mod utils;
