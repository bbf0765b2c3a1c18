//! OmniDev is a full-screen terminal shell for a multimodal AI chat
//! workspace.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns runtime state: the session flags (sidebar, incognito,
//!   selected model), the composer draft, the transcript, and the static
//!   model catalog and chat list.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates, including the
//!   viewport guard that replaces the shell with a rotate-device notice on
//!   narrow portrait hosts.
//! - [`utils`] holds the host capability seams: the haptic feedback
//!   dispatcher, the system clipboard, and shared test fixtures.
//!
//! There is no network client and no persistence. Sending a message is a
//! stub boundary: an accepted submission emits a structured log event with
//! the draft payload and clears the composer. All state lives in process
//! memory for the lifetime of the shell.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which initializes tracing and dispatches
//! into [`ui::chat_loop`] for interactive sessions.

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
