//! # Views Module
//!
//! Rendering of the controller state for the terminal.

pub mod ansi_escape_codes;
pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer, DEFAULT_NODE_COUNT};
