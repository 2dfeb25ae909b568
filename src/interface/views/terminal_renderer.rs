//! # Terminal Renderer
//!
//! Read-only observer of the controller state. It formats a snapshot as
//! plain lines of text and never mutates anything it is given.

use super::ansi_escape_codes::{BOLD, DIM, FG_GREEN, FG_RED, FG_YELLOW, RESET};
use crate::interface::codec::ResultState;
use crate::interface::controllers::ControllerSnapshot;
use crate::interface::events::ControllerEvent;
use anyhow::Result;
use std::io::Write;

/// Node count the service reports when it does not say otherwise
pub const DEFAULT_NODE_COUNT: u64 = 3;

const NOT_AVAILABLE: &str = "N/A";

/// Trait for rendering controller state
pub trait ViewRenderer {
    /// Render the whole state
    fn render_full(&mut self, snapshot: &ControllerSnapshot) -> Result<()>;

    /// Render a single lifecycle transition
    fn render_event(&mut self, event: &ControllerEvent) -> Result<()>;

    /// Render a one-line notice that is not part of the state
    fn render_notice(&mut self, message: &str) -> Result<()>;
}

/// Renderer writing to any byte sink, usually stdout
pub struct TerminalRenderer<W: Write> {
    out: W,
    use_color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Consume the renderer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a snapshot as the lines shown to the user
    pub fn format_snapshot(&self, snapshot: &ControllerSnapshot) -> String {
        let mut text = String::new();

        if snapshot.is_loading {
            text.push_str(&self.paint(FG_YELLOW, "Processing..."));
            text.push('\n');
        }

        // A stale result is still shown under a fresh error
        if let Some(error) = &snapshot.error {
            text.push_str(&self.paint(FG_RED, &format!("Error: {error}")));
            text.push('\n');
        }

        if let Some(result) = &snapshot.result {
            text.push_str(&self.paint(BOLD, "Result:"));
            text.push('\n');
            for line in result.display_text().lines() {
                text.push_str(&format!("  {line}\n"));
            }

            text.push_str(&self.paint(BOLD, "Processing Details:"));
            text.push('\n');
            for (label, value) in Self::details(result) {
                text.push_str(&format!("  {:<17}{value}\n", format!("{label}:")));
            }
            if let Some(ms) = snapshot.duration_ms {
                text.push_str(&self.paint(DIM, &format!("  {:<17}{ms} ms", "Round Trip:")));
                text.push('\n');
            }
        }

        text
    }

    fn details(result: &ResultState) -> Vec<(&'static str, String)> {
        let processing_time = result
            .processing_time()
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        match result {
            ResultState::Bytes(bytes) => {
                let nodes = bytes
                    .passthrough
                    .get("nodeCount")
                    .and_then(|count| count.as_number())
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| DEFAULT_NODE_COUNT.to_string());
                vec![
                    ("Nodes Used", nodes),
                    ("Processing Time", processing_time),
                    ("Output Size", format!("{} elements", bytes.output_size())),
                ]
            }
            ResultState::Text(text) => vec![
                (
                    "Nodes Used",
                    text.node_count.as_ref()
                        .map(|count| count.to_string())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                ),
                ("Processing Time", processing_time),
                ("Output Size", format!("{} characters", text.output_size())),
            ],
        }
    }
}

impl<W: Write> ViewRenderer for TerminalRenderer<W> {
    fn render_full(&mut self, snapshot: &ControllerSnapshot) -> Result<()> {
        let text = self.format_snapshot(snapshot);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn render_event(&mut self, event: &ControllerEvent) -> Result<()> {
        let line = match event {
            ControllerEvent::SubmissionStarted { mode, input_len } => self.paint(
                FG_YELLOW,
                &format!("Processing {input_len} bytes ({mode})..."),
            ),
            ControllerEvent::SubmissionSucceeded { .. } => self.paint(FG_GREEN, "Done."),
            ControllerEvent::SubmissionFailed { message } => {
                self.paint(FG_RED, &format!("Failed: {message}"))
            }
        };
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_notice(&mut self, message: &str) -> Result<()> {
        let line = self.paint(DIM, message);
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
