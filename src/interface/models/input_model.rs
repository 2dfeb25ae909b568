//! # Input Model
//!
//! The text the user is editing. Owned by the controller for one session.

/// Text waiting to be submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputModel {
    text: String,
}

impl InputModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole input
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Whether the input has anything to submit besides whitespace
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Length of the input in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
