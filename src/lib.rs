//! # Modelline - Terminal Client for a Distributed Model Service
//!
//! Submits text to a remote model processing endpoint and renders the
//! result. Input can travel either as raw UTF-8 bytes or as plain text,
//! selected per profile.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   snapshot   ┌──────────────────┐   payload   ┌──────────────┐
//! │    View     │◄─────────────│    Controller    │────────────▶│   Service    │
//! │             │              │                  │             │              │
//! │ - Terminal  │              │ - Input          │   reply     │ - HTTP POST  │
//! │ - Rendering │              │ - Lifecycle      │◄────────────│ - JSON body  │
//! └─────────────┘              │ - Result / Error │             └──────────────┘
//!                              └──────────────────┘
//!                                      ▲
//!                                      │ encode / decode
//!                                      ▼
//!                               ┌──────────────┐
//!                               │    Codec     │
//!                               │ - Byte array │
//!                               │ - Plain text │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod interface;

// Re-export main types for easy access
pub use error::{DecodeError, SubmitError};
pub use interface::*;
