//! # Interface Module
//!
//! Client side of the distributed model service, split the same way the
//! rest of the application is:
//!
//! - **Codec**: request payload encoding and response decoding per transport mode
//! - **Models**: input text and submission state owned by the controller
//! - **Services**: the processing service seam and its HTTP implementation
//! - **Controllers**: the submission lifecycle
//! - **Views**: read-only rendering of controller snapshots
//!
//! ```text
//! input ──▶ RequestController ──encode──▶ ProcessingService ──HTTP──▶ model service
//!                 │  ▲                                                     │
//!                 │  └──────────decode◀── ServiceReply ◀───────────────────┘
//!                 ▼
//!          ControllerSnapshot ──▶ TerminalRenderer
//! ```

pub mod codec;
pub mod controllers;
pub mod events;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
pub mod testing;

pub use codec::{decode, encode, encode_at, Metadata, RequestPayload, ResultState, TransportMode};
pub use controllers::{ControllerSnapshot, RequestController};
pub use events::ControllerEvent;
pub use models::{InputModel, Phase, SubmissionModel};
pub use services::{HttpService, ProcessingService, ServiceReply};
pub use views::{TerminalRenderer, ViewRenderer};
