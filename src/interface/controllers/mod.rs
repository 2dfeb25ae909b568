//! # Controllers
//!
//! Owners of interaction state. Views only observe what they expose.

pub mod request_controller;

pub use request_controller::{interpret_reply, ControllerSnapshot, RequestController};
