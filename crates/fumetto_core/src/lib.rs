//! Core data types for the Fumetto pipeline's collaborator calls.
//!
//! This crate provides the wire shape every creative-collaborator call uses:
//! conversation roles, messages, inputs, outputs, and the request/response
//! pair, plus tracing initialization for binaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod message;
mod output;
mod request;
mod role;
mod telemetry;

pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use telemetry::init_telemetry;
