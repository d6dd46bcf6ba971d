//! Error types for the Fumetto comic generation pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Fumetto workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fumetto_error::{FumettoResult, CollaboratorError, CollaboratorErrorKind};
//!
//! fn call_model() -> FumettoResult<String> {
//!     Err(CollaboratorError::new(CollaboratorErrorKind::Unavailable(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! assert!(call_model().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod collaborator;
mod compat;
mod config;
mod error;
mod json;
mod pipeline;
mod schema;

pub use asset::{AssetError, AssetErrorKind};
pub use collaborator::{CollaboratorError, CollaboratorErrorKind};
pub use compat::{CompatError, CompatErrorKind};
pub use config::ConfigError;
pub use error::{FumettoError, FumettoErrorKind, FumettoResult};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use schema::{SchemaError, SchemaErrorKind};
