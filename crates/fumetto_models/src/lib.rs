//! Creative collaborator clients.
//!
//! Each provider module implements [`CreativeDriver`] over its HTTP API.
//! Gemini is currently the only provider; the pipeline only ever sees the
//! trait.
//!
//! [`CreativeDriver`]: fumetto_interface::CreativeDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
