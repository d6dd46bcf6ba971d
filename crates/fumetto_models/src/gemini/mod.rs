//! Gemini REST client.

mod client;
mod protocol;

pub use client::GeminiClient;
