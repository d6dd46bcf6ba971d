//! Comic script schema and validation.
//!
//! A script is the typed plan for one three-panel comic: panels, staged
//! characters, and dialogue. This crate extracts a script from raw planner
//! output, enforces its structural rules, and validates every character
//! reference against the catalog before any asset work begins.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod parse;
mod reference;
mod script;
mod validate;

pub use extraction::extract_json;
pub use parse::parse_script;
pub use reference::{CharacterReference, Signature};
pub use script::{ComicScript, DialogueLine, Panel, PANEL_COUNT};
pub use validate::validate_script;
