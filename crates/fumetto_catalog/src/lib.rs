//! Static character catalog.
//!
//! The catalog is the fixed table of playable character identities with
//! their supported angles, poses, emotions, and customization axes. It is
//! loaded once at process start, never mutated, and passed by reference
//! into the planner and validator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod definition;
mod roster;

pub use catalog::Catalog;
pub use definition::CharacterDefinition;
