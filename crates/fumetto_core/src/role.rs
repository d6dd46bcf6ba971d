//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles are the same across collaborators.
///
/// # Examples
///
/// ```
/// use fumetto_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human (or the pipeline acting for them)
    User,
    /// Assistant messages are from the model
    Assistant,
}
