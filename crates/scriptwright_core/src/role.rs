//! Roles of the participants in a generation request.

use serde::{Deserialize, Serialize};

/// Who a message comes from.
///
/// # Examples
///
/// ```
/// use scriptwright_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::User), "User");
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
    /// Standing instructions that frame the whole exchange
    System,
    /// Content supplied by the person driving the generation
    User,
}
