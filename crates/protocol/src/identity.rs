//! Structured view of a subject's identity attributes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Roles and attributes bound to an authenticated subject.
///
/// Built fresh from each `attributes` response and immutable once returned.
/// Roles keep the provider's order (duplicates included); attributes are a
/// name-to-value map where the last occurrence of a repeated name wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Role names in the order the provider returned them.
    pub roles: Vec<String>,

    /// Attribute name to attribute value.
    pub attributes: HashMap<String, String>,
}

impl IdentityRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns true if the subject carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
