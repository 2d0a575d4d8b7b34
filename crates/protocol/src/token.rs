//! Opaque session token handle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque session token issued by the identity provider.
///
/// The token has no structure the client may rely on; it is forwarded
/// verbatim as evidence of an authenticated session. Its lifetime is owned
/// by the provider - the client never caches or expires it locally, and the
/// only way to observe provider-side expiry is an `isTokenValid` call
/// returning `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string exactly as returned by the provider.
    pub fn new(raw: impl Into<String>) -> Self {
        SessionToken(raw.into())
    }

    /// The token as it appears on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the handle, returning the raw token string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        SessionToken(raw)
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        SessionToken(raw.to_string())
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
