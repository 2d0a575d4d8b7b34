//! Error types for response grammar parsing.

use thiserror::Error;

/// Errors raised when a provider response violates the expected grammar.
///
/// These indicate a provider contract breach (truncated or corrupt
/// response), not a normal protocol outcome. Invalid credentials and
/// invalid tokens are signaled in-band (empty body, `boolean=false`) and
/// never produce a `ParseError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line that must carry a `key=value` pair had no `=` separator.
    #[error("no '=' separator in response line '{line}'")]
    MissingSeparator {
        /// The offending line, trimmed.
        line: String,
    },

    /// A `userdetails.attribute.name` line was the last line of the
    /// response, so the positionally-paired value line is missing.
    #[error("attribute name '{name}' is not followed by a value line")]
    DanglingAttributeName {
        /// The attribute name whose value line is absent.
        name: String,
    },
}
