//! Error types for the session client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the identity provider.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was constructed with an unusable configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The provider rejected the supplied credentials.
    ///
    /// Signaled by an exactly-empty login response body per provider
    /// contract. Recoverable by re-prompting the caller; never retried
    /// automatically.
    #[error("invalid credentials for user '{username}'")]
    AuthenticationFailed {
        /// The username whose login attempt was rejected.
        username: String,
    },

    /// The response body violated the provider's grammar.
    ///
    /// Indicates a provider contract breach (truncated or corrupt
    /// response), distinct from the empty-body credential rejection.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] sso_protocol::ParseError),

    /// The transport succeeded but returned an unexpected non-200 status.
    ///
    /// HTTP 4xx/5xx never reach this variant; that class is collapsed to an
    /// empty body by the transport (see [`crate::transport`]).
    #[error("unexpected status {status} from {url}")]
    Protocol {
        /// The request URL.
        url: String,
        /// The HTTP status code received.
        status: u16,
    },

    /// Connection-level transport failure (DNS, refused connection, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Returns true if this is a credential rejection.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::AuthenticationFailed { .. })
    }

    /// Returns true if this is a response grammar violation.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::MalformedResponse(_))
    }
}
