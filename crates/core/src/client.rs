//! Session client for the provider's REST operations.
//!
//! [`SsoClient`] is a stateless request/response translator: it builds each
//! request, delegates the round-trip to a [`Transport`], feeds the raw body
//! through the grammar parsers in [`sso_protocol`], and returns a typed
//! result. It holds no session state - the provider owns every token's
//! lifetime, and each call carries the token as evidence of the claimed
//! state.

use sso_protocol::{IdentityRecord, SessionToken, response};

use crate::endpoints::Endpoints;
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};

/// Default attribute-name filter for [`SsoClient::attributes`].
///
/// The provider accepts the filter but tends to return the full attribute
/// set regardless; "uid" matches the stock interface default.
const DEFAULT_ATTRIBUTE_NAMES: &str = "uid";

/// Optional qualifiers for [`SsoClient::authenticate_with`].
///
/// `uri` is forwarded verbatim (the provider expects the parameter to be
/// present and the stock interface sends it empty); `realm` selects a
/// provider-side tenant namespace and is only sent when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticateOptions {
    /// Value of the `uri` login parameter, empty when unset.
    pub uri: Option<String>,
    /// Provider realm to authenticate against.
    pub realm: Option<String>,
}

impl AuthenticateOptions {
    /// Creates empty options (empty `uri`, no realm).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `uri` login parameter.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the provider realm.
    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }
}

/// Client for an OpenSSO/OpenAM identity provider.
///
/// Owns only the immutable base endpoint URL, the endpoint path table, and
/// the transport. All operations take `&self` and are independently safe to
/// invoke concurrently; there is no locking, no background work, and no
/// retry policy.
pub struct SsoClient {
    endpoint: String,
    endpoints: Endpoints,
    transport: Box<dyn Transport>,
}

impl SsoClient {
    /// Creates a client for the provider at `endpoint` using the default
    /// HTTP transport.
    ///
    /// `endpoint` is the base URL of the deployment, e.g.
    /// `https://sso.example.com/opensso`. Fails with
    /// [`Error::Configuration`] if it is empty - a precondition check, made
    /// before any network activity.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_transport(endpoint, Box::new(HttpTransport::new()))
    }

    /// Creates a client with a caller-supplied transport.
    pub fn with_transport(
        endpoint: impl Into<String>,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(Error::Configuration(
                "provider endpoint URL must not be empty".into(),
            ));
        }
        Ok(Self {
            endpoint,
            endpoints: Endpoints::default(),
            transport,
        })
    }

    /// Replaces the endpoint path table, for non-standard provider layouts.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The base endpoint URL this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}{}", self.endpoint, path);
        self.transport.get(&url, params).await
    }

    /// Authenticates and returns the session token.
    ///
    /// Equivalent to [`authenticate_with`](Self::authenticate_with) with
    /// default options (empty `uri`, no realm).
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<SessionToken> {
        self.authenticate_with(username, password, &AuthenticateOptions::default())
            .await
    }

    /// Authenticates with explicit `uri`/realm qualifiers and returns the
    /// session token.
    ///
    /// An exactly-empty response body means the provider rejected the
    /// credentials and fails with [`Error::AuthenticationFailed`]. A
    /// non-empty body that does not match the token grammar is a provider
    /// contract violation and fails with [`Error::MalformedResponse`] - the
    /// two cases are deliberately distinct.
    pub async fn authenticate_with(
        &self,
        username: &str,
        password: &str,
        options: &AuthenticateOptions,
    ) -> Result<SessionToken> {
        let uri = options.uri.as_deref().unwrap_or("");
        let mut params = vec![("username", username), ("password", password), ("uri", uri)];
        if let Some(realm) = options.realm.as_deref() {
            params.push(("realm", realm));
        }

        tracing::debug!(username, "authenticating against {}", self.endpoint);
        let body = self.get(&self.endpoints.authenticate, &params).await?;
        if body.is_empty() {
            return Err(Error::AuthenticationFailed {
                username: username.to_string(),
            });
        }

        Ok(response::parse_token(&body)?)
    }

    /// Logs out by revoking the token.
    ///
    /// Fire-and-forget by provider contract: the response body is
    /// intentionally discarded, though transport-level failures still
    /// surface.
    pub async fn logout(&self, token: &SessionToken) -> Result<()> {
        tracing::debug!("revoking session token");
        let _body = self
            .get(&self.endpoints.logout, &[("subjectid", token.as_str())])
            .await?;
        Ok(())
    }

    /// Checks whether the token still names a live session.
    ///
    /// Invalidity is a normal `false` outcome, never an error; this is also
    /// the only way to observe provider-side expiry. This is a pure query
    /// and never mutates session state.
    pub async fn is_token_valid(&self, token: &SessionToken) -> Result<bool> {
        let body = self
            .get(
                &self.endpoints.is_token_valid,
                &[("tokenid", token.as_str())],
            )
            .await?;
        Ok(response::parse_boolean(&body))
    }

    /// Reads the identity record bound to the token, with the default
    /// attribute-name filter.
    pub async fn attributes(&self, token: &SessionToken) -> Result<IdentityRecord> {
        self.attributes_with(token, DEFAULT_ATTRIBUTE_NAMES, &[])
            .await
    }

    /// Reads the identity record with an explicit attribute-name filter and
    /// extra caller-supplied query parameters merged into the request.
    pub async fn attributes_with(
        &self,
        token: &SessionToken,
        attribute_names: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<IdentityRecord> {
        let mut params = vec![
            ("subjectid", token.as_str()),
            ("attributes_names", attribute_names),
        ];
        params.extend_from_slice(extra_params);

        tracing::debug!("reading subject attributes");
        let body = self.get(&self.endpoints.attributes, &params).await?;
        Ok(response::parse_attributes(&body)?)
    }

    /// Returns the name of the token cookie that should be set on clients.
    pub async fn cookie_name_for_token(&self, token: &SessionToken) -> Result<String> {
        let body = self
            .get(
                &self.endpoints.cookie_name_for_token,
                &[("tokenid", token.as_str())],
            )
            .await?;
        Ok(response::parse_value(&body)?.to_string())
    }

    /// Returns the cookie names the provider requires forwarded, in order.
    pub async fn cookie_names_to_forward(&self) -> Result<Vec<String>> {
        let body = self
            .get(&self.endpoints.cookie_names_to_forward, &[])
            .await?;
        Ok(response::parse_string_list(&body))
    }
}

impl std::fmt::Debug for SsoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsoClient")
            .field("endpoint", &self.endpoint)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
