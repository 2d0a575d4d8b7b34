//! Endpoint path table for the provider's REST surface.

/// Relative paths for the six provider operations, joined onto the client's
/// base endpoint URL.
///
/// The defaults match a stock OpenSSO/OpenAM deployment. The table is owned
/// by the client rather than hard-coded at call sites so a non-standard
/// provider layout can be configured per client instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Login endpoint; exchanges credentials for a session token.
    pub authenticate: String,
    /// Logout endpoint; revokes a session token.
    pub logout: String,
    /// Token validation endpoint.
    pub is_token_valid: String,
    /// Subject attribute retrieval endpoint.
    pub attributes: String,
    /// Cookie name lookup endpoint for a given token.
    pub cookie_name_for_token: String,
    /// Endpoint listing the cookie names the provider requires forwarded.
    pub cookie_names_to_forward: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authenticate: "/identity/authenticate".into(),
            logout: "/identity/logout".into(),
            is_token_valid: "/identity/isTokenValid".into(),
            attributes: "/identity/attributes".into(),
            cookie_name_for_token: "/identity/getCookieNameForToken".into(),
            cookie_names_to_forward: "/identity/getCookieNamesToForward".into(),
        }
    }
}

impl Endpoints {
    /// Creates the default path table.
    pub fn new() -> Self {
        Self::default()
    }
}
