//! sso: typed client for the OpenSSO/OpenAM REST session protocol.
//!
//! This crate exposes the provider's end-user session operations as typed
//! async calls: authenticate to obtain an opaque [`SessionToken`], validate
//! it, read the [`IdentityRecord`] bound to it, and terminate it. The
//! provider speaks a legacy line-oriented `key=value` text format; the
//! decoding lives in [`sso_protocol`] and the lifecycle contract lives in
//! [`SsoClient`].
//!
//! The client is stateless: every call carries the token as evidence of the
//! claimed session state, nothing is cached locally, and all methods take
//! `&self`, so one client may be shared freely across tasks.
//!
//! # Example
//!
//! ```ignore
//! use sso::SsoClient;
//!
//! #[tokio::main]
//! async fn main() -> sso::Result<()> {
//!     let client = SsoClient::new("https://sso.example.com/opensso")?;
//!
//!     let token = client.authenticate("joeblow", "secret").await?;
//!     assert!(client.is_token_valid(&token).await?);
//!
//!     let identity = client.attributes(&token).await?;
//!     println!("uid = {:?}", identity.attribute("uid"));
//!
//!     client.logout(&token).await?;
//!     assert!(!client.is_token_valid(&token).await?);
//!     Ok(())
//! }
//! ```
//!
//! For the REST interface itself see "The OpenSSO REST Interface in
//! Black/White": <http://blogs.sun.com/docteger/entry/opensso_and_rest>

mod client;
mod endpoints;
mod error;
pub mod transport;

pub use client::{AuthenticateOptions, SsoClient};
pub use endpoints::Endpoints;
pub use error::{Error, Result};
pub use transport::{HttpTransport, Transport};

// Re-export protocol types for convenience
pub use sso_protocol::{IdentityRecord, ParseError, SessionToken};

pub use sso_protocol;
