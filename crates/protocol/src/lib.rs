//! Wire grammar and data types for the OpenSSO identity protocol.
//!
//! This crate contains the parsers and plain data types for the provider's
//! line-oriented `key=value` response format. These represent the "protocol
//! layer" - the shapes of data as they appear on the wire, decoded into
//! structured values.
//!
//! # Design Philosophy
//!
//! Types and functions in this crate are:
//! - **Pure**: parsers are functions of their input string only, with no
//!   transport or session knowledge
//! - **1:1 with protocol**: the four dialects match the provider's observed
//!   response shapes, quirks included
//! - **Stable**: changes only when the wire format changes
//!
//! The client API is built on top of these in `sso-rs`.

pub mod error;
pub mod identity;
pub mod response;
pub mod token;

pub use error::*;
pub use identity::*;
pub use response::*;
pub use token::*;
