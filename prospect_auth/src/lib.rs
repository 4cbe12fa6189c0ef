//! Session credential handling for the prospect services.
//!
//! Sessions are issued by the external login portal as HS256 JWTs; this crate
//! only validates them and knows how the session cookie is named and shaped.

pub mod constant;
pub mod cookies;
pub mod error;
pub mod headers;
pub mod session;
