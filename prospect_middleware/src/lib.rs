//! Request-side session plumbing: the middleware that resolves a user from
//! request credentials, and the extractor protected handlers use to require
//! one.

pub mod auth;
pub mod extract;
