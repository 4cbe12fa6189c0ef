//! Shared wire types used across the prospect services

pub mod response;

pub use response::{EmptyResponse, ErrorResponse, GenericSuccessResponse};
