#[derive(thiserror::Error, Debug, serde::Serialize)]
#[serde(tag = "type")]
pub enum ProspectAuthError {
    #[error("invalid Authorization header format")]
    InvalidAuthorizationHeaderFormat,
    #[error("no session token provided")]
    NoSessionTokenProvided,
    #[error("session validation failed: {details}")]
    SessionValidationFailed { details: String },
    #[error("session is expired")]
    SessionExpired,
    #[error("missing environment variable {name}")]
    MissingVar { name: &'static str },
}
