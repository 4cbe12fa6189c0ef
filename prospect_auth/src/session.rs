use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::ProspectAuthError;

/// Everything needed to validate an inbound session token.
#[derive(Clone)]
pub struct SessionValidationArgs {
    audience: String,
    issuer: String,
    jwt_secret: String,
}

impl SessionValidationArgs {
    /// create a new instance of self by reading the required data from the environment
    pub fn from_env() -> Result<Self, ProspectAuthError> {
        let audience = std::env::var("SESSION_AUDIENCE").map_err(|_| {
            ProspectAuthError::MissingVar {
                name: "SESSION_AUDIENCE",
            }
        })?;
        let issuer = std::env::var("SESSION_ISSUER").map_err(|_| ProspectAuthError::MissingVar {
            name: "SESSION_ISSUER",
        })?;
        let jwt_secret =
            std::env::var("SESSION_JWT_SECRET").map_err(|_| ProspectAuthError::MissingVar {
                name: "SESSION_JWT_SECRET",
            })?;
        Ok(Self {
            audience,
            issuer,
            jwt_secret,
        })
    }

    #[cfg(any(test, feature = "testing"))]
    /// create a new instance of Self with fixed values for tests
    pub fn new_testing() -> Self {
        Self {
            audience: "prospect-test".to_string(),
            issuer: "prospect-test-issuer".to_string(),
            jwt_secret: "test-secret".to_string(),
        }
    }
}

/// Claims carried by a session token. The subject is the user's open id,
/// assigned by the login portal.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct SessionToken {
    /// The audience of the token
    pub aud: String,
    /// The issuer of the token, the login portal domain
    pub iss: String,
    /// The expiration time of the token
    pub exp: usize,
    /// The open id of the user the session belongs to
    pub sub: String,
}

/// Validates a session token against the configured audience, issuer, and secret.
pub fn validate_session_token(
    session_token: &str,
    args: &SessionValidationArgs,
) -> Result<SessionToken, ProspectAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    validation.leeway = 0;
    validation.set_audience(&[&args.audience]);
    validation.set_issuer(&[&args.issuer]);

    let decoded: SessionToken = match decode::<SessionToken>(
        session_token,
        &DecodingKey::from_secret(args.jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(ProspectAuthError::SessionExpired);
            }
            _ => {
                return Err(ProspectAuthError::SessionValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    Ok(decoded)
}

#[cfg(any(test, feature = "testing"))]
/// Mints a session token the way the login portal would. Tests only.
pub fn encode_session_token(
    open_id: &str,
    expires_in_secs: i64,
    args: &SessionValidationArgs,
) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let exp = (now + expires_in_secs).max(0);

    let claims = SessionToken {
        aud: args.audience.clone(),
        iss: args.issuer.clone(),
        exp: exp as usize,
        sub: open_id.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(args.jwt_secret.as_bytes()),
    )
    .unwrap()
}
