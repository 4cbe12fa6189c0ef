use cookie::Cookie;

use crate::{constant::session_cookie_name, error::ProspectAuthError};

/// Pulls the session token out of a request: Authorization header first,
/// then the session cookie for the current environment.
pub fn extract_session_token_from_request_headers(
    headers: &axum::http::HeaderMap,
) -> Result<String, ProspectAuthError> {
    let auth_token_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let token = if let Some(auth_token) = auth_token_header {
        let auth_token_parts = auth_token.split("Bearer ").collect::<Vec<&str>>();
        if auth_token_parts.len() != 2 {
            return Err(ProspectAuthError::InvalidAuthorizationHeaderFormat);
        }
        tracing::trace!("Authorization header provided");
        Some(auth_token_parts[1].to_string())
    } else {
        // Check for cookie
        tracing::trace!("no Authorization header provided. checking for cookie");
        let cookie_header = headers
            .get(axum::http::header::COOKIE)
            .and_then(|header| header.to_str().ok());
        if let Some(header) = cookie_header {
            let name = session_cookie_name();
            header.split(';').find_map(|cookie| {
                let cookie = Cookie::parse(cookie.trim()).ok()?;
                if cookie.name() == name {
                    Some(cookie.value().to_owned())
                } else {
                    None
                }
            })
        } else {
            None
        }
    };

    if let Some(token) = token {
        return Ok(token);
    }

    Err(ProspectAuthError::NoSessionTokenProvided)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    #[test]
    fn prefers_the_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("prospect-session=from-cookie"),
        );

        let token = extract_session_token_from_request_headers(&headers).unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn falls_back_to_the_session_cookie() {
        let mut headers = HeaderMap::new();
        let value = format!("other=1; {}=from-cookie", session_cookie_name());
        headers.insert(header::COOKIE, HeaderValue::from_str(&value).unwrap());

        let token = extract_session_token_from_request_headers(&headers).unwrap();
        assert_eq!(token, "from-cookie");
    }

    #[test]
    fn rejects_a_malformed_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc"));

        match extract_session_token_from_request_headers(&headers) {
            Err(ProspectAuthError::InvalidAuthorizationHeaderFormat) => {}
            other => panic!("expected InvalidAuthorizationHeaderFormat, got {other:?}"),
        }
    }

    #[test]
    fn errors_when_nothing_is_provided() {
        let headers = HeaderMap::new();

        match extract_session_token_from_request_headers(&headers) {
            Err(ProspectAuthError::NoSessionTokenProvided) => {}
            other => panic!("expected NoSessionTokenProvided, got {other:?}"),
        }
    }
}
