use cookie::{Cookie, SameSite};

use crate::constant::session_cookie_name;

/// Whether the inbound request arrived over an encrypted transport. TLS is
/// terminated upstream, so the trusted forwarded-protocol header is the
/// signal.
pub fn is_secure_request(headers: &axum::http::HeaderMap) -> bool {
    let Some(forwarded_proto) = headers
        .get("x-forwarded-proto")
        .and_then(|header| header.to_str().ok())
    else {
        return false;
    };

    forwarded_proto
        .split(',')
        .map(|proto| proto.trim().to_lowercase())
        .find(|proto| !proto.is_empty())
        .is_some_and(|proto| proto == "https")
}

/// Builds the session cookie the way the login portal sets it: HTTP-only,
/// root path, cross-site eligible.
pub fn create_session_cookie(value: &str, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(session_cookie_name(), value.to_owned());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::None);
    cookie.set_secure(secure);
    cookie
}

/// The session cookie with an empty value and an already-elapsed expiry,
/// matching the attributes used at login so the browser drops the original.
pub fn expire_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = create_session_cookie("", secure);
    cookie.set_expires(Some(time::OffsetDateTime::UNIX_EPOCH));
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn forwarded_proto_https_is_secure() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert!(is_secure_request(&headers));
    }

    #[test]
    fn forwarded_proto_list_uses_the_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-proto",
            HeaderValue::from_static(" https , http"),
        );
        assert!(is_secure_request(&headers));
    }

    #[test]
    fn missing_or_plain_proto_is_not_secure() {
        assert!(!is_secure_request(&HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("http"));
        assert!(!is_secure_request(&headers));
    }

    #[test]
    fn expired_cookie_keeps_the_session_attributes() {
        let cookie = expire_session_cookie(true);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.secure(), Some(true));
        assert!(cookie.expires().is_some());
    }
}
