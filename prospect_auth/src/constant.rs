use prospect_env::Environment;

/// The name of the cookie that contains the session token
pub static SESSION_COOKIE: &str = "prospect-session";

/// The session cookie name for the current environment.
/// Outside production the cookie is prefixed so a dev session can never be
/// replayed against prod.
pub fn session_cookie_name() -> String {
    match Environment::new_or_prod() {
        Environment::Production => SESSION_COOKIE.to_string(),
        Environment::Local | Environment::Develop => format!("dev-{SESSION_COOKIE}"),
    }
}
