use axum::{http::HeaderMap, Json};
use model::GenericSuccessResponse;
use prospect_auth::cookies::{expire_session_cookie, is_secure_request};
use tower_cookies::Cookies;

/// Clears the session cookie. Public: logging out an already-expired
/// session is fine.
#[utoipa::path(
        post,
        tag = "auth",
        operation_id = "auth_logout",
        path = "/api/auth/logout",
        responses(
            (status = 200, body = GenericSuccessResponse),
        )
    )]
#[tracing::instrument(skip_all)]
pub async fn handler(headers: HeaderMap, cookies: Cookies) -> Json<GenericSuccessResponse> {
    // Attributes must match the cookie set at login or the browser keeps it
    let secure = is_secure_request(&headers);
    cookies.add(expire_session_cookie(secure));

    Json(GenericSuccessResponse::default())
}
