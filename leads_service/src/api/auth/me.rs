use axum::{Extension, Json};
use lead_store::User;

/// The authenticated user, or null when the call carries no valid session.
#[utoipa::path(
        get,
        tag = "auth",
        operation_id = "auth_me",
        path = "/api/auth/me",
        responses(
            (status = 200, body = User, description = "the user, or null when anonymous"),
        )
    )]
#[tracing::instrument(skip_all)]
pub async fn handler(user: Option<Extension<User>>) -> Json<Option<User>> {
    Json(user.map(|Extension(user)| user))
}
