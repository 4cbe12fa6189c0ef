use axum::{
    extract::{rejection::ExtensionRejection, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    Extension, Json, RequestPartsExt,
};
use lead_store::User;
use model::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserExtractorErr {
    #[error("no user attached to the request")]
    AxumExtensionErr(#[from] ExtensionRejection),
}

impl IntoResponse for UserExtractorErr {
    fn into_response(self) -> axum::response::Response {
        tracing::trace!(error = %self, "rejecting unauthenticated call");
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: "unauthorized",
            }),
        )
            .into_response()
    }
}

/// Extractor for protected routes: the user resolved by
/// [`crate::auth::attach_user`], or a 401 before the handler runs.
pub struct AuthedUser(pub User);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = UserExtractorErr;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(user) = parts.extract::<Extension<User>>().await?;
        Ok(AuthedUser(user))
    }
}
