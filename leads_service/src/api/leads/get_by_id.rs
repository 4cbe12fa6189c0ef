use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_store::{Lead, StoreError};
use model::ErrorResponse;
use prospect_middleware::extract::AuthedUser;
use thiserror::Error;

use crate::api::context::AppState;

#[derive(Debug, Error)]
pub enum GetLeadErr {
    /// One outcome for nonexistent and foreign-owned ids
    #[error("lead not found or access denied")]
    NotFound,
    #[error("An unknown error has occurred")]
    StoreError(StoreError),
}

impl From<StoreError> for GetLeadErr {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => GetLeadErr::NotFound,
            err => GetLeadErr::StoreError(err),
        }
    }
}

impl IntoResponse for GetLeadErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetLeadErr::NotFound => StatusCode::NOT_FOUND,
            GetLeadErr::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "GetLeadErr",
                "Internal server error"
            );
        }

        let message = self.to_string();
        (status_code, Json(ErrorResponse { message: &message })).into_response()
    }
}

/// A single lead, only when the caller owns it.
#[utoipa::path(
        get,
        tag = "leads",
        operation_id = "leads_get_by_id",
        path = "/api/leads/{id}",
        params(("id" = i64, Path, description = "Lead id")),
        responses(
            (status = 200, body = Lead),
            (status = 401, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn handler(
    State(state): State<AppState>,
    user: AuthedUser,
    Path(id): Path<i64>,
) -> Result<Json<Lead>, GetLeadErr> {
    let lead = state
        .store
        .get_by_id(id, user.0.id)
        .await?
        .ok_or(GetLeadErr::NotFound)?;

    Ok(Json(lead))
}
