use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_store::StoreError;
use model::{ErrorResponse, GenericSuccessResponse};
use prospect_middleware::extract::AuthedUser;
use thiserror::Error;

use crate::api::context::AppState;

#[derive(Debug, Error)]
pub enum DeleteLeadErr {
    #[error("lead not found or access denied")]
    NotFound,
    #[error("An unknown error has occurred")]
    StoreError(StoreError),
}

impl From<StoreError> for DeleteLeadErr {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => DeleteLeadErr::NotFound,
            err => DeleteLeadErr::StoreError(err),
        }
    }
}

impl IntoResponse for DeleteLeadErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            DeleteLeadErr::NotFound => StatusCode::NOT_FOUND,
            DeleteLeadErr::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "DeleteLeadErr",
                "Internal server error"
            );
        }

        let message = self.to_string();
        (status_code, Json(ErrorResponse { message: &message })).into_response()
    }
}

/// Hard-delete an owned lead.
#[utoipa::path(
        delete,
        tag = "leads",
        operation_id = "leads_delete",
        path = "/api/leads/{id}",
        params(("id" = i64, Path, description = "Lead id")),
        responses(
            (status = 200, body = GenericSuccessResponse),
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
) -> Result<Json<GenericSuccessResponse>, DeleteLeadErr> {
    state.store.delete(id, user.0.id).await?;

    tracing::info!(lead_id = %id, "deleted lead");

    Ok(Json(GenericSuccessResponse::default()))
}
