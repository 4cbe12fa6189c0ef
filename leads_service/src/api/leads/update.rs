use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_store::{Lead, LeadPatch, LeadValidationError, StoreError};
use model::ErrorResponse;
use prospect_middleware::extract::AuthedUser;
use thiserror::Error;

use crate::api::context::AppState;

#[derive(Debug, Error)]
pub enum UpdateLeadErr {
    #[error("{0}")]
    InvalidRequest(#[from] LeadValidationError),
    #[error("lead not found or access denied")]
    NotFound,
    #[error("An unknown error has occurred")]
    StoreError(StoreError),
}

impl From<StoreError> for UpdateLeadErr {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => UpdateLeadErr::NotFound,
            err => UpdateLeadErr::StoreError(err),
        }
    }
}

impl IntoResponse for UpdateLeadErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdateLeadErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            UpdateLeadErr::NotFound => StatusCode::NOT_FOUND,
            UpdateLeadErr::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdateLeadErr",
                "Internal server error"
            );
        }

        let message = self.to_string();
        (status_code, Json(ErrorResponse { message: &message })).into_response()
    }
}

/// Merge the supplied fields over an owned lead. The owner id is not part
/// of the editable set.
#[utoipa::path(
        patch,
        tag = "leads",
        operation_id = "leads_update",
        path = "/api/leads/{id}",
        params(("id" = i64, Path, description = "Lead id")),
        request_body = LeadPatch,
        responses(
            (status = 200, body = Lead),
            (status = 400, body = ErrorResponse),
            (status = 401, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(state, user, patch), fields(user_id = %user.0.id))]
pub async fn handler(
    State(state): State<AppState>,
    user: AuthedUser,
    Path(id): Path<i64>,
    Json(patch): Json<LeadPatch>,
) -> Result<Json<Lead>, UpdateLeadErr> {
    if let Err(err) = patch.validate() {
        tracing::info!(error = %err, "lead update rejected by validation");
        return Err(UpdateLeadErr::InvalidRequest(err));
    }

    let lead = state.store.update(id, user.0.id, patch).await?;

    Ok(Json(lead))
}
