use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_store::{CreateLeadRequest, Lead, LeadValidationError, StoreError};
use model::ErrorResponse;
use prospect_middleware::extract::AuthedUser;
use thiserror::Error;

use crate::api::context::AppState;

#[derive(Debug, Error)]
pub enum CreateLeadErr {
    #[error("{0}")]
    InvalidRequest(#[from] LeadValidationError),
    #[error("An unknown error has occurred")]
    StoreError(#[from] StoreError),
}

impl IntoResponse for CreateLeadErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateLeadErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CreateLeadErr::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreateLeadErr",
                "Internal server error"
            );
        }

        let message = self.to_string();
        (status_code, Json(ErrorResponse { message: &message })).into_response()
    }
}

/// Create a lead owned by the caller. The owner always comes from the
/// authenticated context, never from the payload.
#[utoipa::path(
        post,
        tag = "leads",
        operation_id = "leads_create",
        path = "/api/leads",
        request_body = CreateLeadRequest,
        responses(
            (status = 201, body = Lead),
            (status = 400, body = ErrorResponse),
            (status = 401, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(state, user, request), fields(user_id = %user.0.id))]
pub async fn handler(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(request): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<Lead>), CreateLeadErr> {
    if let Err(err) = request.validate() {
        tracing::info!(error = %err, "lead creation rejected by validation");
        return Err(CreateLeadErr::InvalidRequest(err));
    }

    let lead = state.store.create(request.into_new_lead(user.0.id)).await?;

    tracing::info!(lead_id = %lead.id, "created lead");

    Ok((StatusCode::CREATED, Json(lead)))
}
