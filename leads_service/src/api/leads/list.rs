use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lead_store::{Lead, StoreError};
use model::ErrorResponse;
use prospect_middleware::extract::AuthedUser;
use serde::Deserialize;
use thiserror::Error;
use utoipa::IntoParams;

use crate::api::context::AppState;

#[derive(Debug, Error)]
pub enum ListLeadsErr {
    #[error("An unknown error has occurred")]
    StoreError(#[from] StoreError),
}

impl IntoResponse for ListLeadsErr {
    fn into_response(self) -> Response {
        tracing::error!(
            error = ?self,
            error_type = "ListLeadsErr",
            "Internal server error"
        );
        let message = self.to_string();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { message: &message }),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListLeadsQuery {
    /// Case-insensitive substring matched against name and company
    #[serde(default)]
    pub filter: String,
}

/// All of the caller's leads, in insertion order, optionally filtered.
#[utoipa::path(
        get,
        tag = "leads",
        operation_id = "leads_list",
        path = "/api/leads",
        params(ListLeadsQuery),
        responses(
            (status = 200, body = [Lead]),
            (status = 401, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn handler(
    State(state): State<AppState>,
    user: AuthedUser,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<Vec<Lead>>, ListLeadsErr> {
    let leads = state.store.list_for_user(user.0.id).await?;

    let filter = query.filter.trim().to_lowercase();
    if filter.is_empty() {
        return Ok(Json(leads));
    }

    let leads = leads
        .into_iter()
        .filter(|lead| {
            let haystack = format!("{} {}", lead.name, lead.company).to_lowercase();
            haystack.contains(&filter)
        })
        .collect();

    Ok(Json(leads))
}
