use utoipa::ToSchema;

/// A plain old json error response for use with axum.
#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct ErrorResponse<'a> {
    /// Message to explain failure
    pub message: &'a str,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct GenericSuccessResponse {
    /// Indicates if the request was successful
    pub success: bool,
}

impl Default for GenericSuccessResponse {
    fn default() -> Self {
        Self { success: true }
    }
}

/// Empty response is required due to custom fetch forcing `response.json()`
#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema, Default)]
pub struct EmptyResponse {}
