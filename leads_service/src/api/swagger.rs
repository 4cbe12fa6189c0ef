use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
        paths(
            super::health::health_handler,
            super::auth::me::handler,
            super::auth::logout::handler,
            super::leads::list::handler,
            super::leads::get_by_id::handler,
            super::leads::create::handler,
            super::leads::update::handler,
            super::leads::delete::handler,
        ),
        components(
            schemas(
                lead_store::Lead,
                lead_store::LeadStatus,
                lead_store::LeadPatch,
                lead_store::CreateLeadRequest,
                lead_store::User,
                lead_store::Role,
                model::ErrorResponse,
                model::GenericSuccessResponse,
            ),
        ),
        tags(
            (name = "prospect leads service", description = "Lead enrichment dashboard backend")
        )
    )]
pub struct ApiDoc;
