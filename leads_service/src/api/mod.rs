use anyhow::Context;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::constants::ORIGINS;

pub(crate) mod context;
mod auth;
mod health;
mod leads;
mod swagger;

use context::AppState;

pub async fn setup_and_serve(state: AppState) -> anyhow::Result<()> {
    let cors = cors_layer();

    let port = state.config.port;
    let app = api_router(state)
        .layer(cors.clone())
        .merge(health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("could not bind service port")?;

    tracing::info!("leads service is up and running on port {}", &port);

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

fn cors_layer() -> CorsLayer {
    // The dashboard sends the session cookie, so origins are enumerated
    // rather than wildcarded
    CorsLayer::new()
        .allow_credentials(true)
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE])
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(ORIGINS)
}

fn api_router(state: AppState) -> Router {
    let attach_args = prospect_middleware::auth::AttachUserArgs {
        session: state.session.clone(),
        users: state.users.clone(),
    };

    procedures_router()
        .layer(axum::middleware::from_fn_with_state(
            attach_args,
            prospect_middleware::auth::attach_user::handler,
        ))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

fn procedures_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/leads", leads::router())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::Router;
    use lead_store::{MemoryLeadStore, Role, User};
    use prospect_auth::session::SessionValidationArgs;
    use tower_cookies::CookieManagerLayer;

    use super::context::AppState;
    use crate::config::Config;

    pub fn test_state() -> AppState {
        AppState::new(
            Arc::new(Config::new_testing()),
            Arc::new(MemoryLeadStore::new()),
            SessionValidationArgs::new_testing(),
        )
    }

    /// The procedure surface with an already-resolved user, mirroring what
    /// the attach-user middleware does for a valid session.
    pub fn test_api_router_as(state: AppState, user: User) -> Router {
        super::procedures_router()
            .layer(axum::Extension(user))
            .layer(CookieManagerLayer::new())
            .with_state(state)
    }

    /// The procedure surface with no resolved user.
    pub fn test_api_router_anonymous(state: AppState) -> Router {
        super::procedures_router()
            .layer(CookieManagerLayer::new())
            .with_state(state)
    }

    pub fn test_user(id: i64) -> User {
        let now = chrono::Utc::now();
        User {
            id,
            open_id: format!("test-user-{id}"),
            name: Some("Test User".to_string()),
            email: Some("test@example.com".to_string()),
            login_method: Some("portal".to_string()),
            role: Role::User,
            created_at: now,
            updated_at: now,
            last_signed_in: now,
        }
    }
}
