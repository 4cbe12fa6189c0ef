use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use lead_store::UserStorage;
use prospect_auth::{
    headers::extract_session_token_from_request_headers,
    session::{validate_session_token, SessionValidationArgs},
};

/// State for the [`handler`] middleware.
#[derive(Clone)]
pub struct AttachUserArgs {
    pub session: SessionValidationArgs,
    pub users: Arc<dyn UserStorage>,
}

/// Attempts to resolve the calling user and attach them to the request
/// context. Resolution never rejects a request: a missing, invalid, or
/// expired credential, or an unknown subject, all leave the context empty
/// and the route decides whether that is acceptable.
pub async fn handler(State(args): State<AttachUserArgs>, mut req: Request, next: Next) -> Response {
    let token = match extract_session_token_from_request_headers(req.headers()) {
        Ok(token) => token,
        Err(e) => {
            tracing::trace!(error=?e, "unable to get session token");
            return next.run(req).await;
        }
    };

    let claims = match validate_session_token(&token, &args.session) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::trace!(error=?e, "session token rejected");
            return next.run(req).await;
        }
    };

    match args.users.user_by_open_id(&claims.sub).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
        }
        Ok(None) => {
            tracing::trace!(open_id = %claims.sub, "no user for session subject");
        }
        Err(e) => {
            // Resolution stays tolerant even here; the protected routes
            // will reject the empty context.
            tracing::error!(error = ?e, "user lookup failed during session resolution");
        }
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body, http::Request, middleware::from_fn_with_state, routing::get, Extension, Router,
    };
    use http_body_util::BodyExt;
    use lead_store::{MemoryLeadStore, User};
    use prospect_auth::session::encode_session_token;
    use tower::ServiceExt;

    async fn whoami(user: Option<Extension<User>>) -> String {
        user.map(|Extension(user)| user.open_id)
            .unwrap_or_else(|| "anonymous".to_string())
    }

    fn api() -> (Router, SessionValidationArgs) {
        let session = SessionValidationArgs::new_testing();
        let args = AttachUserArgs {
            session: session.clone(),
            users: Arc::new(MemoryLeadStore::new()),
        };
        let router = Router::new()
            .route("/whoami", get(whoami))
            .layer(from_fn_with_state(args, handler));
        (router, session)
    }

    async fn body_string(router: Router, request: Request<Body>) -> String {
        let response = router.oneshot(request).await.unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn resolves_a_valid_session() {
        let (api, session) = api();
        let token = encode_session_token("open-7", 3600, &session);

        let request = Request::builder()
            .uri("/whoami")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        assert_eq!(body_string(api, request).await, "open-7");
    }

    #[tokio::test]
    async fn missing_credentials_leave_the_context_empty() {
        let (api, _) = api();

        let request = Request::builder()
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();

        assert_eq!(body_string(api, request).await, "anonymous");
    }

    #[tokio::test]
    async fn an_expired_session_leaves_the_context_empty() {
        let (api, session) = api();
        let token = encode_session_token("open-7", -60, &session);

        let request = Request::builder()
            .uri("/whoami")
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        assert_eq!(body_string(api, request).await, "anonymous");
    }
}
