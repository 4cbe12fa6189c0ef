use axum::{
    routing::{get, post},
    Router,
};

use super::context::AppState;

pub mod logout;
pub mod me;

/// Public procedures: callable with or without a resolved user.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me::handler))
        .route("/logout", post(logout::handler))
}
