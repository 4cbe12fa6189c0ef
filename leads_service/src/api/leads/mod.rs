use axum::{routing::get, Router};

use super::context::AppState;

pub mod create;
pub mod delete;
pub mod get_by_id;
pub mod list;
pub mod update;

/// Protected procedures: every handler requires a resolved user via
/// [`prospect_middleware::extract::AuthedUser`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::handler).post(create::handler))
        .route(
            "/:id",
            get(get_by_id::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
}
