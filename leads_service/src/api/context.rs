use std::sync::Arc;

use axum::extract::FromRef;
use lead_store::{Storage, UserStorage};
use prospect_auth::session::SessionValidationArgs;

use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The store chosen at startup: Postgres, or the in-memory fallback
    pub store: Arc<dyn Storage>,
    /// The same store, narrowed to the user-lookup surface the session
    /// middleware needs
    pub users: Arc<dyn UserStorage>,
    pub session: SessionValidationArgs,
}

impl AppState {
    pub fn new<S: Storage>(
        config: Arc<Config>,
        store: Arc<S>,
        session: SessionValidationArgs,
    ) -> Self {
        Self {
            users: store.clone(),
            store,
            config,
            session,
        }
    }
}
