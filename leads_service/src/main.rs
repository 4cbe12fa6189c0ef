mod api;
mod config;
mod constants;

use std::sync::Arc;

use anyhow::Context;
use config::{Config, Environment};
use lead_store::{MemoryLeadStore, PgLeadStore};
use prospect_auth::session::SessionValidationArgs;
use prospect_entrypoint::ProspectEntrypoint;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::api::context::AppState;

async fn connect_to_database(config: &Config, database_url: &str) -> anyhow::Result<PgPool> {
    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (1, 25),
        Environment::Local => (1, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("could not connect to db")?;
    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ProspectEntrypoint::default().init();

    let config = Config::from_env().context("expected to be able to generate config")?;
    let session =
        SessionValidationArgs::from_env().context("expected session validation config")?;

    // The store is chosen once at startup and injected; there is no
    // degraded half-connected mode.
    let state = match config.database_url.clone() {
        Some(database_url) => {
            let db = connect_to_database(&config, &database_url).await?;
            lead_store::MIGRATOR
                .run(&db)
                .await
                .context("could not apply migrations")?;
            AppState::new(Arc::new(config), Arc::new(PgLeadStore::new(db)), session)
        }
        None => {
            tracing::warn!(
                "DATABASE_URL is not set, running on the in-memory fallback store; \
                 nothing will survive a restart"
            );
            AppState::new(Arc::new(config), Arc::new(MemoryLeadStore::new()), session)
        }
    };

    api::setup_and_serve(state).await?;
    Ok(())
}
