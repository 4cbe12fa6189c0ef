#![deny(missing_docs)]
//! Standardized initialization for prospect binaries, so every entrypoint
//! gets the same dotenv, panic, and tracing behaviour.

use prospect_env::Environment;
use tracing_subscriber::EnvFilter;

/// Initialization options for a prospect binary
#[derive(Debug)]
pub struct ProspectEntrypoint {
    env: Environment,
}

impl Default for ProspectEntrypoint {
    fn default() -> Self {
        ProspectEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [ProspectEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

impl ProspectEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            // Humans read local logs
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(env_filter())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            // The log pipeline reads deployed logs
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(env_filter())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
