use anyhow::Context;
pub use prospect_env::Environment;

pub struct Config {
    /// port number of service
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// The connection URL for the Postgres database this application should
    /// use. Absent means the service runs on the in-memory fallback store.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;

        let database_url = std::env::var("DATABASE_URL").ok();

        let environment = Environment::new_or_prod();

        Ok(Config {
            port,
            environment,
            database_url,
        })
    }

    #[cfg(test)]
    pub fn new_testing() -> Self {
        Config {
            port: 0,
            environment: Environment::Local,
            database_url: None,
        }
    }
}
