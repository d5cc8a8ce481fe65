mod config;
mod repos;

pub use config::Config;
pub use repos::{FindEventsResult, IEventRepo, ISavedEventRepo, Repos};
use std::future::Future;
use tracing::info;

#[derive(Clone)]
pub struct EventhubContext {
    pub repos: Repos,
    pub config: Config,
}

impl EventhubContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.database_url {
            Some(connection_string) => Repos::create_postgres(connection_string).await?,
            None => {
                info!("Using in memory repositories");
                Repos::create_inmemory()
            }
        };
        Ok(Self { repos, config })
    }

    pub fn create_inmemory(config: Config) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config,
        }
    }

    /// Runs a store operation, failing it if the store does not answer
    /// within `Config::store_timeout`
    pub async fn store<T, F>(&self, operation: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match tokio::time::timeout(self.config.store_timeout, operation).await {
            Ok(res) => res,
            Err(_) => Err(anyhow::Error::msg(format!(
                "Store did not respond within {:?}",
                self.config.store_timeout
            ))),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<EventhubContext> {
    EventhubContext::create(Config::new()).await
}
