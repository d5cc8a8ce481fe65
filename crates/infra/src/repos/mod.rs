mod event;
mod saved_event;
mod shared;

use event::{InMemoryEventRepo, PostgresEventRepo};
use saved_event::{InMemorySavedEventRepo, PostgresSavedEventRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

pub use event::IEventRepo;
pub use saved_event::ISavedEventRepo;
pub use shared::query_structs::*;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub saved_events: Arc<dyn ISavedEventRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            saved_events: Arc::new(PostgresSavedEventRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            saved_events: Arc::new(InMemorySavedEventRepo::new()),
        }
    }
}
