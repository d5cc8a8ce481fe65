use super::IEventRepo;
use crate::repos::shared::query_structs::FindEventsResult;
use chrono::{DateTime, Utc};
use eventhub_domain::{Event, EventQuery, ID};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    city: String,
    title: String,
    date: DateTime<Utc>,
    image_url: String,
    venue: String,
}

impl From<EventRaw> for Event {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            city: e.city,
            title: e.title,
            date: e.date,
            image_url: e.image_url,
            venue: e.venue,
        }
    }
}

// Unset filters are bound as NULL and match everything
const QUERY_FILTER: &str = r#"
    ($1::text IS NULL OR position(lower($1) in lower(e.title)) > 0) AND
    ($2::text IS NULL OR lower(e.city) = lower($2))
"#;

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events(event_uid, city, title, date, image_url, venue)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.city)
        .bind(&e.title)
        .bind(e.date)
        .bind(&e.image_url)
        .bind(&e.venue)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        let event: Option<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event.map(|e| e.into()))
    }

    async fn find_by_query(&self, query: &EventQuery) -> anyhow::Result<FindEventsResult> {
        let (total_events,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM events AS e WHERE {}",
            QUERY_FILTER
        ))
        .bind(&query.search)
        .bind(&query.city)
        .fetch_one(&self.pool)
        .await?;

        let events: Vec<EventRaw> = sqlx::query_as(&format!(
            r#"
            SELECT * FROM events AS e
            WHERE {}
            ORDER BY e.date, e.event_uid
            LIMIT $3 OFFSET $4
            "#,
            QUERY_FILTER
        ))
        .bind(&query.search)
        .bind(&query.city)
        .bind(query.page.limit())
        .bind(query.page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(FindEventsResult {
            events: events.into_iter().map(|e| e.into()).collect(),
            total_events,
        })
    }

    async fn find_cities(&self) -> anyhow::Result<Vec<String>> {
        let cities: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT ON (lower(e.city)) e.city FROM events AS e
            ORDER BY lower(e.city), e.city
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cities.into_iter().map(|(city,)| city).collect())
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        let event: Option<EventRaw> = sqlx::query_as(
            r#"
            DELETE FROM events AS e
            WHERE e.event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event.map(|e| e.into()))
    }
}
