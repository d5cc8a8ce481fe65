use super::ISavedEventRepo;
use eventhub_domain::ID;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresSavedEventRepo {
    pool: PgPool,
}

impl PostgresSavedEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_uuids(event_ids: &[ID]) -> Vec<Uuid> {
    event_ids.iter().map(|id| *id.inner_ref()).collect()
}

#[async_trait::async_trait]
impl ISavedEventRepo for PostgresSavedEventRepo {
    async fn insert_many(&self, user_id: &str, event_ids: &[ID]) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO saved_events(user_id, event_uid)
            SELECT $1, ids.event_uid
            FROM unnest($2::uuid[]) WITH ORDINALITY AS ids(event_uid, ord)
            ORDER BY ids.ord
            ON CONFLICT (user_id, event_uid) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(to_uuids(event_ids))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_many(&self, user_id: &str, event_ids: &[ID]) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM saved_events AS s
            WHERE s.user_id = $1 AND
            s.event_uid = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(to_uuids(event_ids))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<ID>> {
        let event_ids: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT s.event_uid FROM saved_events AS s
            WHERE s.user_id = $1
            ORDER BY s.saved_seq
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(event_ids.into_iter().map(|(id,)| id.into()).collect())
    }
}
