use super::map_sqlx;
use crate::domain::article::GroupId;
use crate::domain::errors::DomainResult;
use crate::domain::portlet::{PortletPreferences, PortletPreferencesRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresPortletPreferencesRepository {
    pool: PgPool,
}

impl PostgresPortletPreferencesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortletPreferencesRepository for PostgresPortletPreferencesRepository {
    async fn find(&self, group_id: GroupId, portlet_id: &str) -> DomainResult<PortletPreferences> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT name, value FROM portlet_preferences WHERE group_id = $1 AND portlet_id = $2",
        )
        .bind(i64::from(group_id))
        .bind(portlet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(PortletPreferences::from_values(rows))
    }

    async fn store(
        &self,
        group_id: GroupId,
        portlet_id: &str,
        preferences: &PortletPreferences,
    ) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for (name, value) in preferences.values() {
            sqlx::query(
                "INSERT INTO portlet_preferences (group_id, portlet_id, name, value)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (group_id, portlet_id, name) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(i64::from(group_id))
            .bind(portlet_id)
            .bind(name)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        tracing::debug!(group_id = %group_id, portlet_id, "portlet preferences stored");
        Ok(())
    }
}
