// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session::SessionMessageStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

/// Session messages kept in Redis sets that expire with the session.
#[derive(Clone)]
pub struct RedisSessionMessageStore {
    pool: Pool,
    ttl_secs: i64,
}

impl RedisSessionMessageStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0).
    pub fn from_url(url: &str, ttl_secs: u64) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            pool,
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn add_member(&self, key: String, member: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.sadd::<_, _, ()>(&key, member)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        conn.expire::<_, ()>(&key, self.ttl_secs)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn members(&self, key: String) -> ApplicationResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let mut members: Vec<String> = conn
            .smembers(key)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        members.sort();
        Ok(members)
    }
}

fn errors_key(session_id: &str, portlet_id: &str) -> String {
    format!("kb_session:{session_id}:{portlet_id}:errors")
}

fn messages_key(session_id: &str, portlet_id: &str) -> String {
    format!("kb_session:{session_id}:{portlet_id}:messages")
}

#[async_trait]
impl SessionMessageStore for RedisSessionMessageStore {
    async fn add_error(
        &self,
        session_id: &str,
        portlet_id: &str,
        key: &str,
    ) -> ApplicationResult<()> {
        self.add_member(errors_key(session_id, portlet_id), key).await
    }

    async fn errors(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<Vec<String>> {
        self.members(errors_key(session_id, portlet_id)).await
    }

    async fn add_message(
        &self,
        session_id: &str,
        portlet_id: &str,
        key: &str,
    ) -> ApplicationResult<()> {
        self.add_member(messages_key(session_id, portlet_id), key).await
    }

    async fn messages(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<Vec<String>> {
        self.members(messages_key(session_id, portlet_id)).await
    }

    async fn clear(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(vec![
            errors_key(session_id, portlet_id),
            messages_key(session_id, portlet_id),
        ])
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
