use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session::SessionMessageStore;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_secs(1800);

type SlotKey = (String, String);

struct Slot {
    errors: BTreeSet<String>,
    messages: BTreeSet<String>,
    expires_at: Instant,
}

/// Process-local session messages, used when no Redis URL is configured.
///
/// Slots expire `ttl` after their last write, mirroring the Redis store.
/// Expired slots are swept on every write.
pub struct InMemorySessionMessageStore {
    slots: Mutex<HashMap<SlotKey, Slot>>,
    ttl: Duration,
}

impl Default for InMemorySessionMessageStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }
}

impl InMemorySessionMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn slots(&self) -> ApplicationResult<MutexGuard<'_, HashMap<SlotKey, Slot>>> {
        self.slots
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }

    fn record<F>(&self, session_id: &str, portlet_id: &str, apply: F) -> ApplicationResult<()>
    where
        F: FnOnce(&mut Slot),
    {
        let now = Instant::now();
        let expires_at = now.checked_add(self.ttl).unwrap_or(now);
        let mut guard = self.slots()?;
        guard.retain(|_, slot| slot.expires_at > now);

        let slot = guard
            .entry((session_id.to_string(), portlet_id.to_string()))
            .or_insert_with(|| Slot {
                errors: BTreeSet::new(),
                messages: BTreeSet::new(),
                expires_at,
            });
        slot.expires_at = expires_at;
        apply(slot);
        Ok(())
    }

    fn read<F>(&self, session_id: &str, portlet_id: &str, pick: F) -> ApplicationResult<Vec<String>>
    where
        F: Fn(&Slot) -> &BTreeSet<String>,
    {
        let now = Instant::now();
        let guard = self.slots()?;
        Ok(guard
            .get(&(session_id.to_string(), portlet_id.to_string()))
            .filter(|slot| slot.expires_at > now)
            .map(|slot| pick(slot).iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Number of live slots.
    pub fn len(&self) -> ApplicationResult<usize> {
        let now = Instant::now();
        let guard = self.slots()?;
        Ok(guard.values().filter(|slot| slot.expires_at > now).count())
    }

    pub fn is_empty(&self) -> ApplicationResult<bool> {
        self.len().map(|len| len == 0)
    }
}

#[async_trait]
impl SessionMessageStore for InMemorySessionMessageStore {
    async fn add_error(
        &self,
        session_id: &str,
        portlet_id: &str,
        key: &str,
    ) -> ApplicationResult<()> {
        self.record(session_id, portlet_id, |slot| {
            slot.errors.insert(key.to_string());
        })
    }

    async fn errors(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<Vec<String>> {
        self.read(session_id, portlet_id, |slot| &slot.errors)
    }

    async fn add_message(
        &self,
        session_id: &str,
        portlet_id: &str,
        key: &str,
    ) -> ApplicationResult<()> {
        self.record(session_id, portlet_id, |slot| {
            slot.messages.insert(key.to_string());
        })
    }

    async fn messages(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<Vec<String>> {
        self.read(session_id, portlet_id, |slot| &slot.messages)
    }

    async fn clear(&self, session_id: &str, portlet_id: &str) -> ApplicationResult<()> {
        let mut guard = self.slots()?;
        guard.remove(&(session_id.to_string(), portlet_id.to_string()));
        Ok(())
    }
}
