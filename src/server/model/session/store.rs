//! Session store backend selected at startup.

use std::fmt;

use async_trait::async_trait;
use tower_sessions::{
    session::{Id, Record},
    session_store, MemoryStore, SessionStore,
};
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

/// Server-side session storage.
///
/// Sessions live in process memory unless a Valkey/Redis URL is configured, in which case they
/// survive restarts and can be shared between instances.
#[derive(Clone)]
pub enum SessionBackend {
    /// In-process store, lost on restart.
    Memory(MemoryStore),
    /// Valkey/Redis backed store.
    Redis(RedisStore<Pool>),
}

impl fmt::Debug for SessionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory(store) => f.debug_tuple("Memory").field(store).finish(),
            Self::Redis(_) => f.write_str("Redis"),
        }
    }
}

#[async_trait]
impl SessionStore for SessionBackend {
    async fn create(&self, session_record: &mut Record) -> session_store::Result<()> {
        match self {
            Self::Memory(store) => store.create(session_record).await,
            Self::Redis(store) => store.create(session_record).await,
        }
    }

    async fn save(&self, session_record: &Record) -> session_store::Result<()> {
        match self {
            Self::Memory(store) => store.save(session_record).await,
            Self::Redis(store) => store.save(session_record).await,
        }
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        match self {
            Self::Memory(store) => store.load(session_id).await,
            Self::Redis(store) => store.load(session_id).await,
        }
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        match self {
            Self::Memory(store) => store.delete(session_id).await,
            Self::Redis(store) => store.delete(session_id).await,
        }
    }
}
