use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use scoreboard::{
    session::NewSessionRecord, InMemorySessionStore, SessionError, SessionRecord, SessionStore,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Store whose backend is down: every call fails with a store error
pub struct UnavailableStore;

#[async_trait]
impl SessionStore for UnavailableStore {
    async fn insert(&self, _record: &NewSessionRecord) -> Result<SessionRecord, SessionError> {
        Err(SessionError::Store("database unavailable".to_string()))
    }

    async fn top_by_score(&self, _limit: usize) -> Result<Vec<SessionRecord>, SessionError> {
        Err(SessionError::Store("database unavailable".to_string()))
    }

    async fn by_player(&self, _player_name: &str) -> Result<Vec<SessionRecord>, SessionError> {
        Err(SessionError::Store("database unavailable".to_string()))
    }

    async fn best_score_for_player(
        &self,
        _player_name: &str,
    ) -> Result<Option<i32>, SessionError> {
        Err(SessionError::Store("database unavailable".to_string()))
    }
}

/// In-memory store that counts how often each operation is reached
#[derive(Default)]
pub struct CountingStore {
    inner: InMemorySessionStore,
    inserts: AtomicUsize,
    ranking_reads: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn ranking_reads(&self) -> usize {
        self.ranking_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for CountingStore {
    async fn insert(&self, record: &NewSessionRecord) -> Result<SessionRecord, SessionError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(record).await
    }

    async fn top_by_score(&self, limit: usize) -> Result<Vec<SessionRecord>, SessionError> {
        self.ranking_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.top_by_score(limit).await
    }

    async fn by_player(&self, player_name: &str) -> Result<Vec<SessionRecord>, SessionError> {
        self.inner.by_player(player_name).await
    }

    async fn best_score_for_player(
        &self,
        player_name: &str,
    ) -> Result<Option<i32>, SessionError> {
        self.inner.best_score_for_player(player_name).await
    }
}
