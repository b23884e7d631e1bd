use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

use super::models::{NewSessionRecord, SessionRecord};
use super::SessionError;

/// Trait for session record persistence.
///
/// Records are append-only: the store assigns `id` and `played_at` on insert
/// and never changes a record afterwards.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, record: &NewSessionRecord) -> Result<SessionRecord, SessionError>;

    /// Up to `limit` records ordered by score descending, then id ascending
    async fn top_by_score(&self, limit: usize) -> Result<Vec<SessionRecord>, SessionError>;

    /// All records for an exact player name, newest first
    async fn by_player(&self, player_name: &str) -> Result<Vec<SessionRecord>, SessionError>;

    async fn best_score_for_player(&self, player_name: &str)
        -> Result<Option<i32>, SessionError>;
}

struct SessionTable {
    records: Vec<SessionRecord>,
    next_id: i64,
}

/// In-memory implementation of SessionStore for development and testing
///
/// Data is lost when the application restarts. A single mutex guards the
/// table, so each insert is atomic and readers never see a partial record.
pub struct InMemorySessionStore {
    table: Mutex<SessionTable>,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    /// Creates a new empty in-memory store; ids start at 1
    pub fn new() -> Self {
        Self {
            table: Mutex::new(SessionTable {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the current number of stored records
    pub fn record_count(&self) -> usize {
        self.table
            .lock()
            .map(|table| table.records.len())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionTable>, SessionError> {
        self.table.lock().map_err(|_| {
            warn!("In-memory session table lock poisoned");
            SessionError::Store("session table unavailable".to_string())
        })
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    #[instrument(skip(self, record), fields(player_name = %record.player_name))]
    async fn insert(&self, record: &NewSessionRecord) -> Result<SessionRecord, SessionError> {
        let mut table = self.lock()?;

        let stored = SessionRecord::from_new(table.next_id, Utc::now(), record);
        table.next_id += 1;
        table.records.push(stored.clone());

        debug!(id = stored.id, total_score = stored.total_score, "Session stored in memory");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn top_by_score(&self, limit: usize) -> Result<Vec<SessionRecord>, SessionError> {
        let mut ranking = self.lock()?.records.clone();

        ranking.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.id.cmp(&b.id))
        });
        ranking.truncate(limit);

        debug!(count = ranking.len(), "Ranking read from memory");
        Ok(ranking)
    }

    #[instrument(skip(self))]
    async fn by_player(&self, player_name: &str) -> Result<Vec<SessionRecord>, SessionError> {
        let mut sessions: Vec<SessionRecord> = self
            .lock()?
            .records
            .iter()
            .filter(|record| record.player_name == player_name)
            .cloned()
            .collect();

        sessions.sort_by(|a, b| {
            b.played_at
                .cmp(&a.played_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        debug!(count = sessions.len(), "Player sessions read from memory");
        Ok(sessions)
    }

    #[instrument(skip(self))]
    async fn best_score_for_player(
        &self,
        player_name: &str,
    ) -> Result<Option<i32>, SessionError> {
        let best = self
            .lock()?
            .records
            .iter()
            .filter(|record| record.player_name == player_name)
            .map(|record| record.total_score)
            .max();

        Ok(best)
    }
}

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS session_records (
    id               BIGSERIAL PRIMARY KEY,
    player_name      VARCHAR(50) NOT NULL,
    lives_spent      INTEGER NOT NULL DEFAULT 0,
    gems_collected   INTEGER NOT NULL DEFAULT 0,
    enemies_defeated INTEGER NOT NULL DEFAULT 0,
    damage_taken     INTEGER NOT NULL DEFAULT 0,
    jumps_made       INTEGER NOT NULL DEFAULT 0,
    shots_fired      INTEGER NOT NULL DEFAULT 0,
    total_deaths     INTEGER NOT NULL DEFAULT 0,
    session_duration REAL NOT NULL DEFAULT 0,
    total_score      INTEGER NOT NULL DEFAULT 0,
    played_at        TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

const CREATE_SCORE_INDEX_SQL: &str = "CREATE INDEX IF NOT EXISTS session_records_score_idx \
     ON session_records (total_score DESC, id ASC)";

const CREATE_PLAYER_INDEX_SQL: &str = "CREATE INDEX IF NOT EXISTS session_records_player_idx \
     ON session_records (player_name, played_at DESC)";

const RECORD_COLUMNS: &str = "id, player_name, lives_spent, gems_collected, enemies_defeated, \
     damage_taken, jumps_made, shots_fired, total_deaths, session_duration, total_score, played_at";

fn store_error(e: sqlx::Error) -> SessionError {
    warn!(error = %e, "Session store query failed");
    SessionError::Store(e.to_string())
}

/// PostgreSQL implementation of SessionStore
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the session table and its indexes when missing
    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<(), SessionError> {
        for statement in [
            CREATE_TABLE_SQL,
            CREATE_SCORE_INDEX_SQL,
            CREATE_PLAYER_INDEX_SQL,
        ] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(store_error)?;
        }

        debug!("Session schema ready");
        Ok(())
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    #[instrument(skip(self, record), fields(player_name = %record.player_name))]
    async fn insert(&self, record: &NewSessionRecord) -> Result<SessionRecord, SessionError> {
        let metrics = record.metrics;
        let sql = format!(
            "INSERT INTO session_records (player_name, lives_spent, gems_collected, \
             enemies_defeated, damage_taken, jumps_made, shots_fired, total_deaths, \
             session_duration, total_score) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
            RECORD_COLUMNS
        );

        let stored = sqlx::query_as::<_, SessionRecord>(&sql)
            .bind(&record.player_name)
            .bind(metrics.lives_spent)
            .bind(metrics.gems_collected)
            .bind(metrics.enemies_defeated)
            .bind(metrics.damage_taken)
            .bind(metrics.jumps_made)
            .bind(metrics.shots_fired)
            .bind(metrics.total_deaths)
            .bind(metrics.session_duration)
            .bind(record.total_score)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        debug!(id = stored.id, total_score = stored.total_score, "Session stored in database");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn top_by_score(&self, limit: usize) -> Result<Vec<SessionRecord>, SessionError> {
        let sql = format!(
            "SELECT {} FROM session_records ORDER BY total_score DESC, id ASC LIMIT $1",
            RECORD_COLUMNS
        );

        let ranking = sqlx::query_as::<_, SessionRecord>(&sql)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        debug!(count = ranking.len(), "Ranking read from database");
        Ok(ranking)
    }

    #[instrument(skip(self))]
    async fn by_player(&self, player_name: &str) -> Result<Vec<SessionRecord>, SessionError> {
        let sql = format!(
            "SELECT {} FROM session_records WHERE player_name = $1 \
             ORDER BY played_at DESC, id DESC",
            RECORD_COLUMNS
        );

        let sessions = sqlx::query_as::<_, SessionRecord>(&sql)
            .bind(player_name)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        debug!(count = sessions.len(), "Player sessions read from database");
        Ok(sessions)
    }

    #[instrument(skip(self))]
    async fn best_score_for_player(
        &self,
        player_name: &str,
    ) -> Result<Option<i32>, SessionError> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(total_score) FROM session_records WHERE player_name = $1",
        )
        .bind(player_name)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)
    }
}
