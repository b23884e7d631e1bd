use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    calculator::{ScoreCalculator, StandardScoreCalculator},
    models::{validate_player_name, NewSessionRecord, SessionRecord},
    repository::SessionStore,
    types::RecordSessionRequest,
    SessionError,
};

/// Ranking size used when the caller gives no limit or a non-positive one
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// Maps a caller-supplied ranking limit onto a usable one
pub fn resolve_ranking_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(limit) if limit > 0 => usize::try_from(limit).unwrap_or(usize::MAX),
        _ => DEFAULT_RANKING_LIMIT,
    }
}

/// Service for recording game sessions and querying the leaderboard.
///
/// Holds no state of its own; everything lives in the injected store.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    calculator: Arc<dyn ScoreCalculator>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            calculator: Arc::new(StandardScoreCalculator::new()),
        }
    }

    pub fn with_calculator(mut self, calculator: Arc<dyn ScoreCalculator>) -> Self {
        self.calculator = calculator;
        self
    }

    /// Validates, scores and persists a finished session.
    ///
    /// The score is always computed here; nothing reaches the store unless
    /// validation passed and the score is final.
    #[instrument(skip(self, request), fields(player_name = %request.player_name))]
    pub async fn record_session(
        &self,
        request: RecordSessionRequest,
    ) -> Result<SessionRecord, SessionError> {
        let metrics = request.metrics();
        if let Err(err) = validate_player_name(&request.player_name).and(metrics.validate()) {
            warn!(error = %err, "Rejected session");
            return Err(err);
        }

        let total_score = self.calculator.calculate(&metrics);
        let new_record = NewSessionRecord {
            player_name: request.player_name,
            metrics,
            total_score,
        };

        let record = self.store.insert(&new_record).await.map_err(|err| {
            warn!(error = %err, "Failed to persist session");
            err
        })?;

        info!(id = record.id, total_score = record.total_score, "Session recorded");
        Ok(record)
    }

    /// Highest scoring sessions, ties in insertion order
    #[instrument(skip(self))]
    pub async fn get_ranking(&self, limit: Option<i64>) -> Result<Vec<SessionRecord>, SessionError> {
        let limit = resolve_ranking_limit(limit);
        let ranking = self.store.top_by_score(limit).await?;

        info!(limit, count = ranking.len(), "Ranking retrieved");
        Ok(ranking)
    }

    /// Every session of one player (exact name match), most recent first
    #[instrument(skip(self))]
    pub async fn get_player_sessions(
        &self,
        player_name: &str,
    ) -> Result<Vec<SessionRecord>, SessionError> {
        let sessions = self.store.by_player(player_name).await?;

        info!(count = sessions.len(), "Player sessions retrieved");
        Ok(sessions)
    }

    #[instrument(skip(self))]
    pub async fn get_player_best_score(
        &self,
        player_name: &str,
    ) -> Result<Option<i32>, SessionError> {
        self.store.best_score_for_player(player_name).await
    }
}
