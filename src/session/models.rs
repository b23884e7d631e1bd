use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::SessionError;

/// Maximum length of a player name, counted in characters
pub const MAX_PLAYER_NAME_LEN: usize = 50;

/// Raw play metrics reported by the game client for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetrics {
    pub lives_spent: i32,
    pub gems_collected: i32,
    pub enemies_defeated: i32,
    pub damage_taken: i32,
    pub jumps_made: i32,
    pub shots_fired: i32,
    pub total_deaths: i32,
    pub session_duration: f32, // seconds
}

impl SessionMetrics {
    /// Rejects negative counters and negative or non-finite durations
    pub fn validate(&self) -> Result<(), SessionError> {
        let counters = [
            ("livesSpent", self.lives_spent),
            ("gemsCollected", self.gems_collected),
            ("enemiesDefeated", self.enemies_defeated),
            ("damageTaken", self.damage_taken),
            ("jumpsMade", self.jumps_made),
            ("shotsFired", self.shots_fired),
            ("totalDeaths", self.total_deaths),
        ];

        if let Some((field, value)) = counters.iter().find(|(_, value)| *value < 0) {
            return Err(SessionError::Validation(format!(
                "{} must not be negative (got {})",
                field, value
            )));
        }

        if !self.session_duration.is_finite() || self.session_duration < 0.0 {
            return Err(SessionError::Validation(format!(
                "sessionDuration must be a non-negative number (got {})",
                self.session_duration
            )));
        }

        Ok(())
    }
}

/// Checks the player name is present and fits the column
pub fn validate_player_name(player_name: &str) -> Result<(), SessionError> {
    if player_name.is_empty() {
        return Err(SessionError::Validation(
            "playerName must not be empty".to_string(),
        ));
    }

    let length = player_name.chars().count();
    if length > MAX_PLAYER_NAME_LEN {
        return Err(SessionError::Validation(format!(
            "playerName must be at most {} characters (got {})",
            MAX_PLAYER_NAME_LEN, length
        )));
    }

    Ok(())
}

/// A validated, scored session that has not been persisted yet.
/// The store assigns `id` and `played_at` when inserting it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSessionRecord {
    pub player_name: String,
    pub metrics: SessionMetrics,
    pub total_score: i32,
}

/// Database model for the session_records table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: i64,
    pub player_name: String,
    pub lives_spent: i32,
    pub gems_collected: i32,
    pub enemies_defeated: i32,
    pub damage_taken: i32,
    pub jumps_made: i32,
    pub shots_fired: i32,
    pub total_deaths: i32,
    pub session_duration: f32,
    pub total_score: i32,
    pub played_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Builds the stored form of a new record with store-assigned identity
    pub fn from_new(id: i64, played_at: DateTime<Utc>, record: &NewSessionRecord) -> Self {
        let metrics = record.metrics;
        Self {
            id,
            player_name: record.player_name.clone(),
            lives_spent: metrics.lives_spent,
            gems_collected: metrics.gems_collected,
            enemies_defeated: metrics.enemies_defeated,
            damage_taken: metrics.damage_taken,
            jumps_made: metrics.jumps_made,
            shots_fired: metrics.shots_fired,
            total_deaths: metrics.total_deaths,
            session_duration: metrics.session_duration,
            total_score: record.total_score,
            played_at,
        }
    }

    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            lives_spent: self.lives_spent,
            gems_collected: self.gems_collected,
            enemies_defeated: self.enemies_defeated,
            damage_taken: self.damage_taken,
            jumps_made: self.jumps_made,
            shots_fired: self.shots_fired,
            total_deaths: self.total_deaths,
            session_duration: self.session_duration,
        }
    }
}
