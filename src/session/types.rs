use serde::{Deserialize, Serialize};

use super::models::SessionMetrics;

/// Request body for recording a finished game session.
///
/// Every metric is optional and defaults to zero. There is deliberately no
/// field for `id`, `playedAt` or `totalScore`: clients may send them, but
/// they are dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordSessionRequest {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub lives_spent: Option<i32>,
    #[serde(default)]
    pub gems_collected: Option<i32>,
    #[serde(default)]
    pub enemies_defeated: Option<i32>,
    #[serde(default)]
    pub damage_taken: Option<i32>,
    #[serde(default)]
    pub jumps_made: Option<i32>,
    #[serde(default)]
    pub shots_fired: Option<i32>,
    #[serde(default)]
    pub total_deaths: Option<i32>,
    #[serde(default)]
    pub session_duration: Option<f32>,
}

impl RecordSessionRequest {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Raw metrics with absent values defaulted to zero
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            lives_spent: self.lives_spent.unwrap_or(0),
            gems_collected: self.gems_collected.unwrap_or(0),
            enemies_defeated: self.enemies_defeated.unwrap_or(0),
            damage_taken: self.damage_taken.unwrap_or(0),
            jumps_made: self.jumps_made.unwrap_or(0),
            shots_fired: self.shots_fired.unwrap_or(0),
            total_deaths: self.total_deaths.unwrap_or(0),
            session_duration: self.session_duration.unwrap_or(0.0),
        }
    }
}

/// Query string for the ranking endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingQuery {
    pub limit: Option<i64>,
}

/// Payload returned by the best-score endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestScoreResponse {
    pub player_name: String,
    pub best_score: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let request: RecordSessionRequest =
            serde_json::from_str(r#"{"playerName": "Alice", "gemsCollected": 3}"#).unwrap();

        let metrics = request.metrics();
        assert_eq!(metrics.gems_collected, 3);
        assert_eq!(metrics.lives_spent, 0);
        assert_eq!(metrics.session_duration, 0.0);
    }

    #[test]
    fn test_null_fields_default_to_zero() {
        let request: RecordSessionRequest =
            serde_json::from_str(r#"{"playerName": "Alice", "livesSpent": null}"#).unwrap();

        assert_eq!(request.metrics().lives_spent, 0);
    }

    #[test]
    fn test_server_assigned_fields_are_dropped() {
        let request: RecordSessionRequest = serde_json::from_str(
            r#"{"playerName": "Alice", "totalScore": 999999, "id": 42, "playedAt": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(request, RecordSessionRequest::new("Alice"));
    }

    #[test]
    fn test_missing_player_name_is_empty() {
        let request: RecordSessionRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.player_name.is_empty());
    }
}
