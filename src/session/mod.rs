// Public API - what other modules can use
pub use calculator::{ScoreCalculator, StandardScoreCalculator};
pub use errors::SessionError;
pub use handlers::{get_player_best_score, get_player_sessions, get_ranking, health, record_session};
pub use models::{NewSessionRecord, SessionMetrics, SessionRecord};
pub use repository::{InMemorySessionStore, PostgresSessionStore, SessionStore};
pub use service::{SessionService, DEFAULT_RANKING_LIMIT};
pub use types::{BestScoreResponse, RecordSessionRequest};

// Internal modules
pub mod calculator;
mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
