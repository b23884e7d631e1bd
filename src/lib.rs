// Library crate for the scoreboard server
// This file exposes the public API for integration tests

pub mod config;
pub mod router;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use router::build_router;
pub use session::{
    InMemorySessionStore, PostgresSessionStore, RecordSessionRequest, SessionError,
    SessionRecord, SessionService, SessionStore,
};
pub use shared::{ApiResponse, AppError, AppState};
