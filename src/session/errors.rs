use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl SessionError {
    /// Client-side failures are not worth retrying; store failures may be transient
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }
}
