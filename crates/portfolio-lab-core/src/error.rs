use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioLabError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PortfolioLabError {
    fn from(e: serde_json::Error) -> Self {
        PortfolioLabError::SerializationError(e.to_string())
    }
}
