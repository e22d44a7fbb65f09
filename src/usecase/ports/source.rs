use crate::domain::entities::cell::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Message(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Supplies the full row array for the grid.
pub trait RowSource: Send + Sync {
    fn fetch_rows(&self) -> Result<Vec<Row>, SourceError>;

    /// Human-readable origin, used in status messages.
    fn describe(&self) -> String;
}
