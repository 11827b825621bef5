use thiserror::Error as ThisError;

/// Store errors
#[derive(Debug, Clone, ThisError)]
pub enum StoreError {
    #[error("No member with ID {0}")]
    NotFound(String),
}
