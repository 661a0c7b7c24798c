//! Error types for the DevComedy portfolio

use thiserror::Error;

/// Main error type for portfolio operations
///
/// None of these are fatal to the page. Callers log and fall back to a
/// default (catalog achievements, built-in jokes, in-memory storage).
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote request failed (joke feed, EmailJS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required configuration value is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    /// Contact form is missing a field
    #[error("Contact form incomplete: {0} is required")]
    IncompleteForm(&'static str),

    /// A message is already on its way
    #[error("A message is already being sent")]
    SendInProgress,
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::IncompleteForm("email");
        assert_eq!(format!("{}", err), "Contact form incomplete: email is required");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
