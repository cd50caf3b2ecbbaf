//! Error types for memo operations.
//!
//! Storage failures and missing rows are the only errors the data-access
//! layer produces. Malformed client input is rejected before it reaches
//! this crate.

use thiserror::Error;

/// Result type alias for memo operations.
pub type MemoResult<T> = Result<T, MemoError>;

/// Main error type for all memo operations.
#[derive(Error, Debug)]
pub enum MemoError {
    /// No live memo matches the requested id.
    #[error("{message}")]
    NotFound {
        message: String,
        code: ErrorCode,
        memo_id: Option<i64>,
    },

    /// Database operation failed.
    #[error("Database error: {message}")]
    Database {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A stored value could not be decoded.
    #[error("Parse error: {message}")]
    Parse { message: String, code: ErrorCode },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Memo (MEMO_xxx)
    MemoNotFound,

    // Database (DB_xxx)
    DbConnectionFailed,
    DbOperationFailed,
    DbMigrationFailed,

    // Parse (PARSE_xxx)
    ParseInvalidTimestamp,

    // Configuration
    ConfigInvalid,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MemoNotFound => "MEMO_001",
            ErrorCode::DbConnectionFailed => "DB_001",
            ErrorCode::DbOperationFailed => "DB_002",
            ErrorCode::DbMigrationFailed => "DB_003",
            ErrorCode::ParseInvalidTimestamp => "PARSE_001",
            ErrorCode::ConfigInvalid => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl MemoError {
    /// Create a not found error.
    pub fn not_found(memo_id: i64) -> Self {
        Self::NotFound {
            message: format!("Memo with id '{}' not found", memo_id),
            code: ErrorCode::MemoNotFound,
            memo_id: Some(memo_id),
        }
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            code: ErrorCode::DbOperationFailed,
            source: None,
        }
    }

    /// Create a database connection error, keeping the engine error as source.
    pub fn connection(err: rusqlite::Error) -> Self {
        Self::Database {
            message: format!("Failed to open database: {}", err),
            code: ErrorCode::DbConnectionFailed,
            source: Some(Box::new(err)),
        }
    }

    /// Create a schema migration error.
    pub fn migration(err: rusqlite::Error) -> Self {
        Self::Database {
            message: format!("Failed to migrate schema: {}", err),
            code: ErrorCode::DbMigrationFailed,
            source: Some(Box::new(err)),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseInvalidTimestamp,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. } => *code,
            Self::Database { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::ConfigInvalid,
            Self::Io(_) => ErrorCode::Internal,
        }
    }

    /// Whether this error means the memo does not exist (or was deleted).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<rusqlite::Error> for MemoError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database {
            message: err.to_string(),
            code: ErrorCode::DbOperationFailed,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = MemoError::not_found(42);
        assert_eq!(err.code(), ErrorCode::MemoNotFound);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Memo with id '42' not found");
    }

    #[test]
    fn test_rusqlite_error_maps_to_database() {
        let err: MemoError = rusqlite::Error::InvalidQuery.into();
        assert_eq!(err.code(), ErrorCode::DbOperationFailed);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::MemoNotFound.as_str(), "MEMO_001");
        assert_eq!(ErrorCode::DbOperationFailed.as_str(), "DB_002");
    }
}
