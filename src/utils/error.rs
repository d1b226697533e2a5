use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream returned non-success status: {status}")]
    UpstreamStatus { status: u16 },

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl ServiceError {
    /// 給操作人員的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::HttpError(_) | ServiceError::UpstreamStatus { .. } => {
                "Check network connectivity and the --source-url endpoint"
            }
            ServiceError::DatabaseError(_)
            | ServiceError::StorageError { .. }
            | ServiceError::IoError(_) => {
                "Check that the --database path is writable and not locked by another process"
            }
            ServiceError::SerializationError(_) => {
                "The upstream payload did not match the expected country shape"
            }
            ServiceError::ConfigError { .. }
            | ServiceError::InvalidConfigValueError { .. }
            | ServiceError::ConfigValidationError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
