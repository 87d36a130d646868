use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("response error ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("unable to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Migration {version} failed: {message}")]
    MigrationError { version: u32, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CrawlError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CrawlError::HttpError(_) => "Could not reach the upstream listing API".to_string(),
            CrawlError::UnexpectedStatus { status, .. } => {
                format!("Upstream listing API answered with status {}", status)
            }
            CrawlError::DecodeError(_) => "Upstream listing API returned an unexpected payload".to_string(),
            CrawlError::DatabaseError(_) => "Could not open or write the listings database".to_string(),
            CrawlError::IoError(e) => format!("Could not access a local file: {}", e),
            CrawlError::MigrationError { version, .. } => {
                format!("Database schema migration {} could not be applied", version)
            }
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CrawlError::HttpError(_) => "Check network connectivity; the provider is retried on the next scheduled run",
            CrawlError::UnexpectedStatus { .. } | CrawlError::DecodeError(_) => {
                "Verify the provider identifiers; the upstream schema may have changed"
            }
            CrawlError::DatabaseError(_) | CrawlError::IoError(_) => {
                "Check that the database and configuration paths exist and are accessible"
            }
            CrawlError::MigrationError { .. } => {
                "Inspect the database with the sqlite3 shell and compare PRAGMA user_version"
            }
            CrawlError::UrlError(_)
            | CrawlError::ConfigError { .. }
            | CrawlError::ConfigValidationError { .. }
            | CrawlError::InvalidConfigValueError { .. } => "Fix the provider configuration file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
