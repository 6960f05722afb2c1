use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    /// Required columns absent after trimming and case folding, in request order
    MissingColumns(Vec<String>),
    /// No row carried a numeric value for every required column
    NoValidData,
    EmptyTable,
    FileTooLarge { size: usize, limit: usize },
    InvalidFileType(String),
    ParseError(String),
    ValidationError(String),
    ConfigError(String),
    IoError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingColumns(cols) => write!(
                f,
                "Missing required columns: {} (CSV must contain 'pH' and 'TDS' columns)",
                cols.join(", ")
            ),
            AppError::NoValidData => {
                write!(f, "No valid numeric data found in pH or TDS columns")
            }
            AppError::EmptyTable => write!(f, "CSV file is empty"),
            AppError::FileTooLarge { size, limit } => write!(
                f,
                "File too large ({} bytes). Maximum size is {}MB",
                size,
                limit / 1024 / 1024
            ),
            AppError::InvalidFileType(name) => write!(
                f,
                "Invalid file type for '{}'. Only CSV files are accepted.",
                name
            ),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_columns() {
        let err = AppError::MissingColumns(vec!["TDS".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("TDS"));
        assert!(!msg.starts_with("Missing required columns: pH"));
    }

    #[test]
    fn test_file_too_large_reports_megabytes() {
        let err = AppError::FileTooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert!(err.to_string().contains("10MB"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(AppError::from(io), AppError::IoError(_)));
    }
}
