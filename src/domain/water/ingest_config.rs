// ============================================================
// INGEST CONFIGURATION
// ============================================================
// Limits and parsing options for uploaded sample files

use serde::{Deserialize, Serialize};

/// Default upload limit: 10MB
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for sample file ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Maximum accepted payload size in bytes (default: 10MB)
    pub max_file_size: usize,

    /// Fixed delimiter; `None` detects it from the first lines
    pub delimiter: Option<u8>,

    /// Number of lines inspected for delimiter detection (default: 10)
    pub delimiter_sample_lines: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            delimiter: None,
            delimiter_sample_lines: 10,
        }
    }
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_file_size(mut self, max_file_size: usize) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size == 0 {
            return Err("max_file_size must be > 0".to_string());
        }
        if let Some(delimiter) = self.delimiter {
            if delimiter == b'"' || delimiter == b'\n' || delimiter == b'\r' {
                return Err(format!(
                    "delimiter {:?} is not usable",
                    delimiter as char
                ));
            }
        }
        if self.delimiter_sample_lines == 0 {
            return Err("delimiter_sample_lines must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = IngestConfig::default();
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let config = IngestConfig::new().with_max_file_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_quote_delimiter() {
        let config = IngestConfig::new().with_delimiter(b'"');
        assert!(config.validate().is_err());
        assert!(IngestConfig::new().with_delimiter(b';').validate().is_ok());
    }
}
