// ============================================================
// CSV PARSER
// ============================================================
// Turn uploaded bytes into a RawSampleTable, with size limits,
// encoding fallback and delimiter detection

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::WINDOWS_1252;
use tracing::{debug, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::water::{IngestConfig, RawSampleTable, SampleCell, SampleRow};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV parser producing sample tables
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    config: IngestConfig,
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Set custom delimiter, disabling detection
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = Some(delimiter);
        self
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Accept only `.csv` file names (extension compared case-insensitively)
    pub fn validate_filename(filename: &str) -> Result<()> {
        let is_csv = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Ok(())
        } else {
            Err(AppError::InvalidFileType(filename.to_string()))
        }
    }

    /// Parse a CSV file from disk
    pub fn parse_file(&self, path: &Path) -> Result<RawSampleTable> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.parse_bytes(&bytes)
    }

    /// Parse an uploaded payload
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<RawSampleTable> {
        if bytes.len() > self.config.max_file_size {
            warn!(
                "Rejected payload of {} bytes (limit {})",
                bytes.len(),
                self.config.max_file_size
            );
            return Err(AppError::FileTooLarge {
                size: bytes.len(),
                limit: self.config.max_file_size,
            });
        }

        let content = Self::decode(bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<RawSampleTable> {
        if content.trim().is_empty() {
            return Err(AppError::EmptyTable);
        }

        let delimiter = self
            .config
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(content, self.config.delimiter_sample_lines));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        // Records with only empty cells are kept; they fail numeric coercion later
        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            rows.push(Self::parse_row(index, &headers, &record));
        }

        if rows.is_empty() {
            return Err(AppError::EmptyTable);
        }

        debug!(
            "Parsed {} rows with {} columns (delimiter {:?})",
            rows.len(),
            headers.len(),
            delimiter as char
        );

        Ok(RawSampleTable::new(headers, rows))
    }

    /// UTF-8 when valid, Windows-1252 otherwise
    fn decode(bytes: &[u8]) -> String {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        match std::str::from_utf8(bytes) {
            Ok(content) => content.to_string(),
            Err(_) => {
                let (content, _, _) = WINDOWS_1252.decode(bytes);
                content.into_owned()
            }
        }
    }

    /// Align a record with the headers; missing trailing cells read as empty
    fn parse_row(index: usize, headers: &[String], record: &StringRecord) -> SampleRow {
        let cells = (0..headers.len())
            .map(|idx| SampleCell::new(record.get(idx).unwrap_or("")))
            .collect();

        SampleRow::new(index, cells)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str, sample_lines: usize) -> u8 {
        const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

        let sample: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(sample_lines)
            .collect();

        CANDIDATES
            .iter()
            .map(|&delimiter| (delimiter, Self::delimiter_score(&sample, delimiter)))
            .filter(|&(_, score)| score > 0.0)
            .fold(None, |best: Option<(u8, f32)>, candidate| match best {
                Some((_, best_score)) if best_score >= candidate.1 => best,
                _ => Some(candidate),
            })
            .map(|(delimiter, _)| delimiter)
            .unwrap_or(b',')
    }

    /// Mean occurrences per line damped by their spread; 0.0 when absent
    fn delimiter_score(lines: &[&str], delimiter: u8) -> f32 {
        if lines.is_empty() {
            return 0.0;
        }

        let counts: Vec<f32> = lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count() as f32)
            .collect();
        let n = counts.len() as f32;

        let mean = counts.iter().sum::<f32>() / n;
        let spread = (counts.iter().map(|c| (c - mean).powi(2)).sum::<f32>() / n).sqrt();

        mean / (1.0 + spread)
    }
}
