//! Error types for the rendering pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`FetchError`] - source retrieval errors (HTTP or local file)
//! - [`CsvError`] - CSV loading errors
//! - [`RenderError`] - template and output errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. Every error is fatal:
//! nothing is retried, and `main` reports the message once and exits
//! non-zero.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Source Fetch Errors
// =============================================================================

/// Errors while retrieving the CSV source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (transport level).
    #[error("Download failed for '{url}': {source}")]
    RequestFailed {
        url: String,
        source: reqwest::Error,
    },

    /// HTTP request completed with a status other than 200 OK.
    #[error("Download failed for '{url}': {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Local file could not be read.
    #[error("Could not read CSV file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
}

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// Errors during CSV loading.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Malformed delimited text (unterminated quote, bad record).
    #[error("Invalid CSV: {0}")]
    Malformed(#[from] csv::Error),

    /// A data row has more cells than the header has columns.
    #[error("Invalid CSV: no header for column {column} in row {row}")]
    UnexpectedColumn { row: usize, column: usize },
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors during template rendering and output writing.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file could not be read.
    #[error("Could not read template '{path}': {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template parse or execution failure.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// A record has no `id` field.
    #[error("No id given for record {row}")]
    MissingId { row: usize },

    /// Output file could not be written.
    #[error("Could not write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the error type returned by [`crate::pipeline::run`]. It wraps
/// all lower-level errors; the binary surfaces it once and exits.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source retrieval error.
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// CSV loading error.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// Rendering error.
    #[error("{0}")]
    Render(#[from] RenderError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for CSV loading operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::UnexpectedColumn { row: 3, column: 4 };
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("column 4"));
        assert!(pipeline_err.to_string().contains("row 3"));

        // RenderError -> PipelineError
        let render_err = RenderError::MissingId { row: 0 };
        let pipeline_err: PipelineError = render_err.into();
        assert!(pipeline_err.to_string().contains("No id"));
    }

    #[test]
    fn test_fetch_error_format() {
        let err = FetchError::FileRead {
            path: "missing.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.csv"));
        assert!(msg.contains("not found"));
    }
}
