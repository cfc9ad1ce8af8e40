//! # Polydoc - localized document rendering from CSV data
//!
//! Polydoc turns a CSV file (local or fetched over HTTP) into one rendered
//! HTML document per row and configured language. Language-suffixed columns
//! (`title-de`, `title-en`) are resolved into a flat field set per language
//! and fed to a [`minijinja`] template.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ CSV source  │────▶│   Parser    │────▶│  Resolver   │────▶│  <id>-<lang> │
//! │ (http/file) │     │ (auto-enc)  │     │ (per lang)  │     │    .html     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polydoc::{run, RenderOptions};
//!
//! let mut options = RenderOptions::new("catalog.csv", "out", "template.html");
//! options.languages = vec!["de".into(), "en".into(), "fr".into()];
//! let summary = run(&options)?;
//! println!("Wrote {} documents", summary.documents_written);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`fetch`] - Source retrieval (HTTP or local file)
//! - [`parser`] - CSV loading with encoding auto-detection
//! - [`resolve`] - Per-language field resolution
//! - [`render`] - Render driver and template helper functions
//! - [`pipeline`] - High-level orchestration

// Core modules
pub mod error;
pub mod logs;

// Source retrieval
pub mod fetch;

// Loading
pub mod parser;

// Resolution
pub mod resolve;

// Rendering
pub mod render;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError, CsvResult, FetchError, FetchResult, PipelineError, PipelineResult, RenderError,
    RenderResult,
};

// =============================================================================
// Re-exports - Fetch
// =============================================================================

pub use fetch::fetch_source;

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use parser::{decode_content, detect_encoding, load_bytes, load_str, LoadResult};

// =============================================================================
// Re-exports - Resolution
// =============================================================================

pub use resolve::resolve_fields;

// =============================================================================
// Re-exports - Rendering
// =============================================================================

pub use render::Renderer;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{run, RenderOptions, RenderSummary};
