//! High-level pipeline API: fetch, load, render.
//!
//! This module combines all steps into one call. The source is loaded fully
//! into memory before any rendering begins; rendering then iterates records
//! and languages strictly in order, single-threaded. Any error aborts the
//! run at first occurrence — output files already written stay on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use polydoc::{run, RenderOptions};
//!
//! let options = RenderOptions::new("catalog.csv", "out", "template.html");
//! let summary = run(&options)?;
//! println!("Wrote {} documents", summary.documents_written);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::fetch::fetch_source;
use crate::logs::{log_info, log_success};
use crate::parser::load_bytes;
use crate::render::Renderer;

/// Options for a rendering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Configured languages, in iteration order.
    pub languages: Vec<String>,

    /// CSV source: a http(s) URL or a local file path.
    pub source: String,

    /// Output directory for the rendered documents.
    pub out_dir: PathBuf,

    /// Template file path.
    pub template: PathBuf,

    /// Asset directory for `HasAsset` lookups.
    pub asset_dir: Option<PathBuf>,

    /// CSV delimiter.
    pub delimiter: char,
}

impl RenderOptions {
    /// Options with the default languages (`de`, `en`) and delimiter (`,`).
    pub fn new(
        source: impl Into<String>,
        out_dir: impl Into<PathBuf>,
        template: impl Into<PathBuf>,
    ) -> Self {
        Self {
            languages: vec!["de".to_string(), "en".to_string()],
            source: source.into(),
            out_dir: out_dir.into(),
            template: template.into(),
            asset_dir: None,
            delimiter: ',',
        }
    }
}

/// Result of a complete rendering run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    /// Number of records loaded.
    pub row_count: usize,

    /// Column headers of the source.
    pub headers: Vec<String>,

    /// Detected source encoding.
    pub encoding: String,

    /// Number of documents written.
    pub documents_written: usize,
}

/// Run the full pipeline for the given options.
///
/// 1. Fetch the source (HTTP or file)
/// 2. Decode and load the records
/// 3. Render every (record, language) pair into the output directory
pub fn run(options: &RenderOptions) -> PipelineResult<RenderSummary> {
    log_info(format!("📖 Fetching source: {}", options.source));
    let bytes = fetch_source(&options.source)?;

    let loaded = load_bytes(&bytes, options.delimiter)?;
    log_success(format!("Detected encoding: {}", loaded.encoding));
    log_success(format!("Read {} rows", loaded.records.len()));
    log_info(format!("📋 Columns: {}", loaded.headers.join(", ")));
    log_info(format!("🌍 Languages: {}", options.languages.join(", ")));

    let renderer = Renderer::from_template_file(
        &options.template,
        options.asset_dir.clone(),
        options.out_dir.clone(),
    )?;
    let documents_written = renderer.render_all(&loaded.records, &options.languages)?;
    log_success(format!("Wrote {} documents", documents_written));

    Ok(RenderSummary {
        row_count: loaded.records.len(),
        headers: loaded.headers,
        encoding: loaded.encoding,
        documents_written,
    })
}
