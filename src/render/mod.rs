//! Render driver: one output document per (record, language).
//!
//! Iterates records in load order and languages in configured order, feeds
//! each resolved field set to the template, and writes
//! `<id>-<language>.html` into the output directory. Failures stop the run
//! at the first occurrence; there is no continue-on-error mode.

pub mod funcs;

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde_json::Value;

use crate::error::{RenderError, RenderResult};
use crate::logs::log_info;
use crate::resolve::resolve_fields;

/// Renders records through a single template into an output directory.
pub struct Renderer {
    env: Environment<'static>,
    template_name: String,
    out_dir: PathBuf,
}

impl Renderer {
    /// Load the template file and set up the environment with the helper
    /// functions installed. Template parse failure is fatal here, before
    /// any record is touched.
    pub fn from_template_file(
        template: &Path,
        asset_dir: Option<PathBuf>,
        out_dir: PathBuf,
    ) -> RenderResult<Self> {
        let source = fs::read_to_string(template).map_err(|e| RenderError::TemplateRead {
            path: template.to_path_buf(),
            source: e,
        })?;
        let template_name = template
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template.html".to_string());

        let mut env = Environment::new();
        funcs::register(&mut env, asset_dir);
        env.add_template_owned(template_name.clone(), source)?;

        Ok(Self {
            env,
            template_name,
            out_dir,
        })
    }

    /// Render every (record, language) pair, in nested iteration order.
    ///
    /// Any pre-existing output file of the same name is removed before the
    /// new one is written. Returns the number of documents written.
    pub fn render_all(&self, records: &[Value], languages: &[String]) -> RenderResult<usize> {
        let template = self.env.get_template(&self.template_name)?;
        let mut written = 0;

        for (row, record) in records.iter().enumerate() {
            let Some(fields) = record.as_object() else {
                // The loader only ever produces objects.
                continue;
            };
            let id = fields
                .get("id")
                .and_then(Value::as_str)
                .ok_or(RenderError::MissingId { row })?;

            for language in languages {
                let filename = format!("{id}-{language}.html");
                log_info(format!("generating doc {row} {id} {language} {filename}"));

                let resolved = resolve_fields(fields, id, language, languages);
                let rendered = template.render(&resolved)?;

                let target = self.out_dir.join(&filename);
                // Remove-then-write: no append, no backup.
                fs::remove_file(&target).ok();
                fs::write(&target, rendered).map_err(|e| RenderError::WriteFailed {
                    path: target.clone(),
                    source: e,
                })?;
                written += 1;
            }
        }

        Ok(written)
    }
}
