//! Polydoc CLI - Render localized HTML documents from CSV data
//!
//! # Main Command
//!
//! ```bash
//! polydoc render --csv catalog.csv --out dist --template doc.html
//! polydoc render --csv https://example.com/doc.csv --out dist \
//!     --template doc.html --languages de,en,fr --asset-dir assets
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! polydoc parse catalog.csv        # Just load the CSV and print JSON
//! ```

use clap::{Parser, Subcommand};
use polydoc::{fetch_source, load_bytes, run, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "polydoc")]
#[command(about = "Render localized HTML documents from CSV data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one HTML document per row and language
    Render {
        /// CSV source: a http(s) URL or a local file path
        #[arg(long, env = "POLYDOC_CSV")]
        csv: String,

        /// Output directory
        #[arg(long, env = "POLYDOC_OUT")]
        out: PathBuf,

        /// Template file
        #[arg(long, env = "POLYDOC_TEMPLATE")]
        template: PathBuf,

        /// Comma separated list of languages
        #[arg(long, default_value = "de,en", env = "POLYDOC_LANGUAGES")]
        languages: String,

        /// Asset directory for HasAsset lookups
        #[arg(long, env = "POLYDOC_ASSET_DIR")]
        asset_dir: Option<PathBuf>,

        /// CSV delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Load a CSV source and output its records as JSON
    Parse {
        /// CSV source: a http(s) URL or a local file path
        csv: String,

        /// CSV delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            csv,
            out,
            template,
            languages,
            asset_dir,
            delimiter,
        } => cmd_render(csv, out, template, &languages, asset_dir, delimiter),

        Commands::Parse {
            csv,
            delimiter,
            output,
        } => cmd_parse(&csv, delimiter, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_render(
    csv: String,
    out: PathBuf,
    template: PathBuf,
    languages: &str,
    asset_dir: Option<PathBuf>,
    delimiter: char,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = RenderOptions {
        languages: languages.split(',').map(str::to_string).collect(),
        source: csv,
        out_dir: out,
        template,
        asset_dir,
        delimiter,
    };

    let summary = run(&options)?;

    eprintln!(
        "✨ Done! {} rows × {} languages → {} documents in {}",
        summary.row_count,
        options.languages.len(),
        summary.documents_written,
        options.out_dir.display()
    );
    Ok(())
}

fn cmd_parse(
    csv: &str,
    delimiter: char,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Loading CSV: {}", csv);

    let bytes = fetch_source(csv)?;
    let result = load_bytes(&bytes, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Loaded {} records", result.records.len());

    let json = serde_json::to_string_pretty(&result.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
