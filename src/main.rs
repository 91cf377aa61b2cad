//! docblock: render API docstrings as structured markdown pages.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `docblock < docstring.txt` parses one docstring and
//!   writes the page to stdout.
//! - **file mode**: `docblock -o docs/api symbols.json notes/*.txt` writes one
//!   page per symbol into the output directory.

use anyhow::{Context, Result};
use clap::Parser;
use docblock::config::Config;
use docblock::model::{Manifest, Symbol};
use docblock::parser::{self, NoReferences, ParserContext};
use docblock::render::{self, Renderer};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docblock",
    about = "Parse API docstrings into structured blocks and render them"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    /// `.json` files are symbol manifests; anything else is one docstring.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), table, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Configuration file. Defaults to ./docblock.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Symbol name used for the page heading in stdin mode
    #[arg(long, default_value = "docstring")]
    name: String,

    /// Log parser decisions to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let renderer = render::create_renderer(&cli.format, &config)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &config, renderer.as_ref());
    }

    file_mode(&cli, &config, renderer.as_ref())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// stdin mode: read one docstring from stdin, write the rendered page to stdout.
fn stdin_mode(cli: &Cli, config: &Config, renderer: &dyn Renderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let ctx = context(config);
    let info = parser::parse_text(&input, &cli.name, &ctx);
    print!("{}", renderer.render(&cli.name, &info)?);
    Ok(())
}

/// file mode: parse every input and write one page per symbol.
fn file_mode(cli: &Cli, config: &Config, renderer: &dyn Renderer) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let ext = renderer.file_extension();
    let mut written = 0usize;

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable input");
                continue;
            }
        };

        let mut ctx = context(config);
        let symbols = if is_manifest(path) {
            match serde_json::from_str::<Manifest>(&content) {
                Ok(manifest) => {
                    ctx.extra_docs = manifest.extra_docs;
                    ctx.reverse_index = manifest.reverse_index;
                    manifest.symbols
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping invalid manifest");
                    continue;
                }
            }
        } else {
            vec![Symbol {
                full_name: derive_output_name(path),
                doc: Some(content),
                ..Default::default()
            }]
        };

        for symbol in &symbols {
            let Some(file_name) = output_file_name(&symbol.full_name, ext) else {
                tracing::warn!(symbol = %symbol.full_name, "skipping symbol with unsafe output name");
                continue;
            };
            let info = parser::parse_docstring(symbol, &ctx);
            let page = match renderer.render(&symbol.full_name, &info) {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(symbol = %symbol.full_name, error = %e, "skipping unrenderable symbol");
                    continue;
                }
            };
            let out_path = output_dir.join(file_name);
            if let Err(e) = fs::write(&out_path, page) {
                tracing::warn!(path = %out_path.display(), error = %e, "failed to write page");
                continue;
            }
            written += 1;
        }
    }

    tracing::info!(pages = written, output = %output_dir.display(), "done");
    Ok(())
}

fn context(config: &Config) -> ParserContext<'static> {
    let mut ctx = ParserContext::new(&NoReferences);
    ctx.generated_sentinel = config.parse.generated_sentinel.clone();
    ctx
}

/// Page file name for a symbol.
///
/// Symbol names come from manifests and must stay inside the output
/// directory, so names with path separators or made only of dots are refused.
fn output_file_name(full_name: &str, ext: &str) -> Option<String> {
    let refused = full_name.contains(['/', '\\']) || full_name.split('.').all(str::is_empty);
    (!refused).then(|| format!("{}.{}", full_name, ext))
}

fn is_manifest(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// File extensions picked up when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &["json", "txt", "md"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            let before = files.len();
            for p in entries.flatten().map(|entry| entry.path()) {
                if !p.is_file() {
                    continue;
                }
                let ext = p.extension().and_then(|e| e.to_str()).unwrap_or_default();
                if SUPPORTED_EXTENSIONS.contains(&ext) {
                    files.push(p);
                } else {
                    tracing::debug!(path = %p.display(), "not a docstring or manifest, skipped");
                }
            }
            tracing::debug!(dir = %path.display(), found = files.len() - before, "scanned directory");
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the symbol name for a bare docstring file from its path.
/// "notes/tf.nn.relu.txt" → "tf.nn.relu"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
