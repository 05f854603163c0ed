//! docblock — reformat documentation comment blocks.
//!
//! Two modes, like any filter:
//!
//! - **stdin mode**: `docblock < comment.txt` prints the canonical block
//! - **file mode**: `docblock -o out/ comments/*.txt` writes one file per input

use anyhow::{bail, Context, Result};
use clap::Parser;
use docblock::{create_renderer, DocBlock, DocBlockFields, RenderOptions, SourceComment};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "docblock",
    about = "Parse documentation comment blocks and render them canonically"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Input kind: comment (default) or json field set
    #[arg(short = 'i', long, default_value = "comment")]
    input: String,

    /// Output format: comment (default) or json
    #[arg(short = 'f', long, default_value = "comment")]
    format: String,

    /// Wrap descriptions at this many columns
    #[arg(short = 'w', long, default_value_t = 80, allow_negative_numbers = true)]
    width: i64,

    /// Keep descriptions on unwrapped lines
    #[arg(long)]
    no_wrap: bool,

    /// Prefix every emitted line with this indentation
    #[arg(long, default_value = "")]
    indent: String,

    /// Use CRLF line endings
    #[arg(long)]
    crlf: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_wrap_width(self.width)
            .with_word_wrap(!self.no_wrap)
            .with_indentation(self.indent.clone())
            .with_line_feed(if self.crlf { "\r\n" } else { "\n" })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docblock=warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one block from stdin, write the rendering to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let block = load(&cli.input, &input, "<stdin>")?.unwrap_or_default();
    let renderer = create_renderer(&cli.format, cli.render_options())?;
    print!("{}", renderer.render(&block)?);
    Ok(())
}

/// file mode: render each input into the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = create_renderer(&cli.format, cli.render_options())?;
    let ext = renderer.file_extension();

    for path in expand_globs(&cli.files)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let source = path.to_string_lossy().to_string();

        let block = match load(&cli.input, &content, &source) {
            Ok(Some(block)) => block,
            Ok(None) => {
                tracing::warn!("skipping {}: no doc comment", path.display());
                continue;
            }
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(&source), ext));
        fs::write(&out_path, renderer.render(&block)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Turn input text into a block according to the `--input` kind.
fn load(kind: &str, content: &str, source: &str) -> Result<Option<DocBlock>> {
    match kind {
        "comment" => Ok(DocBlock::from_source(&SourceComment::new(content, source, 1))),
        "json" => {
            let fields: DocBlockFields = serde_json::from_str(content)
                .with_context(|| format!("invalid field set in {}", source))?;
            Ok(Some(DocBlock::from_fields(fields)))
        }
        _ => bail!("unknown input kind: {}. Use comment or json", kind),
    }
}

/// Expand glob patterns into a list of real file paths.
/// Bare directories contribute their regular files (non-recursive).
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            files.extend(entries.flatten().map(|e| e.path()).filter(|p| p.is_file()));
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "comments/Foo.txt" → "Foo", "Foo.docblock.json" → "Foo.docblock"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(source);
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => filename.to_string(),
    }
}
