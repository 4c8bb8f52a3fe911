use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use preview_app::load_config;
use preview_engine::{render_document, DocumentKind, PreviewAssets};
use preview_logging::{preview_info, LogDestination};

/// One-shot render of a source file into a self-contained preview document.
#[derive(Debug, Parser)]
#[command(name = "preview_app", version)]
struct Args {
    /// Source file to preview.
    input: PathBuf,
    /// Directory holding markdown.css, marked.js and markdown-view.js.
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Where to write the preview document (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Language identifier override; defaults from the file extension.
    #[arg(long)]
    language: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = load_config(&cwd);

    preview_logging::initialize(if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    let assets_dir = args.assets.or(config.assets_dir).context(
        "no assets directory; pass --assets or set assets_dir in .preview_app.ron",
    )?;
    let assets = PreviewAssets::load_from_dir(&assets_dir).context("preview assets unavailable")?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let kind = match args.language.as_deref() {
        Some(id) => DocumentKind::from_language_id(Some(id)),
        None => kind_from_extension(&args.input),
    };

    let html = match kind {
        DocumentKind::Markdown => render_document(&assets, &text),
        DocumentKind::Html => text,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
            preview_info!("Wrote preview document to {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

fn kind_from_extension(path: &Path) -> DocumentKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("md") | Some("markdown") => DocumentKind::Markdown,
        _ => DocumentKind::Html,
    }
}
