use anyhow::Context;
use clap::Parser;
use cpl_core::{catalog, export, Config, Source, SourceBatch};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cpl",
    about = "Card partner listings — combine scraped payloads into one canonical CSV"
)]
struct Cli {
    /// Directory of saved payloads: <source>.<ext>, or <source>/ with one
    /// file per fetched page.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated subset of sources to run (canonical order is kept
    /// regardless of the order given here).
    #[arg(long, value_delimiter = ',')]
    sources: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.paths.data_dir.clone());
    let output = cli.out.unwrap_or_else(|| config.paths.output.clone());
    let selected = selected_sources(&cli.sources)?;

    let mut batches = Vec::new();
    for source in selected {
        let payloads = load_payloads(&data_dir, source)
            .with_context(|| format!("reading payloads for {source}"))?;
        if payloads.is_empty() {
            tracing::warn!(source = %source, dir = %data_dir.display(), "no payload files found");
            batches.push(SourceBatch::empty(source));
            continue;
        }
        match cpl_sources::run_source(source, &payloads, &config) {
            Ok(batch) => batches.push(batch),
            Err(err) => {
                // One broken source must not block the rest.
                tracing::error!(source = %source, error = %err, "source failed, continuing");
                batches.push(SourceBatch::empty(source));
            }
        }
    }

    let catalog = catalog::combine(batches);
    for count in &catalog.counts {
        tracing::info!(
            source = %count.source,
            emitted = count.emitted,
            dropped = count.dropped,
            "source totals"
        );
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = fs::File::create(&output)
        .with_context(|| format!("creating {}", output.display()))?;
    export::write_csv(BufWriter::new(file), &catalog.records)?;

    tracing::info!(
        records = catalog.len(),
        dropped = catalog.total_dropped(),
        output = %output.display(),
        "catalog written"
    );
    Ok(())
}

/// Resolve the `--sources` flag to canonical order; empty means all.
fn selected_sources(names: &[String]) -> anyhow::Result<Vec<Source>> {
    if names.is_empty() {
        return Ok(Source::ALL.to_vec());
    }
    let mut wanted = Vec::with_capacity(names.len());
    for name in names {
        let source: Source = name
            .parse()
            .with_context(|| format!("--sources value {name:?}"))?;
        wanted.push(source);
    }
    Ok(Source::ALL.into_iter().filter(|s| wanted.contains(s)).collect())
}

/// Payloads for one source: every file in `<data_dir>/<source>/` in name
/// order (paginated sources), or the single `<data_dir>/<source>.<ext>`.
fn load_payloads(data_dir: &Path, source: Source) -> anyhow::Result<Vec<String>> {
    let page_dir = data_dir.join(source.as_str());
    if page_dir.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(&page_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        return paths
            .iter()
            .map(|path| {
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            })
            .collect();
    }
    for ext in ["json", "html", "js", "txt"] {
        let path = data_dir.join(format!("{}.{ext}", source.as_str()));
        if path.is_file() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            return Ok(vec![text]);
        }
    }
    Ok(Vec::new())
}
