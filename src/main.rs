use anyhow::Context;
use clap::Parser;
use facetshop::{config::CatalogConfig, Filter, SearchEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "facetshop", about = "Faceted search over a shirt catalog")]
struct Cli {
    /// Catalog TOML file. Defaults to ~/.config/facetshop/catalog.toml, or the
    /// built-in demo catalog if that does not exist.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restrict to this color (repeatable, matched by label).
    #[arg(long = "color", value_name = "LABEL")]
    colors: Vec<String>,

    /// Restrict to this size (repeatable, matched by label).
    #[arg(long = "size", value_name = "LABEL")]
    sizes: Vec<String>,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let (domains, items) = CatalogConfig::load_or_defaults(cli.config.as_deref())
        .context("loading catalog")?
        .into_parts()?;
    let engine = SearchEngine::new(&domains, &items)?;

    let mut filter = Filter::new();
    for label in &cli.colors {
        let color = domains
            .colors
            .find_by_label(label)
            .with_context(|| format!("unknown color {label:?}"))?;
        filter = filter.color(color.id);
    }
    for label in &cli.sizes {
        let size = domains
            .sizes
            .find_by_label(label)
            .with_context(|| format!("unknown size {label:?}"))?;
        filter = filter.size(size.id);
    }

    let result = engine.search(&filter);
    tracing::info!(matched = result.len(), "search finished");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
