use std::path::PathBuf;

use anyhow::Context;
use beautycart::config::Config;
use clap::Parser;

/// Terminal storefront demo: browse the catalog, open a product, adjust
/// session quantities.
#[derive(Debug, Parser)]
#[command(name = "beautycart", version, about)]
struct Cli {
    /// Path to a TOML config file. Defaults to the platform config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the event-loop tick interval in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    beautycart::trace::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.ui.tick_rate_ms = tick_rate_ms.max(1);
    }

    tracing::info!(products = config.catalog().len(), "starting ui");
    beautycart::ui::run(config)?;
    Ok(())
}
