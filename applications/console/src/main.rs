/// vidplay - interactive video library console
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidplay_console::{build_controller, Console, ConsoleConfig};

#[derive(Parser)]
#[command(name = "vidplay")]
#[command(about = "Play, flag and organise videos from a fixed library", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VIDPLAY_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog file (text or JSON), overrides the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for PLAY_RANDOM
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ask which search result to play
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load(cli.config.as_deref())?;
    let replaced_catalog = cli.catalog.is_some() && config.catalog.path.is_some();
    if let Some(catalog) = cli.catalog {
        config.catalog.path = Some(catalog);
    }
    if let Some(seed) = cli.seed {
        config.playback.random_seed = Some(seed);
    }
    if cli.no_prompt {
        config.prompt.search_selection = false;
    }

    // Logs go to stderr; stdout belongs to the console
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if replaced_catalog {
        warn!("--catalog overrides the catalog path from configuration");
    }
    config.validate()?;

    let controller = build_controller(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(controller, stdin.lock(), stdout.lock())
        .with_search_prompt(config.prompt.search_selection);
    console.run()?;

    info!("Console closed");
    Ok(())
}
