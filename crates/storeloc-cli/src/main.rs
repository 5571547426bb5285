mod collect;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::collect::{run_collect, CollectError, CollectOptions};

#[derive(Debug, Parser)]
#[command(name = "storeloc")]
#[command(about = "Extract store locations from a retailer sitemap and print them as JSON")]
struct Cli {
    /// Print per-store progress to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Sitemap XML file listing the store pages.
    #[arg(long, value_name = "PATH")]
    sitemap: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = storeloc_core::load_app_config()?;
    if let Some(path) = cli.sitemap {
        config.sitemap_path = path;
    }
    init_tracing(&config.log_level, cli.verbose)?;

    let options = CollectOptions::from_config(&config, cli.verbose);
    match run_collect(&options, &mut std::io::stdout(), &mut std::io::stderr()).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(CollectError::SitemapMissing { path }) => {
            eprintln!("Error: Sitemap file '{}' not found.", path.display());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Logs go to stderr; stdout is reserved for the JSON document.
fn init_tracing(log_level: &str, verbose: bool) -> anyhow::Result<()> {
    let default_directives = if verbose {
        "warn,storeloc_cli=debug,storeloc_scraper=debug".to_string()
    } else {
        log_level.to_string()
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_directives))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
