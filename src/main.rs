use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use photo_migrate::app::{self, AppConfig};

/// Copy user photos from the source store into the destination store
#[derive(Parser)]
#[command(name = "photo-migrate")]
#[command(about = "Copy user photos between two databases, matched by identification number", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the settings file (default: ./photo-migrate.toml)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose) {
        Ok(config) => config.with_config_path(cli.config),
        Err(e) => app::handle_fatal_error(e, cli.verbose),
    };
    app::init_logging(&config);

    info!("Starting photo migration...");
    match app::run(&config).await {
        Ok(report) => {
            if report.stats.failures() > 0 {
                info!(
                    "Photo migration finished with {} failed records",
                    report.stats.failures()
                );
            } else {
                info!("Photo migration finished.");
            }
        }
        Err(e) => app::handle_fatal_error(e, config.verbose),
    }
}
