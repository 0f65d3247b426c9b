use article_intake::config;
use article_intake::server;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Validating front door for the article summary workflow.
#[derive(Parser)]
#[command(name = "article-intake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Validate configuration, print the summary and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    tracing::info!("Starting Article Summarizer API v{}", env!("CARGO_PKG_VERSION"));

    server::run(config).await
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
