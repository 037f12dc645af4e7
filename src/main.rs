use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url_shortener::cli::Cli;
use url_shortener::config::Config;
use url_shortener::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// `RUST_LOG` wins over the level implied by `--debug`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
