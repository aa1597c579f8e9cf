use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod config;
mod scenario;

fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;

    // Persistent sink: error-and-above only. The guard keeps the writer
    // alive for the whole run.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log.file)?;
    let (error_sink, _guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "koshyk_catalog=debug,koshyk_cart=debug,koshyk_payment=debug,koshyk_cli=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(error_sink)
                .with_filter(LevelFilter::ERROR),
        )
        .init();

    tracing::info!("Starting koshyk");

    scenario::run(&config)
}
