use diamondbot::sim::{SimConfig, run_tournament};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("diamondbot=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = SimConfig::from_env()?;
    info!(
        "Running {} match(es) from seed {}: {} cascade bot(s), {} random bot(s) on {}x{}",
        config.matches,
        config.seed,
        config.cascade_bots,
        config.random_bots,
        config.board_size,
        config.board_size
    );
    if let Some(folder) = &config.replays_folder {
        info!("Replays folder: {}", folder);
    }

    let summary = run_tournament(&config).await?;
    summary.log();

    Ok(())
}
