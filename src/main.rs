use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rat_cheese::config::{Args, GameConfig};
use rat_cheese::core::audio::{AudioSink, Bell, Muted};
use rat_cheese::game::{GameSession, RatCheeseRenderer, WordList};
use rat_cheese::Engine;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Settle configuration before touching the terminal
    let config = GameConfig::resolve(Args::parse()).context("loading configuration")?;
    let _guard = setup_logging(&config)?;

    // 2. Word list: a missing file falls back to the built-in words, an empty list is fatal
    let words = WordList::load_or_fallback(&config.words)
        .with_context(|| format!("loading word list {}", config.words.display()))?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let audio: Box<dyn AudioSink> = if config.sound { Box::new(Bell) } else { Box::new(Muted) };

    // 3. Play
    let session = GameSession::new(words, rng, audio);
    let terminal = ratatui::init();
    let result = Engine::new(session, RatCheeseRenderer).run(terminal).await;
    ratatui::restore();

    let score = result?;
    println!("Wins: {}  Losses: {}", score.wins, score.losses);
    Ok(())
}

/// File-only logging; stdout belongs to the game screen.
fn setup_logging(config: &GameConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(std::path::Path::new("."));
    let file_name = path.file_name().context("log file path has no file name")?;
    std::fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter {:?}", config.log_level))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(Some(guard))
}
