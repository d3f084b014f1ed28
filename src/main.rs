//! Headless Match Ten runner (default binary).
//!
//! Plays a few rounds automatically, records the session score and prints the
//! tier's leaderboard. Configuration comes from the environment; see
//! [`PlayConfig::from_env`] and [`StoreConfig::from_env`].

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use match_ten::core::{EntropyRng, RoundGenerator};
use match_ten::play::{autoplay, PlayConfig};
use match_ten::store::{ScoreStore, StoreConfig};

fn main() -> Result<()> {
    init_tracing()?;

    let play = PlayConfig::from_env();
    let store_config = StoreConfig::from_env();

    let mut generator = RoundGenerator::new(EntropyRng::new(play.seed));
    let mut scores = ScoreStore::new(store_config.open_store());

    let report = autoplay(&mut generator, &mut scores, play.difficulty, play.rounds);
    let tier = play.difficulty.display_name();

    println!(
        "{} challenge: won {}/{} rounds, score {}",
        tier, report.rounds_won, report.rounds_played, report.score
    );
    if report.fallback_rounds > 0 {
        println!("({} round(s) missed the target pair range)", report.fallback_rounds);
    }

    let leaderboard = report
        .leaderboard
        .unwrap_or_else(|| scores.get_scores(play.difficulty));
    println!(
        "Leaderboard ({}, {}):",
        tier,
        store_config.save_path.display()
    );
    if leaderboard.is_empty() {
        println!("  No scores yet");
    }
    for (rank, score) in leaderboard.iter().enumerate() {
        println!("  #{:<2} {}", rank + 1, score);
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("match_ten=info"))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}
