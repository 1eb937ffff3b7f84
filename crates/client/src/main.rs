//! Skirmish battle client binary.
//!
//! This binary is the composition root: it reads configuration from the
//! environment (and `.env`), installs logging, builds a [`Battle`] through the
//! runtime and prints every event as text on stdout. Logs go to stderr.
//!
//! # Environment
//!
//! - `SKIRMISH_DATA_DIR`: content directory (embedded data when unset)
//! - `SKIRMISH_ROSTER`: roster name (default `skirmish`)
//! - `SKIRMISH_SEED`: battle seed (random when unset)
//! - `SKIRMISH_MAX_ROUNDS`: round limit override
//! - `RUST_LOG`: log filter
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_ROSTER=duel SKIRMISH_SEED=42 cargo run -p skirmish-client
//! ```
mod format;

use anyhow::{Context, Result};
use skirmish_runtime::{Battle, RuntimeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    tracing::info!(roster = %config.roster, seed = ?config.seed, "starting skirmish");

    let mut battle = Battle::builder()
        .config(config)
        .load_content()
        .context("failed to load content")?
        .build()
        .context("failed to set up battle")?;

    for line in format::format_lineup(battle.field()) {
        println!("{line}");
    }
    while !battle.is_finished() {
        for event in battle.play_round()? {
            for line in format::format_event(&event, battle.field()) {
                println!("{line}");
            }
        }
    }
    println!("Seed: {}", battle.seed());

    Ok(())
}
