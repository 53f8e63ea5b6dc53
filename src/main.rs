// src/main.rs
//
// Headless driver: builds one session and prints a filtered listing.
//
// Usage: moviehub [TITLE] [MIN_RATING]

use anyhow::{anyhow, Context};

use moviehub::application::commands::list_movies;
use moviehub::application::dto::FilterDto;
use moviehub::{AppState, StoreConfig};

fn main() -> anyhow::Result<()> {
    // 1. LOGGING (reads RUST_LOG env var)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // 2. CONFIGURATION
    let config = StoreConfig::from_env().context("failed to load store configuration")?;
    log::info!("MovieHub starting with {:?}", config);

    // 3. SESSION
    let state = AppState::from_config(config);

    // 4. QUERY
    let mut args = std::env::args().skip(1);
    let filter = FilterDto {
        title: args.next().unwrap_or_default(),
        min_rating: args.next().unwrap_or_default(),
    };

    let listing = list_movies(&state, filter).map_err(|e| anyhow!(e))?;
    println!("{}", serde_json::to_string_pretty(&listing)?);

    Ok(())
}
