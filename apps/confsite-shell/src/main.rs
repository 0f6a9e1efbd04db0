//! Confsite Shell
//!
//! Prints the conference countdown to the terminal until the conference
//! opens or Ctrl-C is pressed. Reads its config from `CONFSITE_CONFIG`
//! (TOML, or JSON for `.json` paths) and falls back to the built-in site.

use std::sync::Arc;

use confsite_core::{next_deadline, Clock, CountdownEngine, SiteConfig, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> confsite_core::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("CONFSITE_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading site config");
            SiteConfig::load(&path)?
        }
        Err(_) => SiteConfig::default(),
    };
    let name = config.conference.name.clone();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    if let Some(date) = next_deadline(&config.dates, clock.now()) {
        println!("Next up: {} ({})", date.title, date.display_range());
    }

    let now = clock.now();
    let pricing = if config.registration.is_early_bird(now) {
        "early bird"
    } else {
        "regular"
    };
    for (tier, fee) in config.registration.fees_at(now) {
        println!("Registration, {} ({}): {}", tier, pricing, fee);
    }

    let engine = CountdownEngine::from_config(&config.conference, clock);
    let mut handle = engine.start();
    let mut ticks = handle.subscribe();

    loop {
        tokio::select! {
            changed = ticks.changed() => {
                if changed.is_err() {
                    break;
                }
                let tick = *ticks.borrow_and_update();
                if tick.elapsed {
                    println!("{} has started", name);
                    break;
                }
                println!("{} starts in {}", name, tick.remaining);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    handle.stop();
    handle.stopped().await;
    Ok(())
}
