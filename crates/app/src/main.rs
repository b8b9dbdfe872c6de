//! EcoTrace - on-device carbon footprint tracker
//!
//! Main entry point: initializes logging, loads configuration and wires
//! the application context.

mod context;
mod notifier;

use ecotrace_domain::Config;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::context::AppContext;

fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env and config loading
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    let config = ecotrace_infra::config::load().unwrap_or_else(|err| {
        warn!(error = %err, "no usable configuration found, using defaults");
        Config::default()
    });

    let context = AppContext::new(config)?;

    let store = &context.store;
    info!(
        activities = store.activities().len(),
        achievements = store.achievements().len(),
        total_emissions_kg = store.total_emissions(),
        points = store.user_profile().points,
        "EcoTrace store ready"
    );

    Ok(())
}
