use anyhow::Context;
use routesync_runner::{RouteSync, load_config};

/// Environment variable naming the config file when no argument is given
const CONFIG_ENV: &str = "ROUTESYNC_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .with_context(|| format!("usage: routesync <config.json> (or set {})", CONFIG_ENV))?;

    let mut config =
        load_config(&config_path).with_context(|| format!("loading {}", config_path))?;
    config.apply_env_overrides();

    let sync = RouteSync::from_config(&config)?;
    let snapshot = sync.run_once().await?;

    log::info!("Built snapshot with {} routes", snapshot.len());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
