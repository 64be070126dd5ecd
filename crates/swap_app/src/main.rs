mod shell;

use std::sync::Arc;

use anyhow::Context;
use swap_engine::{ClientSettings, MarketClient};
use swap_logging::swap_info;

fn main() -> anyhow::Result<()> {
    shell::logging::initialize(shell::logging::LogDestination::from_env());

    let settings = ClientSettings::from_env().context("reading SWAP_* settings")?;
    swap_info!(
        "backend {} search {} index {}",
        settings.backend_url,
        settings.search_url,
        settings.search_index
    );
    let client = MarketClient::from_settings(&settings, Arc::new(shell::PrintNavigator))
        .context("building HTTP clients")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;
    runtime.block_on(shell::run(&client))?;
    Ok(())
}
