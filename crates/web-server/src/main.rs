use dataset::DatasetCache;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use web_server::AppState;

// This main function is the entry point when running `cargo run -p web-server`.
// It loads `config.toml`, the dataset, and hands both to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = configuration::load_config(Path::new("config.toml"))?;
    let cache = DatasetCache::new();
    let dataset = cache.get_or_load(&settings.dataset.source()?)?;

    web_server::run_server(settings.server.addr, AppState::new(dataset, &settings)).await
}
