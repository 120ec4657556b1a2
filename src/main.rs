use analytics::{AnalyticsEngine, AnalyticsError, MapCenter};
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{DatasetSourceKind, LoggingSettings, Settings};
use dataset::{DatasetCache, RestaurantDataset};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_server::AppState;

mod render;

/// Exit code for a city that is not in the dataset.
const EXIT_UNKNOWN_CITY: u8 = 2;

/// The main entry point for the Restaurant Atlas application.
#[tokio::main]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Restaurant location analysis: city counts, per-city statistics and cuisine trends.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means built-in defaults.
    #[arg(short, long, global = true, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    /// Overrides `dataset.source` from the configuration.
    #[arg(long, global = true, value_enum)]
    dataset: Option<DatasetSourceKind>,

    /// Overrides `dataset.path` from the configuration (implies `--dataset file`).
    #[arg(long, global = true, value_name = "FILE")]
    dataset_path: Option<PathBuf>,

    /// Print the view as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the raw restaurant table.
    Raw,
    /// Number of restaurants per city, most first.
    Counts,
    /// List the cities that can be passed to `city`.
    Cities,
    /// Average rating, average price range and common cuisines for one city.
    City(CityArgs),
    /// Cuisine popularity across all cities.
    Cuisines,
    /// Price range and rating of every restaurant.
    Pairs,
    /// Map markers with per-city restaurant counts.
    Markers,
    /// Top cities, price/rating correlation and popular cuisines.
    Insights(InsightsArgs),
    /// Serve every view over a JSON HTTP API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct CityArgs {
    /// The city to summarize (case-sensitive, e.g. "Bangalore").
    name: String,
}

#[derive(Parser)]
struct InsightsArgs {
    /// How many top cities to list. Defaults to `insights.top_cities`.
    #[arg(long)]
    top: Option<usize>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind. Defaults to `server.addr`.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut settings = configuration::load_settings(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;
    apply_overrides(&mut settings, &cli);
    settings
        .validate()
        .with_context(|| format!("Invalid configuration in {:?}", cli.config))?;

    // Held until exit so buffered file logs are flushed.
    let _log_guard = init_tracing(&settings.logging)?;
    tracing::info!(config = ?cli.config, "Starting restaurant-atlas");

    let cache = DatasetCache::new();
    let dataset = cache.get_or_load(&settings.dataset.source()?)?;
    let engine = AnalyticsEngine::new();

    match cli.command {
        Commands::Raw => {
            let restaurants = dataset.restaurants();
            emit(cli.json, restaurants, || render::restaurants_table(restaurants).to_string())?;
        }
        Commands::Counts => {
            let counts = engine.citywise_counts(&dataset);
            emit(cli.json, &counts, || render::city_counts_table(&counts).to_string())?;
        }
        Commands::Cities => {
            let cities = dataset.cities();
            emit(cli.json, &cities, || render::cities_table(&cities).to_string())?;
        }
        Commands::City(args) => {
            return handle_city(&engine, &dataset, &args.name, cli.json);
        }
        Commands::Cuisines => {
            let cuisines = engine.global_cuisine_frequency(&dataset);
            emit(cli.json, &cuisines, || render::cuisine_table(&cuisines).to_string())?;
        }
        Commands::Pairs => {
            let pairs = engine.price_rating_pairs(&dataset);
            emit(cli.json, &pairs, || render::price_rating_table(&pairs).to_string())?;
        }
        Commands::Markers => {
            if cli.json {
                let center = MapCenter {
                    latitude: settings.map.center_latitude,
                    longitude: settings.map.center_longitude,
                };
                let view = engine.map_view(&dataset, center, settings.map.zoom);
                emit(true, &view, String::new)?;
            } else {
                let markers = engine.map_markers(&dataset);
                println!("{}", render::markers_table(&markers));
            }
        }
        Commands::Insights(args) => {
            let top_n = args.top.unwrap_or(settings.insights.top_cities);
            let insights = engine.insights(&dataset, top_n);
            emit(cli.json, &insights, || render::insights_text(&insights))?;
        }
        Commands::Serve(args) => {
            let addr = args.addr.unwrap_or(settings.server.addr);
            web_server::run_server(addr, AppState::new(dataset, &settings)).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints one city's statistics. An unknown city is reported to the user with
/// the valid choices instead of being treated as a failure of the program.
fn handle_city(
    engine: &AnalyticsEngine,
    dataset: &RestaurantDataset,
    city: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    match engine.city_statistics(dataset, city) {
        Ok(stats) => {
            emit(json, &stats, || render::city_statistics_text(&stats))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(AnalyticsError::NotFound(city)) => {
            eprintln!(
                "No restaurants found in '{}'. Choose one of: {}",
                city,
                dataset.cities().join(", ")
            );
            Ok(ExitCode::from(EXIT_UNKNOWN_CITY))
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints `value` as pretty JSON, or the rendered table text.
fn emit<T, F>(json: bool, value: &T, table: F) -> anyhow::Result<()>
where
    T: serde::Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", table());
    }
    Ok(())
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(kind) = cli.dataset {
        settings.dataset.source = kind;
    }
    if let Some(path) = &cli.dataset_path {
        settings.dataset.source = DatasetSourceKind::File;
        settings.dataset.path = Some(path.clone());
    }
}

// ==============================================================================
// Logging
// ==============================================================================

/// Installs the global tracing subscriber.
///
/// Logs always go to stderr so table and JSON output on stdout stay clean. When
/// `logging.directory` is set they are also written to a daily rolling file; the
/// returned guard must live as long as logging is needed.
fn init_tracing(logging: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level {:?}", logging.level))?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "restaurant-atlas.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()?;
            Ok(None)
        }
    }
}
