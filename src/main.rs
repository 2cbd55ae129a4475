use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use volley_calendar::fetcher::HttpFetcher;
use volley_calendar::{write_artifacts, Config, Pipeline, ScheduleError};

fn main() -> Result<(), ScheduleError> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new("info"))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let config = Config::default();
    let pipeline = Pipeline::new(&config)?;
    let mut fetcher = HttpFetcher::new(&config);

    info!(url = %config.base_url, competition = %config.competition_id, "Refreshing schedule");
    match pipeline.run(&mut fetcher, chrono::Utc::now())? {
        Some(artifacts) => {
            write_artifacts(&artifacts, &config.ics_path, &config.json_path)?;
            info!(matches = artifacts.matches, path = %config.ics_path.display(), "Calendar generated");
        }
        None => warn!("No matches found, nothing written"),
    }
    Ok(())
}
