use clap::Parser;
use log::info;
use weather_odds::{run, AppState, ClimatologyFetcher, ServerArgs, Thresholds, WeatherOddsError};

#[tokio::main]
async fn main() -> Result<(), WeatherOddsError> {
    let args = ServerArgs::parse();

    // RUST_LOG takes precedence over --log-level
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let fetcher = ClimatologyFetcher::builder()
        .base_url(args.power_url.clone())
        .timeout(args.upstream_timeout())
        .build()?;
    info!("Using climatology source {}", args.power_url);

    run(args.bind, AppState::new(fetcher, Thresholds::default())).await?;
    Ok(())
}
