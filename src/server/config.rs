//! Command-line and environment configuration for the `weather-odds` server.

use crate::climatology::fetcher::DEFAULT_POWER_URL;
use clap::Parser;
use log::LevelFilter;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:3001";

/// Serve heuristic extreme-weather odds for a place and date.
#[derive(Debug, Clone, Parser)]
#[command(name = "weather-odds", version, about)]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "WEATHER_ODDS_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// NASA POWER monthly point endpoint.
    #[arg(long, env = "WEATHER_ODDS_POWER_URL", default_value = DEFAULT_POWER_URL)]
    pub power_url: String,

    /// Timeout for each upstream request, in seconds.
    #[arg(long, env = "WEATHER_ODDS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl ServerArgs {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ServerArgs::try_parse_from(["weather-odds"]).unwrap();
        assert_eq!(args.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(args.power_url, DEFAULT_POWER_URL);
        assert_eq!(args.upstream_timeout(), Duration::from_secs(30));
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let args = ServerArgs::try_parse_from([
            "weather-odds",
            "--bind",
            "0.0.0.0:8080",
            "--power-url",
            "http://localhost:9000/point",
            "--timeout-secs",
            "5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.bind.port(), 8080);
        assert_eq!(args.power_url, "http://localhost:9000/point");
        assert_eq!(args.upstream_timeout(), Duration::from_secs(5));
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        assert!(ServerArgs::try_parse_from(["weather-odds", "--bind", "nowhere"]).is_err());
    }
}
