use crate::climatology::error::ClimatologyError;
use crate::climatology::power_response::record_from_response;
use crate::types::climate_parameter::ClimateParameter;
use crate::types::climatology_record::ClimatologyRecord;
use crate::types::location::Coordinates;
use bon::bon;
use log::{debug, info, warn};
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

/// NASA POWER monthly point endpoint.
pub const DEFAULT_POWER_URL: &str = "https://power.larc.nasa.gov/api/temporal/monthly/point";
/// POWER "renewable energy" community profile.
pub const DEFAULT_COMMUNITY: &str = "RE";
/// Reference year whose monthly averages are scored.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2020;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Retrieves monthly climatology for a point from NASA POWER.
///
/// One outbound request per [`ClimatologyFetcher::fetch`] call, no retries and no
/// caching. The underlying `reqwest::Client` pools connections, so a single fetcher
/// should be shared across requests.
///
/// # Examples
///
/// ```no_run
/// # use weather_odds::{ClimatologyFetcher, ClimatologyError, LatLon};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ClimatologyError> {
/// let fetcher = ClimatologyFetcher::builder().build()?;
/// if let Some(record) = fetcher.fetch(LatLon(52.52, 13.40)).await? {
///     println!("{:?}", record.temperature);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClimatologyFetcher {
    client: Client,
    base_url: Url,
    community: String,
    start_year: i32,
    end_year: i32,
}

#[bon]
impl ClimatologyFetcher {
    /// Builds a fetcher. Every setting has a default aimed at the public POWER API.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::InvalidBaseUrl`] if `base_url` does not parse and
    /// [`ClimatologyError::ClientBuild`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] community: Option<String>,
        start_year: Option<i32>,
        end_year: Option<i32>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClimatologyError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_POWER_URL.to_string());
        let parsed_url = Url::parse(&base_url).map_err(|e| ClimatologyError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if parsed_url.cannot_be_a_base() {
            return Err(ClimatologyError::InvalidBaseUrl {
                url: base_url,
                reason: "not an absolute http(s) URL".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ClimatologyError::ClientBuild)?;

        let start_year = start_year.unwrap_or(DEFAULT_REFERENCE_YEAR);
        Ok(Self {
            client,
            base_url: parsed_url,
            community: community.unwrap_or_else(|| DEFAULT_COMMUNITY.to_string()),
            start_year,
            end_year: end_year.unwrap_or(start_year),
        })
    }

    /// Fetches the monthly series of every [`ClimateParameter`] for `location`.
    ///
    /// `location` is either a typed [`LatLon`](crate::LatLon) or caller-supplied
    /// [`Coordinates`], whose text is sent as-is.
    ///
    /// Returns `Ok(None)` when the source answers successfully but without a
    /// `properties.parameter` object; callers treat that as "no data".
    ///
    /// # Errors
    ///
    /// [`ClimatologyError::NetworkRequest`] on transport failure or timeout,
    /// [`ClimatologyError::HttpStatus`] on a non-success status and
    /// [`ClimatologyError::JsonParse`] when the body is not JSON at all.
    pub async fn fetch(
        &self,
        location: impl Into<Coordinates>,
    ) -> Result<Option<ClimatologyRecord>, ClimatologyError> {
        let location = location.into();
        let url = self.request_url(&location);
        debug!("Requesting climatology from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClimatologyError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ClimatologyError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ClimatologyError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| ClimatologyError::NetworkRequest(url.to_string(), e))?;
        let parsed: Value = serde_json::from_slice(&body)
            .map_err(|e| ClimatologyError::JsonParse(url.to_string(), e))?;

        let record = record_from_response(&parsed);
        match &record {
            Some(_) => info!("Fetched climatology for {}", location),
            None => warn!("Climatology response for {} has no parameter data", location),
        }
        Ok(record)
    }

    fn request_url(&self, location: &Coordinates) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("parameters", &ClimateParameter::query_list())
            .append_pair("community", &self.community)
            .append_pair("longitude", &location.longitude)
            .append_pair("latitude", &location.latitude)
            .append_pair("start", &self.start_year.to_string())
            .append_pair("end", &self.end_year.to_string())
            .append_pair("format", "JSON");
        url
    }
}
