mod get_address_index;
mod get_annotated_stations;
mod get_stations;
mod coordinate;
pub use coordinate::CoordinateKey;
mod station;
pub use station::{RawStation, Station, NO_ADDRESS};
mod normalize;
pub use normalize::{normalize_stations, ZeroBoxesPolicy};
mod join;
pub use join::add_addresses;
mod error;
pub use error::Error;
use serde::de::DeserializeOwned;
use std::time::Duration;

const STATIONS_URL: &str = "https://wegfinder.at/api/v1/stations";
const ADDRESS_URL: &str = "https://api.i-mobility.at/routing/api/v1/nearby_address";
const RETRIES: u8 = 5;

pub struct Gateway {
    client: reqwest::Client,
    stations_url: String,
    address_url: String,
    retries: u8,
}

impl Gateway {
    pub async fn new(timeout: Option<Duration>) -> Result<Gateway, Error> {
        Gateway::with_urls(STATIONS_URL, ADDRESS_URL, timeout).await
    }

    /// Builds a gateway against non-default endpoints. `address_url` is the
    /// nearby-address endpoint without its query string.
    pub async fn with_urls(
        stations_url: &str,
        address_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let timeout = match timeout {
            Some(t) => t,
            None => Duration::new(60, 0),
        };

        let client = match reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
        {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err.to_string()
                )))
            }
        };

        let c = Gateway {
            client,
            stations_url: stations_url.to_string(),
            address_url: address_url.to_string(),
            retries: RETRIES,
        };
        Ok(c)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        // Every attempt re-issues the request; there is no delay between
        // attempts. A body that fails to parse is not retried.
        let mut last = Error::Unspecified(format!("No request attempted for \"{}\".", url));
        for _ in 0..self.retries {
            let text = match self.get_without_retry(url).await {
                Ok(res) => res,
                Err(err) => {
                    println!("Error fetching data from {} ({}).", url, err);
                    last = err;
                    continue;
                }
            };

            let body: T = match serde_json::from_str(&text) {
                Ok(r) => r,
                Err(err) => {
                    return Err(Error::SerializationError(format!(
                        "Could not deserialize response from \"{}\" ({}).",
                        text,
                        err.to_string()
                    )))
                }
            };

            return Ok(body);
        }

        Err(last)
    }

    async fn get_without_retry(&self, url: &str) -> Result<String, Error> {
        let res = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err.to_string()
                )))
            }
        };

        let status = res.status().as_u16();
        let text = res
            .text()
            .await
            .unwrap_or_else(|_| String::from("Could not retrieve body text."));

        if status != 200 {
            return Err(Error::ApiError(status, text));
        }

        Ok(text)
    }
}
