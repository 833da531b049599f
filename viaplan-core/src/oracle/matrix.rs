use std::time::Duration;

use serde::Deserialize;

use super::DistanceOracle;
use crate::{Error, model::RouteLeg};

/// Distance Matrix endpoint used when the configuration does not override it
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// HTTP client for a Google Distance Matrix style provider.
///
/// Every call queries a single origin/destination pair in driving mode and
/// converts the provider's meters and seconds to kilometers and hours.
pub struct DistanceMatrixClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl DistanceMatrixClient {
    /// Creates a client with a per-call timeout enforced by the HTTP layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Provider(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl DistanceOracle for DistanceMatrixClient {
    fn fetch(&self, origin: &str, destination: &str) -> Result<RouteLeg, Error> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("mode", "driving"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| Error::Provider(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Provider(e.to_string()))?
            .json::<MatrixResponse>()
            .map_err(|e| Error::Provider(e.to_string()))?;

        leg_from_response(&response, origin, destination)
    }
}

fn leg_from_response(
    response: &MatrixResponse,
    origin: &str,
    destination: &str,
) -> Result<RouteLeg, Error> {
    if response.status != "OK" {
        return Err(Error::Provider(format!(
            "distance matrix request rejected: {}",
            response.status
        )));
    }

    let element = response
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| Error::Provider("distance matrix response contained no elements".into()))?;

    match (&element.distance, &element.duration) {
        (Some(distance), Some(duration)) if element.status == "OK" => Ok(RouteLeg {
            // meters -> kilometers, seconds -> hours
            distance: distance.value / 1000.0,
            duration: duration.value / 3600.0,
        }),
        _ => Err(Error::NoDistance {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<ValueField>,
    duration: Option<ValueField>,
}

#[derive(Debug, Deserialize)]
struct ValueField {
    value: f64,
}
