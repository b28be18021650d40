//! [`FlightService`] over the backend's JSON API.

use flights::{AirportDetail, AirportId, GlobeData, Trip, TripAck, TripId, TripSummary};
use reqwest::StatusCode;
use runtime::{BoxFuture, FlightService, ServiceError, TripRequest};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::wire::{AirportDetailWire, GlobeDataWire, TripListWire, TripRequestWire, error_message};

pub struct HttpFlightService {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpFlightService {
    pub fn new(config: ClientConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GETs `path`; a 404 becomes [`ServiceError::NotFound`] naming `what`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, ServiceError> {
        let url = self.config.endpoint(path);
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(what.to_string()));
        }
        decode(resp).await
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    warn!("backend request failed: {err}");
    ServiceError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ServiceError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    if !status.is_success() {
        let message = error_message(&body);
        warn!("backend returned {status}: {message}");
        return Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        });
    }
    serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
}

impl FlightService for HttpFlightService {
    fn fetch_globe_data(&self) -> BoxFuture<'_, Result<GlobeData, ServiceError>> {
        Box::pin(async move {
            let wire: GlobeDataWire = self.get_json("/api/globe-data/", "globe data").await?;
            Ok(GlobeData::from(wire))
        })
    }

    fn fetch_trips(&self) -> BoxFuture<'_, Result<Vec<TripSummary>, ServiceError>> {
        Box::pin(async move {
            let wire: TripListWire = self.get_json("/api/trips/", "trip list").await?;
            Ok(wire.trips)
        })
    }

    fn fetch_trip_detail(&self, trip: TripId) -> BoxFuture<'_, Result<Trip, ServiceError>> {
        Box::pin(async move {
            self.get_json(&format!("/api/trips/{trip}/"), &format!("trip {trip}"))
                .await
        })
    }

    fn fetch_airport_detail(
        &self,
        airport: AirportId,
    ) -> BoxFuture<'_, Result<AirportDetail, ServiceError>> {
        Box::pin(async move {
            let wire: AirportDetailWire = self
                .get_json(&format!("/api/airport/{airport}/"), &format!("airport {airport}"))
                .await?;
            Ok(AirportDetail::from(wire))
        })
    }

    fn submit_trip(&self, request: TripRequest) -> BoxFuture<'_, Result<TripAck, ServiceError>> {
        Box::pin(async move {
            let url = self.config.endpoint("/api/compute_trip/");
            let body = TripRequestWire::from(&request);
            debug!("POST {url} {body:?}");
            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        })
    }
}
