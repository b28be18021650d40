//! Contract of the flight backend consumed by the interaction layer.
//!
//! Transport is not specified here; `client` provides the HTTP implementation
//! and tests use an in-memory one.

use std::future::Future;
use std::pin::Pin;

use flights::{AirportDetail, AirportId, GlobeData, Trip, TripAck, TripId, TripSummary};
use thiserror::Error;

use crate::scheduling::TripRequest;

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("{0} not found")]
    NotFound(String),
}

/// Flight backend.
///
/// Implementations must be `Send + Sync`. Methods return boxed futures for
/// dyn-compatibility.
pub trait FlightService: Send + Sync {
    /// All airports and routes drawn on the globe.
    fn fetch_globe_data(&self) -> BoxFuture<'_, Result<GlobeData, ServiceError>>;

    fn fetch_trips(&self) -> BoxFuture<'_, Result<Vec<TripSummary>, ServiceError>>;

    /// Trip with its ordered flight segments.
    fn fetch_trip_detail(&self, trip: TripId) -> BoxFuture<'_, Result<Trip, ServiceError>>;

    /// Airport with upcoming departures and arrivals.
    fn fetch_airport_detail(
        &self,
        airport: AirportId,
    ) -> BoxFuture<'_, Result<AirportDetail, ServiceError>>;

    /// Asks the backend to compute and store a trip.
    fn submit_trip(&self, request: TripRequest) -> BoxFuture<'_, Result<TripAck, ServiceError>>;
}
