use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::airport::{AirportId, FlightStatus};
use crate::route::Route;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub i64);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row of the trip list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub id: TripId,
    pub origin_code: AirportId,
    pub origin_name: String,
    pub destination_code: AirportId,
    pub destination_name: String,
    pub departure_time: DateTime<FixedOffset>,
    pub arrival_time: DateTime<FixedOffset>,
    pub num_flights: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSegment {
    pub flight_number: String,
    pub origin_code: AirportId,
    pub origin_name: String,
    pub destination_code: AirportId,
    pub destination_name: String,
    pub departure_time: DateTime<FixedOffset>,
    pub arrival_time: DateTime<FixedOffset>,
    pub status: FlightStatus,
}

impl FlightSegment {
    pub fn route(&self) -> Route {
        Route::new(self.origin_code.clone(), self.destination_code.clone())
    }
}

/// A scheduled trip with its ordered flight segments. Read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub origin_code: AirportId,
    pub origin_name: String,
    pub destination_code: AirportId,
    pub destination_name: String,
    pub departure_time: DateTime<FixedOffset>,
    pub flights: Vec<FlightSegment>,
    pub route_segments: Vec<Route>,
}

impl Trip {
    /// Departure of the first leg and arrival of the last one.
    pub fn span(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let first = self.flights.first()?;
        let last = self.flights.last()?;
        Some((first.departure_time, last.arrival_time))
    }
}

/// One flight created by a successful scheduling request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripLeg {
    pub flight_number: String,
    pub origin: AirportId,
    pub destination: AirportId,
    pub departure_time: DateTime<FixedOffset>,
    pub arrival_time: DateTime<FixedOffset>,
}

/// Acknowledgement returned by the scheduling service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripAck {
    pub trip_id: TripId,
    #[serde(rename = "route")]
    pub legs: Vec<TripLeg>,
    pub total_duration_minutes: f64,
}
