use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Airport identity. On the wire this is the IATA code, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportId(String);

impl AirportId {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AirportId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: AirportId,
    pub code: String,
    pub name: String,
    /// Degrees, [-90, 90].
    pub lat: f64,
    /// Degrees, [-180, 180].
    pub lon: f64,
}

impl Airport {
    pub fn new(id: impl Into<AirportId>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        let id = id.into();
        Self {
            code: id.as_str().to_string(),
            id,
            name: name.into(),
            lat,
            lon,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    Scheduled,
    Enroute,
    Delayed,
    Landed,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Enroute => "Enroute",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Landed => "Landed",
        };
        f.write_str(s)
    }
}

/// Upcoming departure or arrival listed on an airport detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub flight_number: String,
    pub origin: AirportId,
    pub destination: AirportId,
    pub departure_time: DateTime<FixedOffset>,
    pub arrival_time: DateTime<FixedOffset>,
    pub status: FlightStatus,
}

/// Fully enriched airport, as presented after a detail lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDetail {
    pub airport: Airport,
    pub outbound_connections: u32,
    pub inbound_connections: u32,
    pub departures: Vec<FlightSummary>,
    pub arrivals: Vec<FlightSummary>,
}

impl AirportDetail {
    pub fn id(&self) -> &AirportId {
        &self.airport.id
    }
}
