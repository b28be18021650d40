//! JSON shapes exchanged with the flight backend.
//!
//! Payloads that already match the domain model (`Trip`, `TripSummary`,
//! `TripAck`) decode straight into `flights` types; the rest go through the
//! DTOs below.

use chrono::{NaiveDateTime, Timelike};
use flights::{Airport, AirportDetail, AirportId, FlightSummary, GlobeData, Route, TripSummary};
use runtime::TripRequest;
use serde::{Deserialize, Serialize};

/// `datetime-local` format the backend parses.
pub const DEPARTURE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DEPARTURE_TIME_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Seconds are only written when set, matching what the input carried.
pub fn format_departure_time(time: NaiveDateTime) -> String {
    let format = if time.second() == 0 {
        DEPARTURE_TIME_FORMAT
    } else {
        DEPARTURE_TIME_FORMAT_SECONDS
    };
    time.format(format).to_string()
}

#[derive(Debug, Deserialize)]
pub struct GlobeDataWire {
    pub nodes: Vec<NodeWire>,
    pub links: Vec<LinkWire>,
}

#[derive(Debug, Deserialize)]
pub struct NodeWire {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct LinkWire {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl From<GlobeDataWire> for GlobeData {
    fn from(wire: GlobeDataWire) -> Self {
        let airports = wire
            .nodes
            .into_iter()
            .map(|n| Airport::new(AirportId::new(&n.id), n.name, n.lat, n.lon))
            .collect();
        let routes = wire
            .links
            .into_iter()
            .map(|l| {
                let route = Route::new(AirportId::new(&l.source), AirportId::new(&l.target));
                match l.distance {
                    Some(km) => route.with_distance(km),
                    None => route,
                }
            })
            .collect();
        GlobeData::new(airports, routes)
    }
}

#[derive(Debug, Deserialize)]
pub struct AirportDetailWire {
    pub code: String,
    pub name: String,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
    #[serde(default)]
    pub outbound_connections: u32,
    #[serde(default)]
    pub inbound_connections: u32,
    #[serde(default)]
    pub departures: Vec<FlightSummary>,
    #[serde(default)]
    pub arrivals: Vec<FlightSummary>,
}

impl From<AirportDetailWire> for AirportDetail {
    fn from(wire: AirportDetailWire) -> Self {
        AirportDetail {
            airport: Airport::new(
                AirportId::new(&wire.code),
                wire.name,
                wire.latitude,
                wire.longitude,
            ),
            outbound_connections: wire.outbound_connections,
            inbound_connections: wire.inbound_connections,
            departures: wire.departures,
            arrivals: wire.arrivals,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TripListWire {
    pub trips: Vec<TripSummary>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequestWire {
    pub origin_id: String,
    pub destination_id: String,
    pub departure_time: String,
}

impl From<&TripRequest> for TripRequestWire {
    fn from(request: &TripRequest) -> Self {
        Self {
            origin_id: request.origin.as_str().to_string(),
            destination_id: request.destination.as_str().to_string(),
            departure_time: format_departure_time(request.departure_time),
        }
    }
}

/// `{"error": "..."}` body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Human-readable message of an error response; plain-text bodies are used
/// as-is.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AirportDetailWire, GlobeDataWire, TripRequestWire, error_message, format_departure_time,
    };
    use flights::{AirportDetail, AirportId, FlightStatus, GlobeData};
    use pretty_assertions::assert_eq;
    use runtime::{TripRequest, parse_departure_time};

    #[test]
    fn globe_payload_becomes_indexed_dataset() {
        let wire: GlobeDataWire = serde_json::from_str(
            r#"{"nodes": [{"id": "sfo", "name": "San Francisco Intl", "lat": 37.6, "lon": -122.4},
                          {"id": "JFK", "name": "John F Kennedy Intl", "latitude": 40.6, "longitude": -73.8}],
                "links": [{"source": "SFO", "target": "jfk", "distance": 4152.3},
                          {"source": "JFK", "target": "LHR"}]}"#,
        )
        .expect("decode");
        let data = GlobeData::from(wire);
        assert_eq!(data.airports().len(), 2);
        assert!(data.airport(&AirportId::new("SFO")).is_some());
        assert_eq!(data.routes()[0].target, AirportId::new("JFK"));
        assert_eq!(data.routes()[0].distance_km, Some(4152.3));
        assert_eq!(data.routes()[1].distance_km, None);
    }

    #[test]
    fn airport_payload_becomes_detail() {
        let wire: AirportDetailWire = serde_json::from_str(
            r#"{"code": "SFO", "name": "San Francisco Intl", "latitude": 37.6, "longitude": -122.4,
                "outbound_connections": 12, "inbound_connections": 11,
                "departures": [{"flight_number": "AS1001", "origin": "SFO", "destination": "JFK",
                                "departure_time": "2024-06-01T10:00:00+00:00",
                                "arrival_time": "2024-06-01T15:11:00+00:00", "status": "Enroute"}],
                "arrivals": []}"#,
        )
        .expect("decode");
        let detail = AirportDetail::from(wire);
        assert_eq!(detail.id(), &AirportId::new("SFO"));
        assert_eq!(detail.outbound_connections, 12);
        assert_eq!(detail.departures[0].status, FlightStatus::Enroute);
    }

    #[test]
    fn request_keeps_seconds_from_input() {
        let request = TripRequest {
            origin: AirportId::new("SFO"),
            destination: AirportId::new("JFK"),
            departure_time: parse_departure_time("2024-06-01T10:00:30").expect("time"),
        };
        let body = serde_json::to_value(TripRequestWire::from(&request)).expect("encode");
        assert_eq!(
            body,
            serde_json::json!({
                "origin_id": "SFO",
                "destination_id": "JFK",
                "departure_time": "2024-06-01T10:00:30"
            })
        );
    }

    #[test]
    fn departure_time_round_trips_the_input() {
        for input in ["2024-06-01T10:00", "2024-06-01T23:59:59"] {
            let time = parse_departure_time(input).expect("time");
            assert_eq!(format_departure_time(time), input);
        }
    }

    #[test]
    fn error_messages_prefer_json_body() {
        assert_eq!(error_message(r#"{"error": "No route found"}"#), "No route found");
        assert_eq!(error_message("Trip not found\n"), "Trip not found");
    }
}
