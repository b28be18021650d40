//! In-memory flight backend and fixtures shared by the runtime tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};
use flights::{
    Airport, AirportDetail, AirportId, FlightSegment, FlightStatus, GlobeData, Route, Trip, TripAck,
    TripId, TripLeg, TripSummary,
};

use crate::scheduling::TripRequest;
use crate::service::{BoxFuture, FlightService, ServiceError};

pub fn sfo() -> Airport {
    Airport::new("SFO", "San Francisco Intl", 37.6188, -122.375)
}

pub fn jfk() -> Airport {
    Airport::new("JFK", "John F Kennedy Intl", 40.6398, -73.7789)
}

pub fn ord() -> Airport {
    Airport::new("ORD", "Chicago O'Hare Intl", 41.9786, -87.9048)
}

pub fn globe_data() -> GlobeData {
    GlobeData::new(
        vec![sfo(), jfk(), ord()],
        vec![
            Route::new("SFO", "ORD").with_distance(2963.0),
            Route::new("ORD", "JFK").with_distance(1188.0),
            Route::new("SFO", "JFK").with_distance(4152.0),
        ],
    )
}

fn utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).fixed_offset()
}

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).expect("fixture timestamp")
}

pub fn airport_detail(airport: Airport) -> AirportDetail {
    AirportDetail {
        airport,
        outbound_connections: 2,
        inbound_connections: 1,
        departures: Vec::new(),
        arrivals: Vec::new(),
    }
}

pub fn trip(id: i64, legs: &[(&str, &str)]) -> Trip {
    let start = at("2024-06-01T10:00:00+00:00");
    let flights: Vec<FlightSegment> = legs
        .iter()
        .enumerate()
        .map(|(i, (from, to))| {
            let dep = start + Duration::hours(3 * i as i64);
            FlightSegment {
                flight_number: format!("AS{:04}", 1000 + i),
                origin_code: AirportId::new(from),
                origin_name: from.to_string(),
                destination_code: AirportId::new(to),
                destination_name: to.to_string(),
                departure_time: dep,
                arrival_time: dep + Duration::hours(2),
                status: FlightStatus::Scheduled,
            }
        })
        .collect();
    let route_segments = flights.iter().map(FlightSegment::route).collect();
    let (origin, dest) = match (legs.first(), legs.last()) {
        (Some((o, _)), Some((_, d))) => (AirportId::new(o), AirportId::new(d)),
        _ => (AirportId::new(""), AirportId::new("")),
    };
    Trip {
        id: TripId(id),
        origin_name: origin.to_string(),
        origin_code: origin,
        destination_name: dest.to_string(),
        destination_code: dest,
        departure_time: start,
        flights,
        route_segments,
    }
}

pub fn trip_ack(id: i64) -> TripAck {
    TripAck {
        trip_id: TripId(id),
        legs: vec![TripLeg {
            flight_number: "AS4821".into(),
            origin: AirportId::new("SFO"),
            destination: AirportId::new("JFK"),
            departure_time: at("2024-06-01T10:00:00+00:00"),
            arrival_time: at("2024-06-01T15:51:00+00:00"),
        }],
        total_duration_minutes: 351.0,
    }
}

/// Backend that keeps trips in memory and schedules direct flights.
#[derive(Default)]
pub struct MockService {
    data: GlobeData,
    trips: Mutex<Vec<Trip>>,
    fail_submissions: bool,
    backend_down: AtomicBool,
    submissions: AtomicUsize,
}

impl MockService {
    pub fn new(data: GlobeData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn failing(data: GlobeData) -> Self {
        Self {
            fail_submissions: true,
            ..Self::new(data)
        }
    }

    pub fn with_trip(self, trip: Trip) -> Self {
        self.trips.lock().expect("trips lock").push(trip);
        self
    }

    /// Makes every fetch fail with a transport error until switched back.
    pub fn set_backend_down(&self, down: bool) {
        self.backend_down.store(down, Ordering::SeqCst);
    }

    fn check_up(&self) -> Result<(), ServiceError> {
        if self.backend_down.load(Ordering::SeqCst) {
            return Err(ServiceError::Transport("connection refused".into()));
        }
        Ok(())
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    fn summary(trip: &Trip) -> TripSummary {
        let arrival = trip.span().map(|(_, arr)| arr).unwrap_or(trip.departure_time);
        TripSummary {
            id: trip.id,
            origin_code: trip.origin_code.clone(),
            origin_name: trip.origin_name.clone(),
            destination_code: trip.destination_code.clone(),
            destination_name: trip.destination_name.clone(),
            departure_time: trip.departure_time,
            arrival_time: arrival,
            num_flights: trip.flights.len() as u32,
        }
    }

    fn schedule(&self, request: &TripRequest) -> Result<TripAck, ServiceError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if self.fail_submissions {
            return Err(ServiceError::Status {
                status: 500,
                message: "Internal error".into(),
            });
        }
        let origin = self
            .data
            .airport(&request.origin)
            .ok_or_else(|| ServiceError::NotFound(format!("airport {}", request.origin)))?;
        let dest = self
            .data
            .airport(&request.destination)
            .ok_or_else(|| ServiceError::NotFound(format!("airport {}", request.destination)))?;

        let mut trips = self.trips.lock().expect("trips lock");
        let id = TripId(trips.iter().map(|t| t.id.0).max().unwrap_or(0) + 1);
        let dep = utc(request.departure_time);
        let arr = dep + Duration::minutes(330);
        let segment = FlightSegment {
            flight_number: format!("AS{:04}", id.0),
            origin_code: origin.id.clone(),
            origin_name: origin.name.clone(),
            destination_code: dest.id.clone(),
            destination_name: dest.name.clone(),
            departure_time: dep,
            arrival_time: arr,
            status: FlightStatus::Scheduled,
        };
        let ack = TripAck {
            trip_id: id,
            legs: vec![TripLeg {
                flight_number: segment.flight_number.clone(),
                origin: origin.id.clone(),
                destination: dest.id.clone(),
                departure_time: dep,
                arrival_time: arr,
            }],
            total_duration_minutes: 330.0,
        };
        trips.push(Trip {
            id,
            origin_code: origin.id.clone(),
            origin_name: origin.name.clone(),
            destination_code: dest.id.clone(),
            destination_name: dest.name.clone(),
            departure_time: dep,
            route_segments: vec![segment.route()],
            flights: vec![segment],
        });
        Ok(ack)
    }
}

impl FlightService for MockService {
    fn fetch_globe_data(&self) -> BoxFuture<'_, Result<GlobeData, ServiceError>> {
        Box::pin(async move {
            self.check_up()?;
            Ok(self.data.clone())
        })
    }

    fn fetch_trips(&self) -> BoxFuture<'_, Result<Vec<TripSummary>, ServiceError>> {
        Box::pin(async move {
            self.check_up()?;
            let trips = self.trips.lock().expect("trips lock");
            Ok(trips.iter().map(Self::summary).collect())
        })
    }

    fn fetch_trip_detail(&self, trip: TripId) -> BoxFuture<'_, Result<Trip, ServiceError>> {
        Box::pin(async move {
            self.check_up()?;
            let trips = self.trips.lock().expect("trips lock");
            trips
                .iter()
                .find(|t| t.id == trip)
                .cloned()
                .ok_or_else(|| ServiceError::NotFound(format!("trip {trip}")))
        })
    }

    fn fetch_airport_detail(
        &self,
        airport: AirportId,
    ) -> BoxFuture<'_, Result<AirportDetail, ServiceError>> {
        Box::pin(async move {
            self.check_up()?;
            self.data
                .airport(&airport)
                .cloned()
                .map(airport_detail)
                .ok_or_else(|| ServiceError::NotFound(format!("airport {airport}")))
        })
    }

    fn submit_trip(&self, request: TripRequest) -> BoxFuture<'_, Result<TripAck, ServiceError>> {
        Box::pin(async move { self.schedule(&request) })
    }
}
