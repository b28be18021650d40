//! Trip scheduling state machine.
//!
//! The session is a plain value: every transition consumes the old session
//! and returns the next one through [`SchedulingSession::reduce`]. Each step
//! is a variant carrying exactly the fields that may be set in that step, so
//! "origin only from SetTime on" and friends hold by construction.

use chrono::NaiveDateTime;
use flights::{Airport, AirportId};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Idle,
    SelectOrigin,
    SetTime,
    SelectDestination,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SchedulingSession {
    #[default]
    Idle,
    SelectOrigin,
    SetTime {
        origin: Airport,
        departure_time: Option<NaiveDateTime>,
    },
    SelectDestination {
        origin: Airport,
        departure_time: NaiveDateTime,
        destination: Option<Airport>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingEvent {
    /// Starts a fresh session, discarding any in-progress one.
    Start,
    AirportPicked(Airport),
    DepartureTimeSet(NaiveDateTime),
    TimeConfirmed,
    /// The external scheduling service accepted the request.
    Submitted,
    Cancel,
}

/// What gets sent to the scheduling service on confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub origin: AirportId,
    pub destination: AirportId,
    pub departure_time: NaiveDateTime,
}

impl SchedulingSession {
    pub fn step(&self) -> Step {
        match self {
            SchedulingSession::Idle => Step::Idle,
            SchedulingSession::SelectOrigin => Step::SelectOrigin,
            SchedulingSession::SetTime { .. } => Step::SetTime,
            SchedulingSession::SelectDestination { .. } => Step::SelectDestination,
        }
    }

    pub fn is_active(&self) -> bool {
        self.step() != Step::Idle
    }

    pub fn origin(&self) -> Option<&Airport> {
        match self {
            SchedulingSession::SetTime { origin, .. }
            | SchedulingSession::SelectDestination { origin, .. } => Some(origin),
            _ => None,
        }
    }

    pub fn destination(&self) -> Option<&Airport> {
        match self {
            SchedulingSession::SelectDestination { destination, .. } => destination.as_ref(),
            _ => None,
        }
    }

    pub fn departure_time(&self) -> Option<NaiveDateTime> {
        match self {
            SchedulingSession::SetTime { departure_time, .. } => *departure_time,
            SchedulingSession::SelectDestination { departure_time, .. } => Some(*departure_time),
            _ => None,
        }
    }

    /// Applies `event`. Events that are not valid in the current step, or
    /// whose guard fails, leave the session unchanged.
    pub fn reduce(self, event: SchedulingEvent) -> Self {
        use SchedulingEvent as E;
        use SchedulingSession as S;

        match (self, event) {
            (_, E::Start) => S::SelectOrigin,
            (S::Idle, _) => S::Idle,
            (_, E::Cancel) => S::Idle,

            (S::SelectOrigin, E::AirportPicked(origin)) => S::SetTime {
                origin,
                departure_time: None,
            },

            (S::SetTime { origin, .. }, E::DepartureTimeSet(t)) => S::SetTime {
                origin,
                departure_time: Some(t),
            },
            (
                S::SetTime {
                    origin,
                    departure_time: Some(departure_time),
                },
                E::TimeConfirmed,
            ) => S::SelectDestination {
                origin,
                departure_time,
                destination: None,
            },

            // Last pick wins; origin == destination is accepted.
            (
                S::SelectDestination {
                    origin,
                    departure_time,
                    ..
                },
                E::AirportPicked(destination),
            ) => S::SelectDestination {
                origin,
                departure_time,
                destination: Some(destination),
            },
            (
                S::SelectDestination {
                    destination: Some(_),
                    ..
                },
                E::Submitted,
            ) => S::Idle,

            (session, _) => session,
        }
    }

    /// The request `confirm()` would submit, if every field is set.
    pub fn submission_request(&self) -> Option<TripRequest> {
        match self {
            SchedulingSession::SelectDestination {
                origin,
                departure_time,
                destination: Some(destination),
            } => Some(TripRequest {
                origin: origin.id.clone(),
                destination: destination.id.clone(),
                departure_time: *departure_time,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid departure time {input:?}, expected YYYY-MM-DDTHH:MM")]
pub struct ParseTimeError {
    pub input: String,
}

/// Parses the value of a local date-time input (`2024-06-01T10:00`, seconds
/// optional).
pub fn parse_departure_time(input: &str) -> Result<NaiveDateTime, ParseTimeError> {
    let s = input.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ParseTimeError {
            input: input.to_string(),
        })
}
