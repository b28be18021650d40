//! Interaction state owned by the UI thread.
//!
//! Everything here is synchronous. Network work is split into a `begin_*`
//! call that decides whether a request should go out and a matching
//! `finish_*`/`show_*` call that applies the response; the async driver in
//! [`crate::app`] glues the two around the actual await.

use chrono::NaiveDateTime;
use flights::{Airport, AirportDetail, AirportId, GlobeData, HighlightSet, Trip, TripAck, TripId, TripSummary};
use layers::{GlobeLayer, GlobeSnapshot};
use tracing::{debug, error, info, warn};

use crate::dispatch::{PickOutcome, dispatch};
use crate::notices::{Notice, NoticeBoard};
use crate::scheduling::{SchedulingEvent, SchedulingSession, Step, TripRequest};
use crate::service::ServiceError;

/// Identifies one outstanding scheduling submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub request: TripRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Session reset to `Idle`; the trip list should be refreshed.
    Scheduled(TripAck),
    /// Session kept in its step so the user can retry.
    Failed(ServiceError),
    /// The session moved on while the request was in flight; nothing applied.
    Stale { succeeded: bool },
}

impl SubmissionOutcome {
    /// Whether the backend created a trip, regardless of whether the session
    /// still cared.
    pub fn created_trip(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Scheduled(_) | SubmissionOutcome::Stale { succeeded: true }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripSelection {
    /// The trip was already selected; selection and highlight were cleared.
    Cleared,
    /// Fetch this trip's detail and pass it to [`Interaction::show_trip`].
    Fetch(TripId),
}

#[derive(Debug, Default)]
pub struct Interaction {
    session: SchedulingSession,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
    pending_detail: Option<AirportId>,
    selected_airport: Option<AirportDetail>,
    pending_trip: Option<TripId>,
    selected_trip: Option<Trip>,
    highlight: HighlightSet,
    trips: Vec<TripSummary>,
    notices: NoticeBoard,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SchedulingSession {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selected_airport(&self) -> Option<&AirportDetail> {
        self.selected_airport.as_ref()
    }

    pub fn selected_trip(&self) -> Option<&Trip> {
        self.selected_trip.as_ref()
    }

    pub fn highlight(&self) -> &HighlightSet {
        &self.highlight
    }

    pub fn trips(&self) -> &[TripSummary] {
        &self.trips
    }

    pub fn notices(&self) -> &[Notice] {
        self.notices.notices()
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    fn apply(&mut self, event: SchedulingEvent) {
        let before = self.session.step();
        self.session = std::mem::take(&mut self.session).reduce(event);
        let after = self.session.step();
        if before != after {
            debug!("scheduling step {before:?} -> {after:?}");
        }
    }

    /// Starts (or restarts) the scheduling flow and clears browsing state.
    pub fn start_scheduling(&mut self) {
        self.apply(SchedulingEvent::Start);
        self.in_flight = None;
        self.pending_detail = None;
        self.selected_airport = None;
        self.clear_trip_selection();
        info!("scheduling started");
    }

    pub fn cancel_scheduling(&mut self) {
        if !self.session.is_active() {
            return;
        }
        self.apply(SchedulingEvent::Cancel);
        self.in_flight = None;
        self.selected_airport = None;
        info!("scheduling cancelled");
    }

    pub fn set_departure_time(&mut self, time: NaiveDateTime) {
        self.apply(SchedulingEvent::DepartureTimeSet(time));
    }

    /// No-op unless an origin and a departure time are set.
    pub fn confirm_departure_time(&mut self) {
        self.apply(SchedulingEvent::TimeConfirmed);
    }

    /// Routes a marker pick. For [`PickOutcome::DetailRequested`] the caller
    /// fetches the detail and hands it to [`Interaction::show_airport_detail`].
    pub fn pick_airport(&mut self, airport: &Airport) -> PickOutcome {
        let outcome = dispatch(&self.session, airport);
        debug!("pick {} -> {outcome:?}", airport.id);
        match &outcome {
            PickOutcome::ScheduleOriginPicked(_) | PickOutcome::ScheduleDestinationPicked(_) => {
                if let Some(event) = outcome.scheduling_event() {
                    self.apply(event);
                }
            }
            PickOutcome::DetailRequested(id) => {
                self.pending_detail = Some(id.clone());
            }
        }
        outcome
    }

    /// Presents a fetched airport detail, clearing any selected trip.
    ///
    /// Returns `false` if a newer pick superseded this response.
    pub fn show_airport_detail(&mut self, detail: AirportDetail) -> bool {
        if self.pending_detail.as_ref() != Some(detail.id()) {
            debug!("dropping stale airport detail for {}", detail.id());
            return false;
        }
        self.pending_detail = None;
        self.clear_trip_selection();
        self.selected_airport = Some(detail);
        true
    }

    pub fn airport_detail_failed(&mut self, airport: &AirportId, err: &ServiceError) {
        warn!("failed to fetch airport details for {airport}: {err}");
        if self.pending_detail.as_ref() == Some(airport) {
            self.pending_detail = None;
        }
        self.notices.error(format!("Failed to fetch airport details: {err}"));
    }

    /// Claims the single submission slot if the session is ready to confirm.
    ///
    /// Returns `None` when a guard fails or a submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<PendingSubmission> {
        if self.in_flight.is_some() {
            debug!("confirm ignored: submission already in flight");
            return None;
        }
        let request = self.session.submission_request()?;
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        info!(
            "submitting trip {} -> {} at {}",
            request.origin, request.destination, request.departure_time
        );
        Some(PendingSubmission { ticket, request })
    }

    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<TripAck, ServiceError>,
    ) -> SubmissionOutcome {
        if self.in_flight != Some(ticket) {
            warn!("ignoring stale scheduling response");
            return SubmissionOutcome::Stale {
                succeeded: result.is_ok(),
            };
        }
        self.in_flight = None;

        match result {
            Ok(ack) => {
                info!("trip {} scheduled with {} flight(s)", ack.trip_id, ack.legs.len());
                self.apply(SchedulingEvent::Submitted);
                self.selected_airport = None;
                self.notices.info("Flight scheduled successfully!");
                SubmissionOutcome::Scheduled(ack)
            }
            Err(err) => {
                error!("failed to schedule flight: {err}");
                self.notices.error("Error scheduling flight.");
                SubmissionOutcome::Failed(err)
            }
        }
    }

    /// Toggles the selected trip. Selecting a trip hides the airport panel.
    pub fn toggle_trip(&mut self, trip: TripId) -> TripSelection {
        self.selected_airport = None;
        self.pending_detail = None;
        if self.selected_trip.as_ref().is_some_and(|t| t.id == trip) {
            self.clear_trip_selection();
            return TripSelection::Cleared;
        }
        self.pending_trip = Some(trip);
        TripSelection::Fetch(trip)
    }

    /// Selects `trip` and rebuilds the highlight set from its segments.
    ///
    /// Returns `false` if the trip is no longer the one being selected.
    pub fn show_trip(&mut self, trip: Trip) -> bool {
        if self.pending_trip != Some(trip.id) {
            debug!("dropping stale trip detail for {}", trip.id);
            return false;
        }
        self.pending_trip = None;
        self.highlight = if trip.route_segments.is_empty() {
            let legs: Vec<_> = trip.flights.iter().map(|f| f.route()).collect();
            HighlightSet::from_segments(&legs)
        } else {
            HighlightSet::from_segments(&trip.route_segments)
        };
        debug!("highlighting {} route(s) for trip {}", self.highlight.len(), trip.id);
        self.selected_trip = Some(trip);
        true
    }

    pub fn trip_failed(&mut self, trip: TripId, err: &ServiceError) {
        warn!("failed to fetch trip details for {trip}: {err}");
        if self.pending_trip == Some(trip) {
            self.pending_trip = None;
        }
        self.notices.error(format!("Failed to fetch trip details: {err}"));
    }

    pub fn clear_trip_selection(&mut self) {
        self.pending_trip = None;
        self.selected_trip = None;
        self.highlight.clear();
    }

    pub fn set_trips(&mut self, trips: Vec<TripSummary>) {
        debug!("trip list refreshed: {} trip(s)", trips.len());
        self.trips = trips;
    }

    pub fn trips_failed(&mut self, err: &ServiceError) {
        warn!("failed to fetch trips: {err}");
        self.notices.error(format!("Failed to fetch trips: {err}"));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notices.error(message);
    }

    /// Builds this render pass's drawables with the current highlight.
    pub fn render(&self, layer: &GlobeLayer, data: &GlobeData) -> GlobeSnapshot {
        layer.extract(data, &self.highlight)
    }
}
