//! Async driver wiring [`Interaction`] to a [`FlightService`].
//!
//! Each user gesture is one `&mut self` call, so gestures are processed one
//! at a time and a cancel cannot arrive while [`GlobeApp::confirm`] awaits
//! the backend. Surfaces that must stay interactive during a request drive
//! [`Interaction`] directly: `begin_submission`, await the service off the UI
//! thread, then `finish_submission`, whose ticket check drops responses that
//! arrive after the session moved on.

use std::sync::Arc;

use flights::{AirportId, GlobeData, TripId};
use layers::{GlobeLayer, GlobeSnapshot};
use scene::components::AirportMarker;
use scene::picking::{PickOptions, Ray, pick_marker};
use tracing::{debug, info, warn};

use crate::controller::{Interaction, SubmissionOutcome, TripSelection};
use crate::dispatch::PickOutcome;
use crate::scheduling::{ParseTimeError, parse_departure_time};
use crate::service::{FlightService, ServiceError};

pub struct GlobeApp<S: FlightService> {
    service: Arc<S>,
    data: Arc<GlobeData>,
    layer: GlobeLayer,
    markers: Vec<AirportMarker>,
    interaction: Interaction,
}

impl<S: FlightService> GlobeApp<S> {
    pub fn new(service: Arc<S>, layer: GlobeLayer) -> Self {
        Self {
            service,
            data: Arc::new(GlobeData::default()),
            layer,
            markers: Vec::new(),
            interaction: Interaction::new(),
        }
    }

    pub fn data(&self) -> &GlobeData {
        &self.data
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
    }

    /// Loads airports, routes and the trip list.
    ///
    /// A failed dataset fetch leaves the previous dataset in place and is
    /// returned; a failed trip fetch is only reported as a notice.
    pub async fn load(&mut self) -> Result<(), ServiceError> {
        match self.service.fetch_globe_data().await {
            Ok(data) => {
                info!(
                    "loaded {} airport(s) and {} route(s)",
                    data.airports().len(),
                    data.routes().len()
                );
                self.set_data(data);
            }
            Err(err) => {
                warn!("failed to load globe data: {err}");
                self.interaction
                    .notify_error(format!("Failed to load globe data: {err}"));
                return Err(err);
            }
        }
        self.refresh_trips().await;
        Ok(())
    }

    fn set_data(&mut self, data: GlobeData) {
        let style = self.layer.style();
        self.markers = data
            .airports()
            .iter()
            .map(|a| AirportMarker::for_airport(a, style.lift, style.marker_radius, style.marker_color))
            .collect();
        self.data = Arc::new(data);
    }

    pub async fn refresh_trips(&mut self) {
        match self.service.fetch_trips().await {
            Ok(trips) => self.interaction.set_trips(trips),
            Err(err) => self.interaction.trips_failed(&err),
        }
    }

    /// Handles a click on the marker of `airport`.
    ///
    /// Returns `None` for airports that are not part of the loaded dataset.
    pub async fn pick_airport(&mut self, airport: &AirportId) -> Option<PickOutcome> {
        let Some(picked) = self.data.airport(airport).cloned() else {
            debug!("pick on unknown airport {airport}");
            return None;
        };
        let outcome = self.interaction.pick_airport(&picked);
        if let PickOutcome::DetailRequested(id) = &outcome {
            match self.service.fetch_airport_detail(id.clone()).await {
                Ok(detail) => {
                    self.interaction.show_airport_detail(detail);
                }
                Err(err) => self.interaction.airport_detail_failed(id, &err),
            }
        }
        Some(outcome)
    }

    /// Handles a click given as a world-space ray; misses do nothing.
    pub async fn pick_ray(&mut self, ray: Ray, opts: PickOptions) -> Option<PickOutcome> {
        let hit = pick_marker(&self.markers, ray, opts)?;
        debug!("ray hit {} at distance {:.4}", hit.airport, hit.distance);
        self.pick_airport(&hit.airport).await
    }

    pub fn start_scheduling(&mut self) {
        self.interaction.start_scheduling();
    }

    pub fn cancel_scheduling(&mut self) {
        self.interaction.cancel_scheduling();
    }

    /// Sets the departure time from a `YYYY-MM-DDTHH:MM` string.
    pub fn set_departure_time(&mut self, input: &str) -> Result<(), ParseTimeError> {
        let time = parse_departure_time(input)?;
        self.interaction.set_departure_time(time);
        Ok(())
    }

    pub fn confirm_departure_time(&mut self) {
        self.interaction.confirm_departure_time();
    }

    /// Submits the session to the backend.
    ///
    /// Returns `None` when nothing was submitted. The trip list is refreshed
    /// whenever the backend created a trip.
    pub async fn confirm(&mut self) -> Option<SubmissionOutcome> {
        let pending = self.interaction.begin_submission()?;
        let result = self.service.submit_trip(pending.request).await;
        let outcome = self.interaction.finish_submission(pending.ticket, result);
        if outcome.created_trip() {
            self.refresh_trips().await;
        }
        Some(outcome)
    }

    /// Toggles the trip selection, fetching its detail when selecting.
    pub async fn select_trip(&mut self, trip: TripId) -> TripSelection {
        let selection = self.interaction.toggle_trip(trip);
        if let TripSelection::Fetch(id) = selection {
            match self.service.fetch_trip_detail(id).await {
                Ok(detail) => {
                    self.interaction.show_trip(detail);
                }
                Err(err) => self.interaction.trip_failed(id, &err),
            }
        }
        selection
    }

    pub fn render(&self) -> GlobeSnapshot {
        self.interaction.render(&self.layer, &self.data)
    }
}
