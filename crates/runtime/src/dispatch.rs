use flights::{Airport, AirportId};

use crate::scheduling::{SchedulingEvent, SchedulingSession, Step};

/// What a pick on an airport marker means in the current mode.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    ScheduleOriginPicked(Airport),
    ScheduleDestinationPicked(Airport),
    /// Browsing: show the airport's detail panel.
    DetailRequested(AirportId),
}

impl PickOutcome {
    /// The scheduling event this outcome feeds, if any.
    pub fn scheduling_event(&self) -> Option<SchedulingEvent> {
        match self {
            PickOutcome::ScheduleOriginPicked(a) | PickOutcome::ScheduleDestinationPicked(a) => {
                Some(SchedulingEvent::AirportPicked(a.clone()))
            }
            PickOutcome::DetailRequested(_) => None,
        }
    }
}

/// Resolves a pick against the scheduling mode. Only the two picking steps
/// consume the gesture; every other step falls back to a detail lookup.
pub fn dispatch(session: &SchedulingSession, airport: &Airport) -> PickOutcome {
    match session.step() {
        Step::SelectOrigin => PickOutcome::ScheduleOriginPicked(airport.clone()),
        Step::SelectDestination => PickOutcome::ScheduleDestinationPicked(airport.clone()),
        Step::Idle | Step::SetTime => PickOutcome::DetailRequested(airport.id.clone()),
    }
}
