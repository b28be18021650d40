use flights::{Airport, AirportId};
use foundation::math::{Vec3, project};

use crate::components::Color;

/// One pickable marker per airport.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportMarker {
    pub airport: AirportId,
    pub position: Vec3,
    pub radius: f64,
    pub color: Color,
}

impl AirportMarker {
    /// Places a marker for `airport` on a sphere of `lift` radius.
    pub fn for_airport(airport: &Airport, lift: f64, radius: f64, color: Color) -> Self {
        Self {
            airport: airport.id.clone(),
            position: project(airport.lat, airport.lon, lift),
            radius,
            color,
        }
    }
}
