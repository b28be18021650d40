use std::collections::HashMap;

use crate::airport::{Airport, AirportId};
use crate::route::Route;

/// Airports and routes shown on the globe. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobeData {
    airports: Vec<Airport>,
    routes: Vec<Route>,
    by_id: HashMap<AirportId, usize>,
}

impl GlobeData {
    /// Builds the dataset and its id index. On duplicate ids the first
    /// airport wins.
    pub fn new(airports: Vec<Airport>, routes: Vec<Route>) -> Self {
        let mut by_id = HashMap::with_capacity(airports.len());
        for (idx, airport) in airports.iter().enumerate() {
            by_id.entry(airport.id.clone()).or_insert(idx);
        }
        Self {
            airports,
            routes,
            by_id,
        }
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn airport(&self, id: &AirportId) -> Option<&Airport> {
        self.by_id.get(id).and_then(|&idx| self.airports.get(idx))
    }

    /// Both endpoints of `route`, or `None` if either is not loaded.
    pub fn endpoints(&self, route: &Route) -> Option<(&Airport, &Airport)> {
        Some((self.airport(&route.source)?, self.airport(&route.target)?))
    }
}
