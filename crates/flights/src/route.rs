use std::fmt;

use serde::{Deserialize, Serialize};

use crate::airport::AirportId;

/// A stored route. Direction is kept as loaded but ignored for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub source: AirportId,
    pub target: AirportId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Route {
    pub fn new(source: impl Into<AirportId>, target: impl Into<AirportId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            distance_km: None,
        }
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance_km = Some(km);
        self
    }

    pub fn key(&self) -> RouteKey {
        canonicalize(&self.source, &self.target)
    }
}

/// Order-independent identity of a route.
///
/// Invariant: `low <= high` under `AirportId`'s ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteKey {
    low: AirportId,
    high: AirportId,
}

impl RouteKey {
    pub fn endpoints(&self) -> (&AirportId, &AirportId) {
        (&self.low, &self.high)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

pub fn canonicalize(a: &AirportId, b: &AirportId) -> RouteKey {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    RouteKey {
        low: low.clone(),
        high: high.clone(),
    }
}
