use std::collections::BTreeSet;

use crate::airport::AirportId;
use crate::route::{Route, RouteKey, canonicalize};

/// Set of canonical route keys that should render emphasized.
///
/// Built wholesale from a trip's segments and queried once per rendered route.
///
/// Ordering contract:
/// - Iteration yields keys in ascending `RouteKey` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    keys: BTreeSet<RouteKey>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Route>) -> Self {
        let keys = segments.into_iter().map(Route::key).collect();
        Self { keys }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Inserts the canonical key of `route`.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, route: &Route) -> bool {
        self.keys.insert(route.key())
    }

    pub fn contains_key(&self, key: &RouteKey) -> bool {
        self.keys.contains(key)
    }

    pub fn contains(&self, source: &AirportId, target: &AirportId) -> bool {
        self.contains_key(&canonicalize(source, target))
    }

    pub fn is_highlighted(&self, route: &Route) -> bool {
        self.contains(&route.source, &route.target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteKey> + '_ {
        self.keys.iter()
    }
}
