//! Instant navigation chain
//!
//! Ordered run of locations that are mutually reachable via instant
//! Back/Forward: each consecutive pair was classified instant-back-capable
//! at the moment it was recorded. Entry 0 is the oldest. The chain only
//! grows from its current tail; recording a pair that branches off an
//! earlier entry discards the rest of the history. All mutation happens
//! synchronously within a single event-handling pass.

use serde::{Deserialize, Serialize};

use waypoint_location::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainEntry {
    pub location: Location,
    pub route_indices: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct InstantNavigationChain {
    entries: Vec<ChainEntry>,
    /// Cursor at the entry matching the current location.
    index: usize,
}

impl InstantNavigationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `previous_location -> location` is instant-back-capable.
    ///
    /// When `previous_location` is not the current tail the chain restarts
    /// from it: only an unbroken run of qualifying transitions preserves
    /// instant-Back capability.
    pub fn add_instant_back(
        &mut self,
        location: Location,
        previous_location: Location,
        route_indices: Vec<usize>,
        previous_route_indices: Vec<usize>,
    ) {
        let previous_is_tail = self
            .entries
            .last()
            .map(|entry| entry.location.same_entry(&previous_location))
            .unwrap_or(false);

        if !previous_is_tail {
            self.entries.clear();
            self.entries.push(ChainEntry {
                location: previous_location,
                route_indices: previous_route_indices,
            });
        }

        self.entries.push(ChainEntry {
            location,
            route_indices,
        });
        self.index = self.entries.len() - 1;
    }

    /// Move the cursor to `location` after a POP within the chain.
    /// Silent no-op when the location is not recorded; callers must not
    /// assume membership.
    pub fn update_index(&mut self, location: &Location) {
        if let Some(position) = self.position(location) {
            self.index = position;
        }
    }

    /// Discard the whole chain. Called whenever a transition is neither
    /// instant nor instant-back.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    /// Whether `previous_location -> location` can be served instantly.
    ///
    /// Both locations must be recorded, and when the new location carries a
    /// POP delta the positional difference must match it. A chain with
    /// fewer than two entries never qualifies.
    pub fn is_instant_transition(&self, previous_location: &Location, location: &Location) -> bool {
        if self.entries.len() < 2 {
            return false;
        }
        let (Some(from), Some(to)) = (
            self.position(previous_location),
            self.position(location),
        ) else {
            return false;
        };
        match location.delta {
            Some(delta) => to as i64 - from as i64 == delta,
            None => true,
        }
    }

    fn position(&self, location: &Location) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.location.same_entry(location))
    }

    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
