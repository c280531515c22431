//! Identifiers and plain data carried between pipeline stages.
//!
//! Kept small and explicit so `graph`, `cycles` and `assign` read cleanly.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Network node identifier as given in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

/// User identifier as given in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic position in degrees. No range checks are applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Node coordinates keyed by id; iteration follows first insertion.
/// Re-inserting an id overwrites its position but keeps its original slot.
#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    order: Vec<NodeId>,
    pos: HashMap<NodeId, LatLon>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, at: LatLon) {
        if self.pos.insert(id, at).is_none() {
            self.order.push(id);
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<LatLon> {
        self.pos.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.pos.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, LatLon)> + '_ {
        self.order.iter().map(move |id| (*id, self.pos[id]))
    }
}

impl FromIterator<(NodeId, LatLon)> for NodeTable {
    fn from_iter<I: IntoIterator<Item = (NodeId, LatLon)>>(iter: I) -> Self {
        let mut table = NodeTable::new();
        for (id, at) in iter {
            table.insert(id, at);
        }
        table
    }
}

/// A user position to be matched against cycle centroids.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub pos: LatLon,
}

impl User {
    #[inline]
    pub fn new(id: i64, lat: f64, lon: f64) -> Self {
        Self {
            id: UserId(id),
            pos: LatLon::new(lat, lon),
        }
    }
}

/// Closed walk stored as an open path; the first node also closes the loop.
///
/// Holds at least three distinct nodes when produced by `cycles`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle(pub Vec<NodeId>);

impl Cycle {
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `other` lists the same loop, allowing any start node and either direction.
    pub fn same_loop(&self, other: &[NodeId]) -> bool {
        let n = self.0.len();
        if n != other.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        let Some(shift) = other.iter().position(|id| *id == self.0[0]) else {
            return false;
        };
        let forward = (0..n).all(|k| self.0[k] == other[(shift + k) % n]);
        let backward = (0..n).all(|k| self.0[k] == other[(shift + n - k) % n]);
        forward || backward
    }
}

/// Everything read from one input document.
#[derive(Clone, Debug, Default)]
pub struct Network {
    pub nodes: NodeTable,
    pub edges: Vec<(NodeId, NodeId)>,
    pub users: Vec<User>,
}
