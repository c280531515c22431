//! Nearest-centroid assignment of users to cycles.
//!
//! Each cycle's centroid is the planar mean of its node coordinates; a user goes
//! to the cycle whose centroid is closest by haversine distance. The comparison
//! is strict, so among equal distances the lowest cycle index wins.

use serde::Serialize;

use crate::error::AssignError;
use crate::geo::{haversine_km, planar_centroid};
use crate::types::{Cycle, LatLon, NodeTable, User, UserId};

/// Per-cycle user lists (user input order), aligned with the cycle slice.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Assignment {
    pub centroids: Vec<LatLon>,
    pub per_cycle: Vec<Vec<UserId>>,
}

impl Assignment {
    pub fn users_of(&self, cycle: usize) -> &[UserId] {
        self.per_cycle
            .get(cycle)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.per_cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_cycle.is_empty()
    }
}

/// Assign every user to exactly one cycle.
///
/// Errors
/// - `NoPolygons` if `users` is non-empty and `cycles` is empty.
/// - `UnknownNode` if a cycle names a node missing from `nodes`.
/// - `EmptyCycle` if a cycle holds no nodes.
pub fn assign_users(
    users: &[User],
    cycles: &[Cycle],
    nodes: &NodeTable,
) -> Result<Assignment, AssignError> {
    if cycles.is_empty() && !users.is_empty() {
        return Err(AssignError::NoPolygons { users: users.len() });
    }
    let centroids = cycles
        .iter()
        .enumerate()
        .map(|(i, c)| cycle_centroid(i, c, nodes))
        .collect::<Result<Vec<_>, _>>()?;
    let mut per_cycle = vec![Vec::new(); cycles.len()];
    for user in users {
        let idx = nearest(user.pos, &centroids);
        per_cycle[idx].push(user.id);
    }
    Ok(Assignment {
        centroids,
        per_cycle,
    })
}

fn cycle_centroid(
    index: usize,
    cycle: &Cycle,
    nodes: &NodeTable,
) -> Result<LatLon, AssignError> {
    let coords = cycle
        .nodes()
        .iter()
        .map(|&id| nodes.get(id).ok_or(AssignError::UnknownNode(id)))
        .collect::<Result<Vec<_>, _>>()?;
    planar_centroid(coords).ok_or(AssignError::EmptyCycle(index))
}

/// Index of the first strictly-closest centroid. `centroids` must be non-empty.
/// If no distance compares (NaN input), the last cycle receives the user.
fn nearest(pos: LatLon, centroids: &[LatLon]) -> usize {
    let mut best = f64::INFINITY;
    let mut best_idx = None;
    for (i, c) in centroids.iter().enumerate() {
        let d = haversine_km(pos, *c);
        if d < best {
            best = d;
            best_idx = Some(i);
        }
    }
    best_idx.unwrap_or(centroids.len() - 1)
}
