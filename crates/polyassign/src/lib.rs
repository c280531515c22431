//! Nearest-polygon assignment over a geographic network.
//!
//! Pipeline
//! - `graph`: undirected adjacency lists from an edge list (order-preserving).
//! - `cycles`: breadth-first path extension that records every closed walk.
//! - `assign`: planar centroids per cycle and haversine nearest-centroid choice.
//! - `records`: the line-oriented input reader and report writer.
//!
//! API Policy
//! - Components are exposed individually so callers can stop after any stage.
//! - `pipeline::run` wires them together the way the CLI does.

pub mod api;
pub mod assign;
pub mod curvature;
pub mod cycles;
pub mod error;
pub mod geo;
pub mod graph;
pub mod pipeline;
pub mod records;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{AssignError, Error, ParseError};
pub use types::{Cycle, LatLon, Network, NodeId, NodeTable, User, UserId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::assign::{assign_users, Assignment};
    pub use crate::cycles::{find_cycles, find_cycles_with, CycleSearch, SearchCfg};
    pub use crate::geo::{haversine_km, planar_centroid, EARTH_RADIUS_KM};
    pub use crate::graph::Graph;
    pub use crate::pipeline::{run, Outcome};
    pub use crate::records::{parse_network, CycleReport, Report};
    pub use crate::types::{Cycle, LatLon, Network, NodeId, NodeTable, User, UserId};
}
