//! Curated re-exports for callers that want one import path per stage.
//!
//! Prefer `crate::prelude` for glob imports; this module names each
//! component explicitly so call sites read like the pipeline does.

// Distance model
pub use crate::geo::{haversine_km as distance_km, planar_centroid, EARTH_RADIUS_KM};
// Graph builder
pub use crate::graph::Graph;
// Cycle finder
pub use crate::cycles::{find_cycles, find_cycles_with, CycleSearch, SearchCfg};
// Polygon assigner
pub use crate::assign::{assign_users, Assignment};
// Unused by the pipeline; kept for callers working with 3D loops.
pub use crate::curvature::absolute_curvature;
// Line-oriented records and end-to-end run
pub use crate::pipeline::{run, Outcome};
pub use crate::records::{parse_network, CycleReport, Report};
