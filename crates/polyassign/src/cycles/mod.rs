//! Cycle discovery: exhaustive breadth-first path extension.
//!
//! Purpose
//! - Enumerate every simple closed walk reachable from each seed node by
//!   extending paths that never revisit a node, closing when a neighbour of the
//!   path's tip is the seed and the path already holds more than two nodes.
//!
//! Behaviour worth knowing
//! - No deduplication: one geometric loop is reported once per seed on it and
//!   once per direction. Callers that need one representative per loop should
//!   compare with `Cycle::same_loop`.
//! - Work is exponential in the number of simple paths. `SearchCfg` carries
//!   optional ceilings; the default is unbounded.
//!
//! Split into `types.rs` (config and result) and `search.rs` (the runner).

mod search;
mod types;

pub use search::{find_cycles, find_cycles_with};
pub use types::{CycleSearch, SearchCfg};
