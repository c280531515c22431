//! End-to-end run: reference checks, graph, cycles, assignment, report.

use serde::Serialize;

use crate::assign::assign_users;
use crate::cycles::{find_cycles_with, SearchCfg};
use crate::error::Error;
use crate::graph::Graph;
use crate::records::Report;
use crate::types::Network;

/// Report plus search statistics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub report: Report,
    /// True if a `SearchCfg` ceiling cut the cycle search short.
    pub truncated: bool,
    pub graph_nodes: usize,
}

/// Run the whole transform on a parsed network.
///
/// Every edge endpoint must exist in the node table; the first dangling id
/// fails the run before any search work.
pub fn run(net: &Network, cfg: SearchCfg) -> Result<Outcome, Error> {
    for (i, &(u, v)) in net.edges.iter().enumerate() {
        for node in [u, v] {
            if !net.nodes.contains(node) {
                return Err(Error::Reference { node, edge: i + 1 });
            }
        }
    }
    let graph = Graph::build(net.edges.iter().copied());
    let search = find_cycles_with(&graph, cfg);
    let assignment = assign_users(&net.users, &search.cycles, &net.nodes)?;
    Ok(Outcome {
        report: Report::new(search.cycles, assignment),
        truncated: search.truncated,
        graph_nodes: graph.len(),
    })
}
