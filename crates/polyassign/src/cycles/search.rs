//! Breadth-first path extension runner.

use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;
use crate::types::{Cycle, NodeId};

use super::types::{CycleSearch, SearchCfg};

/// All cycles in discovery order (seed order × BFS dequeue order), unbounded.
pub fn find_cycles(graph: &Graph) -> Vec<Cycle> {
    find_cycles_with(graph, SearchCfg::unbounded()).cycles
}

/// Same traversal as `find_cycles`, honouring the ceilings in `cfg`.
pub fn find_cycles_with(graph: &Graph, cfg: SearchCfg) -> CycleSearch {
    BfsRunner::new(graph, cfg).solve()
}

/// Shared context and accumulators for one search.
struct BfsRunner<'a> {
    g: &'a Graph,
    cfg: SearchCfg,
    cycles: Vec<Cycle>,
    truncated: bool,
    halted: bool,
}

impl<'a> BfsRunner<'a> {
    fn new(g: &'a Graph, cfg: SearchCfg) -> Self {
        Self {
            g,
            cfg,
            cycles: Vec::new(),
            truncated: false,
            halted: false,
        }
    }

    fn solve(mut self) -> CycleSearch {
        let g = self.g;
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(g.len());
        for &seed in g.node_ids() {
            if visited.contains(&seed) {
                continue;
            }
            self.extend_from(seed);
            visited.insert(seed);
            if self.halted {
                break;
            }
        }
        CycleSearch {
            cycles: self.cycles,
            truncated: self.truncated,
        }
    }

    fn extend_from(&mut self, seed: NodeId) {
        let g = self.g;
        let mut queue: VecDeque<Vec<NodeId>> = VecDeque::new();
        queue.push_back(vec![seed]);
        while let Some(path) = queue.pop_front() {
            // Paths are never empty: every entry starts at `seed`.
            let cur = path[path.len() - 1];
            for &w in g.neighbors(cur) {
                if w == seed && path.len() > 2 {
                    if !self.record(&path) {
                        return;
                    }
                } else if !path.contains(&w) {
                    if self.cfg.max_path_len.is_some_and(|cap| path.len() >= cap) {
                        self.truncated = true;
                        continue;
                    }
                    let mut next = Vec::with_capacity(path.len() + 1);
                    next.extend_from_slice(&path);
                    next.push(w);
                    queue.push_back(next);
                }
            }
        }
    }

    /// Returns false once `max_cycles` forbids recording more.
    fn record(&mut self, path: &[NodeId]) -> bool {
        if self.cfg.max_cycles.is_some_and(|cap| self.cycles.len() >= cap) {
            self.truncated = true;
            self.halted = true;
            return false;
        }
        self.cycles.push(Cycle(path.to_vec()));
        true
    }
}
