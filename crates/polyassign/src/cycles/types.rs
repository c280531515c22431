//! Search configuration and result.

use crate::types::Cycle;

/// Search ceilings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    /// Paths holding this many nodes are not extended further.
    pub max_path_len: Option<usize>,
    /// Stop the whole search once this many cycles are recorded.
    pub max_cycles: Option<usize>,
}

impl SearchCfg {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_path_len.is_none() && self.max_cycles.is_none()
    }
}

/// Cycles in discovery order plus whether a ceiling cut the search short.
#[derive(Clone, Debug, Default)]
pub struct CycleSearch {
    pub cycles: Vec<Cycle>,
    pub truncated: bool,
}
