//! Report writer for the line-oriented and JSON outputs.

use std::io::{self, Write};

use serde::Serialize;

use crate::assign::Assignment;
use crate::types::{Cycle, LatLon, NodeId, UserId};

/// One discovered cycle with its centroid and assigned users.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleReport {
    pub nodes: Vec<NodeId>,
    /// Absent when the report was built without an assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<LatLon>,
    pub users: Vec<UserId>,
}

/// Result document in cycle discovery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub cycles: Vec<CycleReport>,
}

impl Report {
    /// Pair cycles with their assignment. Both must come from the same run.
    pub fn new(cycles: Vec<Cycle>, assignment: Assignment) -> Self {
        debug_assert!(
            assignment.is_empty() || assignment.len() == cycles.len(),
            "assignment must align with cycles"
        );
        let Assignment {
            centroids,
            per_cycle,
        } = assignment;
        let mut centroids = centroids.into_iter();
        let mut per_cycle = per_cycle.into_iter();
        let cycles = cycles
            .into_iter()
            .map(|c| CycleReport {
                nodes: c.0,
                centroid: centroids.next(),
                users: per_cycle.next().unwrap_or_default(),
            })
            .collect();
        Self { cycles }
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Write the line-oriented form.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.cycles.len())?;
        for c in &self.cycles {
            writeln!(out, "{}", c.nodes.len())?;
            writeln!(out, "{}", join(&c.nodes))?;
            writeln!(out, "{}", c.users.len())?;
            writeln!(out, "{}", join(&c.users))?;
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
