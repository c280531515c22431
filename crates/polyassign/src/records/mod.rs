//! Line-oriented records: the network reader and the report writer.
//!
//! Input, one record per line with whitespace-separated tokens:
//! `n`, then `n` × `id lat lon`; `m`, then `m` × `u v`; `t`, then `t` × `id lat lon`.
//!
//! Output: the cycle count, then per cycle four lines (node count, node ids,
//! user count, user ids). Empty id lists print as empty lines.

mod parse;
mod report;

pub use parse::parse_network;
pub use report::{CycleReport, Report};

#[cfg(test)]
mod tests;
