/*!
# ssp-solve

Approximation algorithms for the Shortest Common Superstring problem: [`greedy`], [`tgreedy`],
[`gha`], and [`ca`]. Each builds and discards its own graph representation internally — see
[`overlap_graph`] for the GREEDY/TGREEDY engine and [`hierarchical_graph`] for the GHA/CA engine.
*/

pub mod core;
pub mod hierarchical_graph;
#[cfg(feature = "logging")]
mod settings;
pub mod overlap_graph;

pub use crate::core::error::{Result, SspError};
pub use crate::core::filter::ensure_substring_free;
pub use crate::hierarchical_graph::{equal_graphs, HierarchicalGraph};
pub use crate::overlap_graph::{greedy, tgreedy};

/// Solves the given SSP instance with the Greedy Hierarchical Algorithm.
pub fn gha(strings: &[String]) -> Result<String> {
    hierarchical_graph::gha(strings)
}

/// Solves the given SSP instance with the Collapsing Algorithm (double-and-collapse over the
/// trivial solution).
pub fn ca(strings: &[String]) -> Result<String> {
    hierarchical_graph::ca(strings)
}
