//! Strongly connected component analysis for directed graphs: Kosaraju's
//! two-pass SCC discovery and the condensation-based minimum count of edges
//! to add for full strong connectivity.

pub mod condensation;
pub mod graph;
pub mod kosaraju;
