use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::graph::Graph;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SccIndex(pub usize);

fn scc_membership(sccs: &[Vec<usize>], vertex_count: usize) -> Vec<SccIndex> {
    let mut scc_of = vec![SccIndex(0); vertex_count];
    for (i, scc) in sccs.iter().enumerate() {
        for &v in scc {
            scc_of[v] = SccIndex(i);
        }
    }
    scc_of
}

//deduplicated inter-component edges; a set so parallel condensed edges count once
fn condensation_edges(graph: &Graph, scc_of: &[SccIndex]) -> FxIndexSet<(SccIndex, SccIndex)> {
    let mut edges = FxIndexSet::default();
    for (u, v) in graph.iter_edges() {
        let u_scc = scc_of[u];
        let v_scc = scc_of[v];
        if u_scc != v_scc {
            edges.insert((u_scc, v_scc));
        }
    }
    edges
}

impl Graph {
    /// Minimum number of edges whose addition makes the whole graph strongly
    /// connected: `max(sources, sinks)` over the condensation DAG, 0 if the
    /// graph already is a single component.
    pub fn min_edges_to_make_strongly_connected(&self) -> usize {
        let sccs = self.find_sccs();
        if sccs.len() == 1 {
            return 0;
        }

        let scc_of = scc_membership(&sccs, self.vertex_count());
        let edges = condensation_edges(self, &scc_of);

        let mut in_degree = vec![0usize; sccs.len()];
        let mut out_degree = vec![0usize; sccs.len()];
        for &(src, dst) in edges.iter() {
            out_degree[src.0] += 1;
            in_degree[dst.0] += 1;
        }

        let sources = in_degree.iter().filter(|&&degree| degree == 0).count();
        let sinks = out_degree.iter().filter(|&&degree| degree == 0).count();
        std::cmp::max(sources, sinks)
    }

    pub fn is_strongly_connected(&self) -> bool {
        self.find_sccs().len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::create(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn cycle_with_a_tail_needs_one_edge() {
        let graph = graph_from_edges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 1);
    }

    #[test]
    fn two_cycles_and_a_feeder_need_two_edges() {
        let graph = graph_from_edges(
            7,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (6, 5)],
        );
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 2);
    }

    #[test]
    fn full_cycle_needs_nothing() {
        let graph = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 0);
        assert!(graph.is_strongly_connected());
    }

    #[test]
    fn edgeless_graph_needs_one_edge_per_vertex() {
        let graph = Graph::create(4);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 4);
        assert!(!graph.is_strongly_connected());
    }

    #[test]
    fn single_vertex_is_already_strongly_connected() {
        let graph = Graph::create(1);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 0);
        assert!(graph.is_strongly_connected());
    }

    #[test]
    fn empty_graph_needs_nothing() {
        let graph = Graph::create(0);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 0);
        assert!(graph.is_strongly_connected());
    }

    //components with no condensed edges at all count as both source and sink
    #[test]
    fn isolated_components_count_on_both_sides() {
        let graph = graph_from_edges(5, &[(0, 1), (1, 0), (2, 3), (3, 2)]);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 3);
    }

    #[test]
    fn out_star_needs_one_edge_per_leaf() {
        let graph = graph_from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 3);
    }

    #[test]
    fn duplicate_edges_and_self_loops_change_nothing() {
        let mut graph = graph_from_edges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]);
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(4, 4).unwrap();
        assert_eq!(graph.min_edges_to_make_strongly_connected(), 1);
    }
}
