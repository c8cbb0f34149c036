use itertools::Itertools;
use strong_connectivity::graph::Graph;

fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::create(vertex_count);
    for &(u, v) in edges {
        graph
            .add_edge(u, v)
            .expect("sample edges use valid vertex ids");
    }
    graph
}

fn report(label: &str, graph: &Graph) {
    println!("{}", label);
    print!("{}", graph);

    let sccs = graph.find_sccs();
    let rendered = sccs
        .iter()
        .map(|scc| format!("[{}]", scc.iter().join(" ")))
        .join(" ");
    println!("SCCs: {}", rendered);
    println!(
        "Minimum edges to add: {}",
        graph.min_edges_to_make_strongly_connected()
    );
    println!();
}

fn main() {
    let cycle_with_tail = graph_from_edges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]);
    report("Example 1: cycle with a tail", &cycle_with_tail);

    let single_cycle = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    report("Example 2: already strongly connected", &single_cycle);

    let two_cycles = graph_from_edges(
        7,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (6, 5)],
    );
    report("Example 3: two cycles and a feeder", &two_cycles);
}
