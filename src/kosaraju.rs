use crate::graph::Graph;

impl Graph {
    /// Partitions the vertex set into strongly connected components using
    /// Kosaraju's two-pass algorithm. The order of the returned components
    /// and the order of vertices within each component are unspecified;
    /// callers may rely only on the partition itself.
    pub fn find_sccs(&self) -> Vec<Vec<usize>> {
        let order = postorder(self);
        let reversed = self.transpose();

        let mut visited = vec![false; self.vertex_count()];
        let mut sccs = Vec::new();

        //walk last-finished-first; every unvisited vertex roots a new component
        for &root in order.iter().rev() {
            if visited[root] {
                continue;
            }
            sccs.push(collect_component(&reversed, root, &mut visited));
        }

        sccs
    }
}

//finish order of a full DFS sweep, roots taken in increasing id order.
//iterative so a path graph of length n costs O(n) heap, not O(n) call stack.
fn postorder(graph: &Graph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some((v, next)) = stack.pop() {
            match graph.neighbors(v).get(next) {
                Some(&w) => {
                    stack.push((v, next + 1));
                    if !visited[w] {
                        visited[w] = true;
                        stack.push((w, 0));
                    }
                }
                None => order.push(v),
            }
        }
    }

    order
}

fn collect_component(graph: &Graph, root: usize, visited: &mut [bool]) -> Vec<usize> {
    visited[root] = true;
    let mut component = vec![root];
    let mut stack = vec![root];

    while let Some(v) = stack.pop() {
        for &w in graph.neighbors(v) {
            if !visited[w] {
                visited[w] = true;
                component.push(w);
                stack.push(w);
            }
        }
    }

    component
}
