use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },
}

/// Directed graph over vertices `0..vertex_count` with adjacency lists that
/// preserve insertion order. Duplicate edges and self-loops are allowed.
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn create(vertex_count: usize) -> Graph {
        Graph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Appends the edge `u -> v`. Endpoints are validated here, not at
    /// analysis time.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        Ok(())
    }

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|targets| targets.len()).sum()
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| targets.iter().map(move |&v| (u, v)))
    }

    /// Returns a new graph with every edge reversed.
    pub fn transpose(&self) -> Graph {
        let mut reversed = Graph::create(self.vertex_count);
        for (u, v) in self.iter_edges() {
            reversed.adjacency[v].push(u);
        }
        reversed
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (u, targets) in self.adjacency.iter().enumerate() {
            write!(f, "{} ->", u)?;
            for v in targets {
                write!(f, " {}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
