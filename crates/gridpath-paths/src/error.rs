//! Error types for graph construction and search.

use std::fmt;

/// Structural failures surfaced by the graph, the frontier queue and the
/// pathfinders.
///
/// An exhausted search is not an error: it yields a
/// [`SearchResult`](crate::SearchResult) with an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A vertex name was not registered in the graph.
    UnknownVertex(String),
    /// An edge was filed under a vertex other than its own source.
    EdgeSource { vertex: String, edge_from: String },
    /// A vertex taking part in a search carries no grid position.
    MissingPosition(String),
    /// `pop` was called on an empty frontier.
    EmptyQueue,
    /// A bounded depth-first search expanded this many frames without
    /// reaching the target or running out of branches.
    FrameLimit(usize),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex(name) => write!(f, "vertex {name:?} not present in graph"),
            Self::EdgeSource { vertex, edge_from } => {
                write!(f, "edge from {edge_from:?} added to vertex {vertex:?}")
            }
            Self::MissingPosition(name) => write!(f, "vertex {name:?} has no grid position"),
            Self::EmptyQueue => write!(f, "pop from an empty priority queue"),
            Self::FrameLimit(n) => write!(f, "search gave up after {n} frames"),
        }
    }
}

impl std::error::Error for PathError {}

/// Returned when an algorithm name does not match any known pathfinder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected dijkstra, astar, best-first or depth-first)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
