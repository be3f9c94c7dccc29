//! Adjacency-list graph keyed by vertex name.

use std::collections::HashMap;

use gridpath_core::Point;

use crate::PathError;

/// A graph vertex: a unique name plus optional grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    position: Option<Point>,
}

impl Vertex {
    /// A vertex with no spatial metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
        }
    }

    /// A vertex located at `position`.
    pub fn with_position(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position: Some(position),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// A directed edge, owned by the adjacency list of its source vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
    weight: u32,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Directed graph: vertices in insertion order, each with its outgoing
/// edges.
///
/// An edge's target may be registered after the edge itself. Searches
/// resolve targets lazily and fail with [`PathError::UnknownVertex`] if one
/// never shows up.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
        }
    }

    /// Register a vertex and return its slot.
    ///
    /// Re-adding a name replaces the stored vertex in place: its insertion
    /// slot and its outgoing edges are kept, only the metadata changes.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        if let Some(&slot) = self.index.get(vertex.name()) {
            self.vertices[slot] = vertex;
            return slot;
        }
        let slot = self.vertices.len();
        self.index.insert(vertex.name.clone(), slot);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        slot
    }

    /// Append `edge` to the adjacency list of `from`, which must be the
    /// edge's own source.
    pub fn add_edge(&mut self, from: &str, edge: Edge) -> Result<(), PathError> {
        let slot = *self
            .index
            .get(from)
            .ok_or_else(|| PathError::UnknownVertex(from.to_string()))?;
        if edge.from() != from {
            return Err(PathError::EdgeSource {
                vertex: from.to_string(),
                edge_from: edge.from().to_string(),
            });
        }
        self.push_edge(slot, edge);
        Ok(())
    }

    pub(crate) fn push_edge(&mut self, slot: usize, edge: Edge) {
        debug_assert_eq!(edge.from(), self.vertices[slot].name());
        self.adjacency[slot].push(edge);
    }

    /// Outgoing edges of `name`; empty for unknown vertices.
    pub fn edges(&self, name: &str) -> &[Edge] {
        self.index
            .get(name)
            .map(|&slot| self.adjacency[slot].as_slice())
            .unwrap_or(&[])
    }

    /// Look up a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.index.get(name).map(|&slot| &self.vertices[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &str> {
        self.vertices.iter().map(|v| v.name())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
