//! Per-run distance bookkeeping and path reconstruction.

use std::collections::HashMap;

use gridpath_core::Point;

use crate::{Graph, PathError};

/// Tentative cost of a vertex no search has reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

/// Search bookkeeping for one vertex.
///
/// `previous` names the vertex this one was reached from. Following it
/// repeatedly ends at the start vertex, whose `previous` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceVertex {
    pub position: Option<Point>,
    pub weight: u32,
    pub previous: Option<String>,
}

/// Distance records for every vertex of a graph, keyed by vertex name.
///
/// Created fresh for each search and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    records: HashMap<String, DistanceVertex>,
}

impl DistanceMap {
    /// Seed every vertex of `graph` as [`UNREACHABLE`].
    pub fn seeded(graph: &Graph) -> Self {
        let mut records = HashMap::with_capacity(graph.len());
        for name in graph.vertices() {
            let position = graph.vertex(name).and_then(|v| v.position());
            records.insert(
                name.to_string(),
                DistanceVertex {
                    position,
                    weight: UNREACHABLE,
                    previous: None,
                },
            );
        }
        Self { records }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&DistanceVertex> {
        self.records.get(name)
    }

    /// Tentative cost of `name`; [`UNREACHABLE`] if it has none yet.
    pub fn weight(&self, name: &str) -> u32 {
        self.records.get(name).map_or(UNREACHABLE, |r| r.weight)
    }

    /// Overwrite the record for `name`.
    pub fn set(&mut self, name: &str, position: Option<Point>, weight: u32, previous: Option<&str>) {
        let record = DistanceVertex {
            position,
            weight,
            previous: previous.map(str::to_string),
        };
        match self.records.get_mut(name) {
            Some(slot) => *slot = record,
            None => {
                self.records.insert(name.to_string(), record);
            }
        }
    }

    /// Positions along the backpointer chain, from `target` back to the
    /// start.
    pub fn path_to_target(&self, target: &str) -> Result<Vec<Point>, PathError> {
        let mut path = Vec::new();
        let mut cursor = Some(target);
        while let Some(name) = cursor {
            let record = self
                .records
                .get(name)
                .ok_or_else(|| PathError::UnknownVertex(name.to_string()))?;
            let position = record
                .position
                .ok_or_else(|| PathError::MissingPosition(name.to_string()))?;
            path.push(position);
            cursor = record.previous.as_deref();
        }
        Ok(path)
    }
}

/// What a pathfinder returns: the vertices it settled, in order, and the
/// path it found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Vertex names in the order they were settled. No duplicates.
    pub visited: Vec<String>,
    /// Positions from start to target inclusive; empty when no path exists.
    pub path: Vec<Point>,
    /// Total edge weight of `path`; `None` when no path exists.
    pub cost: Option<u32>,
}

impl SearchResult {
    /// Package a successful search: the chain ending at `target` is walked
    /// and returned in start-to-target order.
    pub fn found(visited: Vec<String>, distance: &DistanceMap, target: &str) -> Result<Self, PathError> {
        let mut path = distance.path_to_target(target)?;
        path.reverse();
        Ok(Self {
            visited,
            path,
            cost: Some(distance.weight(target)),
        })
    }

    /// Package an exhausted search. The explored region is still reported.
    pub fn exhausted(visited: Vec<String>) -> Self {
        Self {
            visited,
            path: Vec::new(),
            cost: None,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The path without its first and last position.
    pub fn interior(&self) -> &[Point] {
        match self.path.len() {
            0..=2 => &[],
            n => &self.path[1..n - 1],
        }
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Point>) {
        (self.visited, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;

    fn chain() -> DistanceMap {
        let mut d = DistanceMap::default();
        d.set("s", Some(Point::new(0, 0)), 0, None);
        d.set("m", Some(Point::new(1, 0)), 1, Some("s"));
        d.set("t", Some(Point::new(1, 1)), 2, Some("m"));
        d
    }

    #[test]
    fn path_to_target_runs_target_to_start() {
        let path = chain().path_to_target("t").unwrap();
        assert_eq!(path, vec![Point::new(1, 1), Point::new(1, 0), Point::new(0, 0)]);
    }

    #[test]
    fn start_alone_is_a_single_position() {
        assert_eq!(chain().path_to_target("s").unwrap(), vec![Point::new(0, 0)]);
    }

    #[test]
    fn broken_chain_is_reported() {
        let mut d = chain();
        d.set("x", Some(Point::new(5, 5)), 3, Some("ghost"));
        assert_eq!(
            d.path_to_target("x"),
            Err(PathError::UnknownVertex("ghost".into()))
        );
        d.set("y", None, 1, Some("s"));
        assert_eq!(d.path_to_target("y"), Err(PathError::MissingPosition("y".into())));
    }

    #[test]
    fn seeded_map_starts_unreachable() {
        let mut g = Graph::new();
        g.add_vertex(Vertex::with_position("a", Point::new(2, 3)));
        g.add_vertex(Vertex::new("b"));
        let d = DistanceMap::seeded(&g);
        assert_eq!(d.weight("a"), UNREACHABLE);
        assert_eq!(d.get("a").unwrap().position, Some(Point::new(2, 3)));
        assert_eq!(d.get("b").unwrap().position, None);
        assert_eq!(d.weight("missing"), UNREACHABLE);
    }

    #[test]
    fn found_result_is_start_to_target() {
        let visited = vec!["s".to_string(), "m".to_string(), "t".to_string()];
        let r = SearchResult::found(visited.clone(), &chain(), "t").unwrap();
        assert!(r.is_found());
        assert_eq!(r.visited, visited);
        assert_eq!(r.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(r.path.last(), Some(&Point::new(1, 1)));
        assert_eq!(r.cost, Some(2));
        assert_eq!(r.interior(), &[Point::new(1, 0)]);
    }

    #[test]
    fn exhausted_result_keeps_visited() {
        let r = SearchResult::exhausted(vec!["s".into()]);
        assert!(!r.is_found());
        assert!(r.interior().is_empty());
        assert_eq!(r.cost, None);
        let (visited, path) = r.into_parts();
        assert_eq!(visited, vec!["s"]);
        assert!(path.is_empty());
    }
}
