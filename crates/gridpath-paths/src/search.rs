//! State shared by the frontier-driven searches.

use std::collections::HashSet;

use gridpath_core::Point;
use log::{debug, trace, warn};

use crate::path::{DistanceMap, SearchResult};
use crate::queue::{PriorityQueue, QueueEntry};
use crate::{Graph, PathError};

/// Settled vertex names, remembered in settle order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Visited {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Visited {
    /// Mark `name` settled. Returns `false` if it already was.
    pub(crate) fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn into_order(self) -> Vec<String> {
        self.order
    }
}

/// Position of `name`, failing if the vertex is missing or has none.
pub(crate) fn position_of(graph: &Graph, name: &str) -> Result<Point, PathError> {
    graph
        .vertex(name)
        .ok_or_else(|| PathError::UnknownVertex(name.to_string()))?
        .position()
        .ok_or_else(|| PathError::MissingPosition(name.to_string()))
}

/// One search run: frontier, settled set and distance records over a
/// borrowed graph. Nothing here outlives the call that created it.
pub(crate) struct Search<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) frontier: PriorityQueue,
    pub(crate) visited: Visited,
    pub(crate) distance: DistanceMap,
    algorithm: &'static str,
    iterations: usize,
}

impl<'g> Search<'g> {
    pub(crate) fn new(algorithm: &'static str, graph: &'g Graph) -> Self {
        Self {
            graph,
            frontier: PriorityQueue::with_capacity(graph.len()),
            visited: Visited::default(),
            distance: DistanceMap::seeded(graph),
            algorithm,
            iterations: 0,
        }
    }

    /// Resolve both endpoints and record the start at cost 0.
    pub(crate) fn begin(&mut self, start: &str, target: &str) -> Result<(Point, Point), PathError> {
        let endpoints = position_of(self.graph, start).and_then(|s| Ok((s, position_of(self.graph, target)?)));
        let (start_pos, target_pos) = endpoints.inspect_err(|e| warn!("{}: {e}", self.algorithm))?;
        self.distance.set(start, Some(start_pos), 0, None);
        Ok((start_pos, target_pos))
    }

    /// Pop frontier entries until one names an unsettled vertex, settle it
    /// and return it. `None` once the frontier is exhausted.
    pub(crate) fn settle_next(&mut self) -> Result<Option<String>, PathError> {
        while !self.frontier.is_empty() {
            let entry = self.frontier.pop()?;
            self.iterations += 1;
            if !self.visited.insert(&entry.name) {
                trace!("{}: skipping stale entry {} ({})", self.algorithm, entry.name, entry.cost);
                continue;
            }
            return Ok(Some(entry.name));
        }
        Ok(None)
    }

    /// Relax every outgoing edge of `from`.
    ///
    /// A neighbour whose cost improves gets a new record pointing back at
    /// `from` and is queued with `priority(position, new_weight)`.
    pub(crate) fn relax(&mut self, from: &str, priority: impl Fn(Point, u32) -> u32) -> Result<(), PathError> {
        let from_weight = self.distance.weight(from);
        for edge in self.graph.edges(from) {
            let to_pos = position_of(self.graph, edge.to())?;
            let new_weight = from_weight.saturating_add(edge.weight());
            if new_weight < self.distance.weight(edge.to()) {
                self.distance.set(edge.to(), Some(to_pos), new_weight, Some(from));
                self.frontier.push(QueueEntry::new(edge.to(), priority(to_pos, new_weight)));
            }
        }
        Ok(())
    }

    pub(crate) fn found(self, target: &str) -> Result<SearchResult, PathError> {
        debug!(
            "{}: reached {target} after {} iterations, {} settled of {}",
            self.algorithm,
            self.iterations,
            self.visited.len(),
            self.graph.len()
        );
        SearchResult::found(self.visited.into_order(), &self.distance, target)
    }

    pub(crate) fn exhausted(self) -> SearchResult {
        debug!(
            "{}: no path after {} iterations, {} settled of {}",
            self.algorithm,
            self.iterations,
            self.visited.len(),
            self.graph.len()
        );
        SearchResult::exhausted(self.visited.into_order())
    }
}
