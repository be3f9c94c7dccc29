use std::collections::HashSet;

use log::{debug, warn};

use crate::search::{Visited, position_of};
use crate::traits::Pathfinder;
use crate::{Graph, PathError, SearchResult};

/// One branch of the depth-first walk. Each frame owns its own copy of the
/// vertices on its branch, so siblings never see each other's visits.
struct Frame {
    on_branch: HashSet<String>,
    path: Vec<String>,
    cost: u32,
}

impl Frame {
    fn root(start: &str) -> Self {
        Self {
            on_branch: HashSet::from([start.to_string()]),
            path: vec![start.to_string()],
            cost: 0,
        }
    }

    fn tip(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    fn extend(&self, to: &str, weight: u32) -> Self {
        let mut on_branch = self.on_branch.clone();
        on_branch.insert(to.to_string());
        let mut path = self.path.clone();
        path.push(to.to_string());
        Self {
            on_branch,
            path,
            cost: self.cost.saturating_add(weight),
        }
    }
}

/// Exhaustive depth-first search over simple paths.
///
/// Returns the first path that reaches the target, which is usually not
/// the shortest. `visited` lists each vertex the first time a branch
/// ending in it was expanded.
///
/// The number of simple paths grows exponentially with the open area, so
/// an unreachable target on anything but a small map can keep the search
/// busy for a very long time. [`with_frame_limit`](Self::with_frame_limit)
/// bounds the work; the search then fails with [`PathError::FrameLimit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst {
    frame_limit: Option<usize>,
}

impl DepthFirst {
    /// Unbounded search.
    pub const fn new() -> Self {
        Self { frame_limit: None }
    }

    /// Give up after expanding `limit` stack frames.
    pub const fn with_frame_limit(limit: usize) -> Self {
        Self { frame_limit: Some(limit) }
    }

    pub fn frame_limit(&self) -> Option<usize> {
        self.frame_limit
    }
}

impl Pathfinder for DepthFirst {
    fn name(&self) -> &'static str {
        "depth-first"
    }

    fn calculate_shortest_path(
        &self,
        start: &str,
        target: &str,
        graph: &Graph,
    ) -> Result<SearchResult, PathError> {
        position_of(graph, start)
            .and(position_of(graph, target))
            .inspect_err(|e| warn!("{}: {e}", self.name()))?;

        let mut explored = Visited::default();
        let mut stack = vec![Frame::root(start)];
        let mut iterations = 0usize;

        while let Some(frame) = stack.pop() {
            let tip = frame.tip();
            explored.insert(tip);

            if tip == target {
                debug!(
                    "{}: reached {target} after {iterations} frames, {} explored of {}",
                    self.name(),
                    explored.len(),
                    graph.len()
                );
                let path = frame
                    .path
                    .iter()
                    .map(|name| position_of(graph, name))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(SearchResult {
                    visited: explored.into_order(),
                    path,
                    cost: Some(frame.cost),
                });
            }

            if self.frame_limit.is_some_and(|limit| iterations >= limit) {
                warn!(
                    "{}: giving up after {iterations} frames, {} explored of {}",
                    self.name(),
                    explored.len(),
                    graph.len()
                );
                return Err(PathError::FrameLimit(iterations));
            }
            iterations += 1;
            for edge in graph.edges(tip) {
                if frame.on_branch.contains(edge.to()) {
                    continue;
                }
                position_of(graph, edge.to())?;
                stack.push(frame.extend(edge.to(), edge.weight()));
            }
        }

        debug!(
            "{}: no path after {iterations} frames, {} explored of {}",
            self.name(),
            explored.len(),
            graph.len()
        );
        Ok(SearchResult::exhausted(explored.into_order()))
    }
}
