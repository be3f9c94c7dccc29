use crate::distance::manhattan;
use crate::queue::QueueEntry;
use crate::search::Search;
use crate::traits::Pathfinder;
use crate::{Graph, PathError, SearchResult};

/// A* search with the Manhattan heuristic.
///
/// Relaxation is the same as [`Dijkstra`](crate::Dijkstra); only the queue
/// priority changes, to accumulated cost plus the estimate to the target.
/// The stored distances stay true costs, so paths are still optimal on
/// unit-weight 4-connected grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn calculate_shortest_path(
        &self,
        start: &str,
        target: &str,
        graph: &Graph,
    ) -> Result<SearchResult, PathError> {
        let mut search = Search::new(self.name(), graph);
        let (start_pos, target_pos) = search.begin(start, target)?;
        search
            .frontier
            .push(QueueEntry::new(start, manhattan(start_pos, target_pos)));

        while let Some(current) = search.settle_next()? {
            if current == target {
                return search.found(target);
            }
            search.relax(&current, |pos, weight| weight.saturating_add(manhattan(pos, target_pos)))?;
        }

        Ok(search.exhausted())
    }
}
