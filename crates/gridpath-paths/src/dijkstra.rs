use crate::queue::QueueEntry;
use crate::search::Search;
use crate::traits::Pathfinder;
use crate::{Graph, PathError, SearchResult};

/// Uniform-cost search. Settles vertices in order of accumulated cost, so
/// the first time the target is settled its path is a cheapest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Pathfinder for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn calculate_shortest_path(
        &self,
        start: &str,
        target: &str,
        graph: &Graph,
    ) -> Result<SearchResult, PathError> {
        let mut search = Search::new(self.name(), graph);
        search.begin(start, target)?;
        search.frontier.push(QueueEntry::new(start, 0));

        while let Some(current) = search.settle_next()? {
            if current == target {
                return search.found(target);
            }
            search.relax(&current, |_, weight| weight)?;
        }

        Ok(search.exhausted())
    }
}
