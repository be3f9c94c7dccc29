use crate::distance::manhattan;
use crate::queue::QueueEntry;
use crate::search::{Search, position_of};
use crate::traits::Pathfinder;
use crate::{Graph, PathError, SearchResult, UNREACHABLE};

/// Greedy best-first search.
///
/// The frontier is ordered by the Manhattan estimate to the target alone.
/// A vertex keeps the backpointer of whichever settled vertex discovered it
/// first; costs are never compared, so the path found is not necessarily a
/// cheapest one. Its reported cost is the true weight along that path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirst;

impl Pathfinder for BestFirst {
    fn name(&self) -> &'static str {
        "best-first"
    }

    fn calculate_shortest_path(
        &self,
        start: &str,
        target: &str,
        graph: &Graph,
    ) -> Result<SearchResult, PathError> {
        let mut search = Search::new(self.name(), graph);
        let (_, target_pos) = search.begin(start, target)?;
        search.frontier.push(QueueEntry::new(start, 0));

        while let Some(current) = search.settle_next()? {
            if current == target {
                return search.found(target);
            }

            let from_weight = search.distance.weight(&current);
            for edge in graph.edges(&current) {
                let to = edge.to();
                if search.visited.contains(to) {
                    continue;
                }
                let to_pos = position_of(graph, to)?;
                if search.distance.weight(to) == UNREACHABLE {
                    let weight = from_weight.saturating_add(edge.weight());
                    search.distance.set(to, Some(to_pos), weight, Some(current.as_str()));
                }
                search
                    .frontier
                    .push(QueueEntry::new(to, manhattan(to_pos, target_pos)));
            }
        }

        Ok(search.exhausted())
    }
}
