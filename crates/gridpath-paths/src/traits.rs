use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::best_first::BestFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::error::ParseAlgorithmError;
use crate::{Graph, PathError, SearchResult};

/// Common contract of every search strategy.
pub trait Pathfinder {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Search `graph` for a path from `start` to `target`.
    ///
    /// Fails with [`PathError::UnknownVertex`] if either endpoint (or a
    /// vertex reached through an edge) is not in the graph. Finding no path
    /// is not an error: the result then has an empty path and lists every
    /// vertex explored before the frontier ran dry.
    fn calculate_shortest_path(
        &self,
        start: &str,
        target: &str,
        graph: &Graph,
    ) -> Result<SearchResult, PathError>;
}

/// Selector over the built-in pathfinders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Algorithm {
    Dijkstra,
    #[default]
    AStar,
    BestFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BestFirst,
        Algorithm::DepthFirst,
    ];

    /// The strategy object behind this selector.
    pub fn pathfinder(self) -> &'static dyn Pathfinder {
        match self {
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::AStar => &AStar,
            Algorithm::BestFirst => &BestFirst,
            Algorithm::DepthFirst => {
                static DEPTH_FIRST: DepthFirst = DepthFirst::new();
                &DEPTH_FIRST
            }
        }
    }

    /// Whether the returned path is guaranteed to have minimum cost.
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    pub fn calculate_shortest_path(
        self,
        start: &str,
        target: &str,
        graph: &Graph,
    ) -> Result<SearchResult, PathError> {
        self.pathfinder().calculate_shortest_path(start, target, graph)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.pathfinder().name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            "best-first" | "bestfirst" | "bfs" | "greedy" => Ok(Algorithm::BestFirst),
            "depth-first" | "dfs" => Ok(Algorithm::DepthFirst),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
