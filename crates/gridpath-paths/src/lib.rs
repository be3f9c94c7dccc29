//! Shortest-path search over weighted graphs laid out on a 2D grid.
//!
//! Vertices are named (grid cells use `"x,y"`, see [`vertex_name`]) and carry
//! an optional [`Point`](gridpath_core::Point). Edges are directed and weighted.
//! Four searches share one interface, [`Pathfinder`]:
//!
//! | Search | Frontier priority | Optimal |
//! |---|---|---|
//! | [`Dijkstra`] | accumulated cost | yes |
//! | [`AStar`] | cost + [`manhattan`] estimate | yes, on unit 4-connected grids |
//! | [`BestFirst`] | [`manhattan`] estimate only | no |
//! | [`DepthFirst`] | explicit stack | no |
//!
//! Every search returns a [`SearchResult`]: the vertices in the order they
//! were settled, and the path from start to target (empty when the target
//! is unreachable). Searches hold no state between calls.
//!
//! ```
//! use gridpath_core::Range;
//! use gridpath_paths::{Algorithm, grid_graph};
//!
//! let graph = grid_graph(Range::with_size(3, 3), |_| true);
//! let result = Algorithm::AStar.calculate_shortest_path("0,0", "2,2", &graph).unwrap();
//! assert_eq!(result.cost, Some(4));
//! ```

mod astar;
mod best_first;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod grid;
mod path;
mod queue;
mod search;
mod traits;

#[cfg(test)]
mod testkit;

pub use astar::AStar;
pub use best_first::BestFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use error::{ParseAlgorithmError, PathError};
pub use graph::{Edge, Graph, Vertex};
pub use grid::{grid_graph, parse_vertex_name, vertex_name};
pub use path::{DistanceMap, DistanceVertex, SearchResult, UNREACHABLE};
pub use queue::{PriorityQueue, QueueEntry};
pub use traits::{Algorithm, Pathfinder};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{ascii_graph, assert_well_formed, name};
    use gridpath_core::Point;

    #[test]
    fn every_algorithm_crosses_an_open_grid() {
        let g = ascii_graph(&["...", "...", "..."]);
        for alg in Algorithm::ALL {
            let r = alg.calculate_shortest_path(&name(0, 0), &name(2, 2), &g).unwrap();
            assert_well_formed(&r, "0,0", "2,2");
            assert_eq!(r.path.first(), Some(&Point::new(0, 0)), "{alg}");
            assert_eq!(r.path.last(), Some(&Point::new(2, 2)), "{alg}");
            if alg.is_optimal() {
                assert_eq!(r.cost, Some(4), "{alg}");
            }
        }
    }

    #[test]
    fn every_algorithm_reports_a_walled_off_target() {
        let g = ascii_graph(&[
            "...",
            "###",
            "...",
        ]);
        for alg in Algorithm::ALL {
            let r = alg.calculate_shortest_path("0,0", "2,2", &g).unwrap();
            assert!(r.path.is_empty(), "{alg}");
            assert!(!r.visited.is_empty(), "{alg}");
            assert!(r.visited.iter().all(|v| v.ends_with(",0")), "{alg}");
        }
    }

    #[test]
    fn every_algorithm_handles_start_equals_target() {
        let g = ascii_graph(&["..", ".."]);
        for alg in Algorithm::ALL {
            let r = alg.calculate_shortest_path("1,1", "1,1", &g).unwrap();
            assert_eq!(r.path, vec![Point::new(1, 1)], "{alg}");
            assert_eq!(r.visited, vec!["1,1"], "{alg}");
        }
    }

    #[test]
    fn every_algorithm_rejects_unknown_vertices() {
        let g = ascii_graph(&[".."]);
        for alg in Algorithm::ALL {
            assert_eq!(
                alg.calculate_shortest_path("0,0", "nowhere", &g),
                Err(PathError::UnknownVertex("nowhere".into())),
                "{alg}"
            );
        }
    }

    #[test]
    fn graph_is_untouched_between_runs() {
        let g = ascii_graph(&["....", ".##.", "...."]);
        let edges = g.edge_count();
        for alg in Algorithm::ALL {
            let a = alg.calculate_shortest_path("0,0", "3,2", &g).unwrap();
            let b = alg.calculate_shortest_path("0,0", "3,2", &g).unwrap();
            assert_eq!(a, b, "{alg}");
        }
        assert_eq!(g.edge_count(), edges);
    }
}
