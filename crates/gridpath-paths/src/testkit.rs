//! Helpers shared by the search tests.

use std::collections::{HashMap, HashSet, VecDeque};

use gridpath_core::{Point, Range};
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Graph, SearchResult, grid_graph, parse_vertex_name, vertex_name};

/// Parse rows of `.` (open) and `#` (wall) into a graph anchored at the
/// origin. Short rows are padded with walls.
pub(crate) fn ascii_graph(rows: &[&str]) -> Graph {
    let width = rows.first().map_or(0, |r| r.len()) as i32;
    let range = Range::with_size(width, rows.len() as i32);
    grid_graph(range, |p| rows[p.y as usize].as_bytes().get(p.x as usize) == Some(&b'.'))
}

pub(crate) fn name(x: i32, y: i32) -> String {
    vertex_name(Point::new(x, y))
}

/// Unit-weight shortest distance by breadth-first search.
pub(crate) fn bfs_cost(graph: &Graph, start: &str, target: &str) -> Option<u32> {
    let mut dist: HashMap<&str, u32> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(cur) = queue.pop_front() {
        if cur == target {
            return dist.get(cur).copied();
        }
        let d = dist[cur];
        for e in graph.edges(cur) {
            if !dist.contains_key(e.to()) {
                dist.insert(e.to(), d + 1);
                queue.push_back(e.to());
            }
        }
    }
    None
}

/// Vertices reachable from `start`, including itself.
pub(crate) fn reachable(graph: &Graph, start: &str) -> HashSet<String> {
    let mut seen = HashSet::from([start.to_string()]);
    let mut stack = vec![start.to_string()];
    while let Some(cur) = stack.pop() {
        for e in graph.edges(&cur) {
            if seen.insert(e.to().to_string()) {
                stack.push(e.to().to_string());
            }
        }
    }
    seen
}

/// Check the invariants every result must satisfy on a unit-weight grid.
pub(crate) fn assert_well_formed(result: &SearchResult, start: &str, target: &str) {
    let unique: HashSet<_> = result.visited.iter().collect();
    assert_eq!(unique.len(), result.visited.len(), "duplicate visited entries");

    if !result.is_found() {
        assert_eq!(result.cost, None);
        return;
    }
    assert_eq!(result.path.first().copied(), parse_vertex_name(start));
    assert_eq!(result.path.last().copied(), parse_vertex_name(target));
    for pair in result.path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not a step", pair[0], pair[1]);
    }
    assert_eq!(result.cost, Some(result.path.len() as u32 - 1));
}

/// A seeded random grid with roughly `density` of its cells walled, and
/// two distinct open endpoints.
pub(crate) fn random_grid(seed: u64, width: i32, height: i32, density: f64) -> (Graph, String, String) {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = Range::with_size(width, height);
    let walls: HashSet<Point> = range
        .iter()
        .filter(|_| rng.random_range(0.0..1.0) < density)
        .collect();
    let open: Vec<Point> = range.iter().filter(|p| !walls.contains(p)).collect();
    let start = open[rng.random_range(0..open.len())];
    let mut target = open[rng.random_range(0..open.len())];
    if target == start {
        target = *open.iter().rev().find(|&&p| p != start).unwrap_or(&start);
    }
    let graph = grid_graph(range, |p| !walls.contains(&p));
    (graph, vertex_name(start), vertex_name(target))
}
