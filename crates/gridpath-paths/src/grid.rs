//! Rectangular grid → [`Graph`] adapter.

use gridpath_core::{Point, Range};

use crate::{Edge, Graph, Vertex};

/// Canonical vertex name of a grid cell: `"x,y"`.
pub fn vertex_name(p: Point) -> String {
    format!("{},{}", p.x, p.y)
}

/// Inverse of [`vertex_name`]. Returns `None` for anything that is not two
/// comma-separated integers.
pub fn parse_vertex_name(name: &str) -> Option<Point> {
    let (x, y) = name.split_once(',')?;
    Some(Point::new(x.parse().ok()?, y.parse().ok()?))
}

/// Build the graph of a grid.
///
/// Every cell of `range` for which `passable` holds becomes a vertex named
/// by [`vertex_name`], with a unit-weight edge to each passable orthogonal
/// neighbour inside `range` (right, down, up, left).
pub fn grid_graph(range: Range, passable: impl Fn(Point) -> bool) -> Graph {
    let mut graph = Graph::with_capacity(range.len());
    for p in range.iter() {
        if !passable(p) {
            continue;
        }
        let name = vertex_name(p);
        let slot = graph.add_vertex(Vertex::with_position(name.clone(), p));
        for n in p.neighbors_4() {
            if range.contains(n) && passable(n) {
                graph.push_edge(slot, Edge::new(name.clone(), vertex_name(n), 1));
            }
        }
    }
    graph
}
