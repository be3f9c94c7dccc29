//! Random wall placement for test maps.

use gridpath_core::Point;
use log::debug;
use rand::{Rng, RngExt};

use crate::grid::{Cell, CellMap};

/// Map generator operating on a [`CellMap`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub map: CellMap,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given map.
    pub fn with_map(map: CellMap, rng: R) -> Self {
        Self { rng, map }
    }

    pub fn into_map(self) -> CellMap {
        self.map
    }

    /// Wall random empty cells until walls cover `fill_pct` (0.0–1.0) of
    /// the map, or no empty cell is left. Markers are never walled.
    ///
    /// Returns the number of walls placed.
    pub fn scatter_walls(&mut self, fill_pct: f64) -> usize {
        let total = self.map.bounds().len();
        let wanted = (total as f64 * fill_pct.clamp(0.0, 1.0)) as usize;
        let mut walls = self.map.count(Cell::Wall);
        let mut free: Vec<Point> = self
            .map
            .iter()
            .filter(|&(_, c)| c == Cell::Empty)
            .map(|(p, _)| p)
            .collect();

        let mut placed = 0;
        while walls < wanted && !free.is_empty() {
            let p = free.swap_remove(self.rng.random_range(0..free.len()));
            if self.map.set_wall(p) {
                walls += 1;
                placed += 1;
            }
        }
        debug!("scatter_walls: placed {placed}, {walls} of {total} cells walled");
        placed
    }

    /// Draw a horizontal wall across row `y`, leaving column `gap` open if
    /// given. Markers on the row are left in place.
    ///
    /// Returns the number of walls placed.
    pub fn wall_row(&mut self, y: i32, gap: Option<i32>) -> usize {
        let bounds = self.map.bounds();
        (bounds.min.x..bounds.max.x)
            .filter(|&x| Some(x) != gap)
            .filter(|&x| self.map.set_wall(Point::new(x, y)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::{Algorithm, vertex_name};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gen_map(w: i32, h: i32, seed: u64) -> MapGen<StdRng> {
        MapGen::with_map(CellMap::with_size(w, h).unwrap(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn scatter_reaches_the_requested_fill() {
        let mut mg = gen_map(20, 20, 1);
        let placed = mg.scatter_walls(0.3);
        assert_eq!(placed, 120);
        assert_eq!(mg.map.count(Cell::Wall), 120);
        assert_eq!(mg.map.at(Point::new(4, 4)), Some(Cell::Start));
        assert_eq!(mg.map.at(Point::new(15, 15)), Some(Cell::Target));
    }

    #[test]
    fn scatter_counts_existing_walls() {
        let mut mg = gen_map(10, 10, 2);
        mg.scatter_walls(0.2);
        assert_eq!(mg.scatter_walls(0.2), 0);
        assert_eq!(mg.scatter_walls(0.25), 5);
    }

    #[test]
    fn scatter_stops_when_only_markers_remain() {
        let mut mg = gen_map(3, 3, 3);
        assert_eq!(mg.scatter_walls(1.0), 7);
        assert_eq!(mg.map.count(Cell::Empty), 0);
        assert_eq!(mg.scatter_walls(f64::NAN), 0);
    }

    #[test]
    fn same_seed_same_map() {
        let mut a = gen_map(15, 12, 42);
        let mut b = gen_map(15, 12, 42);
        a.scatter_walls(0.35);
        b.scatter_walls(0.35);
        assert_eq!(a.into_map(), b.into_map());
    }

    #[test]
    fn wall_row_with_gap() {
        let mut mg = gen_map(6, 5, 0);
        assert_eq!(mg.wall_row(2, Some(3)), 5);
        assert_eq!(mg.map.at(Point::new(3, 2)), Some(Cell::Empty));
        let m = mg.into_map();
        let r = Algorithm::Dijkstra
            .calculate_shortest_path(&vertex_name(m.start()), &vertex_name(m.target()), &m.graph())
            .unwrap();
        assert!(r.is_found());
    }

    #[test]
    fn wall_row_without_gap_cuts_the_map() {
        let mut mg = gen_map(6, 5, 0);
        assert_eq!(mg.wall_row(2, None), 6);
        let m = mg.into_map();
        let r = Algorithm::AStar
            .calculate_shortest_path(&vertex_name(m.start()), &vertex_name(m.target()), &m.graph())
            .unwrap();
        assert!(!r.is_found());
    }

    #[test]
    fn wall_row_spares_markers_and_ignores_outside_rows() {
        let mut mg = gen_map(5, 5, 0);
        // start is at (1, 1)
        assert_eq!(mg.wall_row(1, None), 4);
        assert_eq!(mg.map.at(Point::new(1, 1)), Some(Cell::Start));
        assert_eq!(mg.wall_row(9, None), 0);
    }
}
