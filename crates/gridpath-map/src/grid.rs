//! The editable cell map searches run against.
//!
//! A [`CellMap`] owns one [`Cell`] per grid position plus the positions of
//! the start and target markers. It turns itself into a search
//! [`Graph`] with [`CellMap::graph`], and paints a [`SearchResult`] back
//! onto its cells with [`CellMap::apply`].

use std::fmt;

use gridpath_core::{Point, Range};
use gridpath_paths::{Graph, SearchResult, grid_graph, parse_vertex_name};
use log::trace;

/// State of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Start,
    Target,
    Wall,
    /// Settled by the last search.
    Visited,
    /// On the last path found, endpoints excluded.
    Path,
}

impl Cell {
    /// Everything except walls can be walked through.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Whether the cell holds a search mark rather than map content.
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Cell::Visited | Cell::Path)
    }

    /// Character used when rendering the cell.
    pub const fn rune(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Start => 'S',
            Cell::Target => 'T',
            Cell::Wall => '#',
            Cell::Visited => 'o',
            Cell::Path => '*',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Cell> {
        match ch {
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'T' => Some(Cell::Target),
            '#' => Some(Cell::Wall),
            'o' => Some(Cell::Visited),
            '*' => Some(Cell::Path),
            _ => None,
        }
    }
}

/// A rectangular map of [`Cell`]s with exactly one start and one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMap {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    target: Point,
}

impl CellMap {
    /// Create an empty `width` x `height` map with the two markers placed.
    pub fn new(width: i32, height: i32, start: Point, target: Point) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::TooSmall { width, height });
        }
        let bounds = Range::with_size(width, height);
        for p in [start, target] {
            if !bounds.contains(p) {
                return Err(MapError::OutOfBounds(p));
            }
        }
        if start == target {
            return Err(MapError::SameEndpoints(start));
        }
        let mut map = Self {
            cells: vec![Cell::Empty; bounds.len()],
            bounds,
            start,
            target,
        };
        map.place_markers();
        Ok(map)
    }

    /// Create an empty map with the markers inset a fifth of the way from
    /// opposite corners: on a 20x20 map, start at (4, 4) and target at
    /// (15, 15).
    pub fn with_size(width: i32, height: i32) -> Result<Self, MapError> {
        let start = Point::new(width / 5, height / 5);
        let target = Point::new(width - 1 - width / 5, height - 1 - height / 5);
        Self::new(width, height, start, target)
    }

    /// Build a map from already validated parts.
    pub(crate) fn from_parts(width: i32, height: i32, walls: &[Point], start: Point, target: Point) -> Self {
        let bounds = Range::with_size(width, height);
        let mut map = Self {
            cells: vec![Cell::Empty; bounds.len()],
            bounds,
            start,
            target,
        };
        for &p in walls {
            map.set(p, Cell::Wall);
        }
        map.place_markers();
        map
    }

    fn place_markers(&mut self) {
        self.set(self.start, Cell::Start);
        self.set(self.target, Cell::Target);
    }

    fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = cell;
        }
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// The cell at `p`, or `None` outside the map.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Turn `p` into a wall. Returns `false` if `p` is a marker, already a
    /// wall, or outside the map.
    pub fn set_wall(&mut self, p: Point) -> bool {
        match self.at(p) {
            Some(Cell::Empty | Cell::Visited | Cell::Path) => {
                self.set(p, Cell::Wall);
                true
            }
            _ => false,
        }
    }

    /// Turn the wall at `p` back into an empty cell. Returns `false` if
    /// there was no wall.
    pub fn clear_wall(&mut self, p: Point) -> bool {
        if self.at(p) != Some(Cell::Wall) {
            return false;
        }
        self.set(p, Cell::Empty);
        true
    }

    /// Number of cells in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Back to a fresh map: walls and search marks removed, markers kept.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.place_markers();
    }

    /// Remove the marks left by [`apply`](Self::apply), keeping walls.
    pub fn clear_search(&mut self) {
        for c in &mut self.cells {
            if c.is_search_mark() {
                *c = Cell::Empty;
            }
        }
    }

    /// The search graph of the passable cells, one vertex per cell named
    /// with [`vertex_name`](gridpath_paths::vertex_name).
    pub fn graph(&self) -> Graph {
        grid_graph(self.bounds, |p| self.is_passable(p))
    }

    /// Paint `result` onto the map: settled cells become [`Cell::Visited`],
    /// then the path between the endpoints becomes [`Cell::Path`]. Markers
    /// and walls are never overwritten; names that are not cells of this
    /// map are ignored.
    pub fn apply(&mut self, result: &SearchResult) {
        for name in &result.visited {
            match parse_vertex_name(name) {
                Some(p) if self.at(p) == Some(Cell::Empty) => self.set(p, Cell::Visited),
                Some(_) => {}
                None => trace!("ignoring visited vertex {name:?}: not a cell name"),
            }
        }
        for &p in result.interior() {
            if matches!(self.at(p), Some(Cell::Empty | Cell::Visited)) {
                self.set(p, Cell::Path);
            }
        }
    }
}

impl fmt::Display for CellMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c.rune())?;
            }
        }
        Ok(())
    }
}

/// Errors from building a [`CellMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A marker lies outside the map.
    OutOfBounds(Point),
    /// Start and target were given the same position.
    SameEndpoints(Point),
    /// Width or height is not positive.
    TooSmall { width: i32, height: i32 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "map: marker at {p} is outside the map"),
            Self::SameEndpoints(p) => write!(f, "map: start and target both at {p}"),
            Self::TooSmall { width, height } => write!(f, "map: size {width}x{height} is too small"),
        }
    }
}

impl std::error::Error for MapError {}
