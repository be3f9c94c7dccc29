//! Cell maps for gridpath: the editable grid a search runs on, ASCII
//! layouts, random walls, and painting search results back onto the map.

pub mod grid;
pub mod layout;
pub mod mapgen;

pub use grid::{Cell, CellMap, MapError};
pub use layout::{LayoutError, parse_layout};
pub use mapgen::MapGen;
