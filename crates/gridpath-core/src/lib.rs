//! **gridpath-core**: geometry primitives shared across the *gridpath*
//! crates.
//!
//! A [`Point`] names one grid cell; a [`Range`] is the half-open rectangle a
//! grid occupies and iterates its cells in row-major order.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
