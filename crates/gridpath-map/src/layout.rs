//! Maps written as ASCII art.
//!
//! The accepted format is the one [`CellMap`]'s `Display` produces, so a
//! rendered map reads back with its search marks dropped:
//!
//! ```text
//! S..#
//! .#..
//! ...T
//! ```

use std::fmt;

use gridpath_core::Point;

use crate::grid::{Cell, CellMap};

/// Parse a layout into a [`CellMap`].
///
/// Leading and trailing whitespace of the whole text is trimmed, lines are
/// not. Every line must have the same width. `.` is empty, `#` a wall, `S`
/// the start and `T` the target; `o` and `*` read as empty. Exactly one
/// `S` and one `T` are required.
pub fn parse_layout(s: &str) -> Result<CellMap, LayoutError> {
    let s = s.trim();
    let mut width: Option<i32> = None;
    let mut height = 0;
    let mut walls = Vec::new();
    let mut start = None;
    let mut target = None;

    for (y, line) in s.lines().enumerate() {
        let y = y as i32;
        let mut x = 0;
        for ch in line.chars() {
            let pos = Point::new(x, y);
            match Cell::from_rune(ch) {
                Some(Cell::Wall) => walls.push(pos),
                Some(Cell::Start) => place(&mut start, Cell::Start, pos)?,
                Some(Cell::Target) => place(&mut target, Cell::Target, pos)?,
                Some(_) => {}
                None => return Err(LayoutError::InvalidRune { ch, pos }),
            }
            x += 1;
        }
        match width {
            None => width = Some(x),
            Some(w) if w != x => {
                return Err(LayoutError::InconsistentSize { line: y, width: x, expected: w });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let start = start.ok_or(LayoutError::MissingMarker(Cell::Start))?;
    let target = target.ok_or(LayoutError::MissingMarker(Cell::Target))?;
    Ok(CellMap::from_parts(width.unwrap_or(0), height, &walls, start, target))
}

fn place(slot: &mut Option<Point>, kind: Cell, pos: Point) -> Result<(), LayoutError> {
    if slot.is_some() {
        return Err(LayoutError::DuplicateMarker { kind, pos });
    }
    *slot = Some(pos);
    Ok(())
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Line `line` is `width` characters wide instead of `expected`.
    InconsistentSize { line: i32, width: i32, expected: i32 },
    /// A character outside the layout alphabet.
    InvalidRune { ch: char, pos: Point },
    /// No start or no target marker.
    MissingMarker(Cell),
    /// A second start or target marker.
    DuplicateMarker { kind: Cell, pos: Point },
}

fn marker_name(kind: Cell) -> &'static str {
    match kind {
        Cell::Start => "start",
        Cell::Target => "target",
        _ => "marker",
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize { line, width, expected } => write!(
                f,
                "layout: line {} is {width} wide, expected {expected}",
                line + 1
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(kind) => write!(
                f,
                "layout has no {} marker \u{201c}{}\u{201d}",
                marker_name(*kind),
                kind.rune()
            ),
            Self::DuplicateMarker { kind, pos } => {
                write!(f, "layout has a second {} marker at {pos}", marker_name(*kind))
            }
        }
    }
}

impl std::error::Error for LayoutError {}
