use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};

use crate::units::{ColumnIndex, RowIndex};

/// The closed alphabet of maze cells. Each kind has exactly one textual symbol.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum CellKind {
    Wall,
    Floor,
    Start,
    Goal,
    Ice,
    Water,
    Fire,
    Hole,
}

impl CellKind {
    pub const ALL: [CellKind; 8] = [CellKind::Wall,
                                    CellKind::Floor,
                                    CellKind::Start,
                                    CellKind::Goal,
                                    CellKind::Ice,
                                    CellKind::Water,
                                    CellKind::Fire,
                                    CellKind::Hole];

    pub fn from_symbol(symbol: char) -> Option<CellKind> {
        match symbol {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::Floor),
            'S' => Some(CellKind::Start),
            'G' => Some(CellKind::Goal),
            'I' => Some(CellKind::Ice),
            'W' => Some(CellKind::Water),
            'F' => Some(CellKind::Fire),
            'H' => Some(CellKind::Hole),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Floor => '.',
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
            CellKind::Ice => 'I',
            CellKind::Water => 'W',
            CellKind::Fire => 'F',
            CellKind::Hole => 'H',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellKind::Wall => "wall",
            CellKind::Floor => "floor",
            CellKind::Start => "start",
            CellKind::Goal => "goal",
            CellKind::Ice => "ice",
            CellKind::Water => "water",
            CellKind::Fire => "fire",
            CellKind::Hole => "hole",
        }
    }

    /// Can a path to the goal step onto this cell?
    ///
    /// A hole is a terminal trap, so it blocks a route just like a wall. Ice, water and fire only
    /// make a route more expensive.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellKind::Wall && self != CellKind::Hole
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A zero based (row, column) grid position.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Point {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        Point::new(row, col)
    }

    pub fn from_row_major_index(index: usize, row_length: usize) -> Point {
        Point::new(index / row_length, index % row_length)
    }

    /// Creates a new `Point` offset 1 cell away in the given direction.
    /// Returns None if the point would have a negative component; the upper bound is the caller's concern.
    pub fn offset(self, dir: CompassPrimary) -> Option<Point> {
        let Point { row, col } = self;
        match dir {
            CompassPrimary::North => {
                if row > 0 {
                    Some(Point::new(row - 1, col))
                } else {
                    None
                }
            }
            CompassPrimary::South => Some(Point::new(row + 1, col)),
            CompassPrimary::East => Some(Point::new(row, col + 1)),
            CompassPrimary::West => {
                if col > 0 {
                    Some(Point::new(row, col - 1))
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const COMPASS_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                     CompassPrimary::South,
                                                     CompassPrimary::East,
                                                     CompassPrimary::West];

/// Symbol to name mapping carried by every serialized maze for self description.
///
/// The real mapping is fixed by `CellKind`, so a legend read from input is kept as is and never
/// used to interpret the grid.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Legend(pub BTreeMap<String, String>);

lazy_static! {
    static ref STANDARD_LEGEND: Legend = Legend(CellKind::ALL
        .iter()
        .map(|kind| (kind.symbol().to_string(), kind.name().to_string()))
        .collect());
}

impl Legend {
    pub fn standard() -> Legend {
        STANDARD_LEGEND.clone()
    }
}

impl Default for Legend {
    fn default() -> Legend {
        Legend::standard()
    }
}
