use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::{CellKind, Point, COMPASS_DIRECTIONS};
use crate::maze::{SerializedMaze, MAX_SIZE};
use crate::units::RowLength;

pub type PointSmallVec = SmallVec<[Point; 4]>;

/// In-memory maze: a square row-major matrix of cells with resolved start and goal points.
///
/// A `Layout` is plain data. Clone it before mutating anything a caller handed over.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Layout {
    name: String,
    size: usize,
    cells: Vec<CellKind>,
    start: Point,
    goal: Point,
}

impl Layout {
    /// A `size * size` layout of walls with the start and goal points only recorded, not placed.
    /// The size is capped at `MAX_SIZE`.
    pub fn new<S: Into<String>>(name: S, size: usize, start: Point, goal: Point) -> Layout {
        let size = size.min(MAX_SIZE);
        Layout {
            name: name.into(),
            size,
            cells: vec![CellKind::Wall; size * size],
            start,
            goal,
        }
    }

    pub(crate) fn from_parts(name: String,
                             size: usize,
                             cells: Vec<CellKind>,
                             start: Point,
                             goal: Point)
                             -> Layout {
        debug_assert_eq!(cells.len(), size * size);
        Layout { name, size, cells, start, goal }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn row_length(&self) -> RowLength {
        RowLength(self.size)
    }

    #[inline]
    pub fn cells_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    pub fn set_goal(&mut self, goal: Point) {
        self.goal = goal;
    }

    #[inline]
    pub fn is_valid_point(&self, point: Point) -> bool {
        point.row < self.size && point.col < self.size
    }

    /// Is the point on the outermost ring of the grid?
    pub fn is_border(&self, point: Point) -> bool {
        self.is_valid_point(point) &&
        (point.row == 0 || point.col == 0 || point.row == self.size - 1 || point.col == self.size - 1)
    }

    pub fn cell(&self, point: Point) -> Option<CellKind> {
        self.point_to_index(point).map(|index| self.cells[index])
    }

    /// Overwrite a cell. Returns false, changing nothing, if the point is off the grid.
    pub fn set_cell(&mut self, point: Point, kind: CellKind) -> bool {
        if let Some(index) = self.point_to_index(point) {
            self.cells[index] = kind;
            true
        } else {
            false
        }
    }

    /// Points to the North, South, East or West of a point that lie on the grid.
    pub fn neighbours(&self, point: Point) -> PointSmallVec {
        COMPASS_DIRECTIONS.iter()
            .filter_map(|dir| point.offset(*dir))
            .filter(|adjacent| self.is_valid_point(*adjacent))
            .collect()
    }

    /// All points in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..self.cells.len()).map(move |index| Point::from_row_major_index(index, size))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.iter().zip(self.cells.iter().cloned())
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    fn row_symbols(&self, row: usize) -> String {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Back to the wire form, always with the standard legend.
    pub fn to_serialized(&self) -> SerializedMaze {
        let grid = (0..self.size).map(|row| self.row_symbols(row)).collect();
        SerializedMaze::new(self.name.clone(), self.size, grid)
    }

    fn point_to_index(&self, point: Point) -> Option<usize> {
        if self.is_valid_point(point) {
            Some(point.row * self.size + point.col)
        } else {
            None
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let RowLength(width) = self.row_length();
        if width == 0 {
            return Ok(());
        }
        let rows = self.cells
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .join("\n");
        write!(f, "{}", rows)
    }
}
