use bit_set::BitSet;

use crate::cells::{CellKind, Point, COMPASS_DIRECTIONS};
use crate::layout::{Layout, PointSmallVec};
use crate::maze::MAX_SIZE;

/// Which cells of a square grid can be walked over when searching for a route.
///
/// A bit in the set means blocked. Anything outside the grid is blocked too.
#[derive(Debug, Clone)]
pub struct PassabilityMask {
    blocked: BitSet,
    size: usize,
}

impl PassabilityMask {
    pub fn from_layout(layout: &Layout) -> PassabilityMask {
        let size = layout.size();
        let mut blocked = BitSet::with_capacity(size * size);
        for (point, cell) in layout.iter_cells() {
            if !cell.is_passable() {
                blocked.insert(point.row * size + point.col);
            }
        }
        PassabilityMask { blocked, size }
    }

    /// Build from rows of symbols that are known to be `size` characters long.
    ///
    /// Symbols outside the alphabet, and cells missing from short rows, are treated as blocked.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], size: usize) -> PassabilityMask {
        let size = size.min(MAX_SIZE);
        let mut blocked = (0..size * size).collect::<BitSet>();
        for (row, row_text) in rows.iter().enumerate().take(size) {
            for (col, symbol) in row_text.as_ref().chars().enumerate().take(size) {
                let passable = CellKind::from_symbol(symbol).map_or(false, CellKind::is_passable);
                if passable {
                    blocked.remove(row * size + col);
                }
            }
        }
        PassabilityMask { blocked, size }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.row < self.size && point.col < self.size
    }

    pub fn is_passable(&self, point: Point) -> bool {
        self.contains(point) && !self.blocked.contains(point.row * self.size + point.col)
    }

    /// Orthogonal neighbours of a point that can be stepped onto.
    pub fn passable_neighbours(&self, point: Point) -> PointSmallVec {
        COMPASS_DIRECTIONS.iter()
            .filter_map(|dir| point.offset(*dir))
            .filter(|adjacent| self.is_passable(*adjacent))
            .collect()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}
