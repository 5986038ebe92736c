use crate::cells::{CellKind, Point};
use crate::layout::Layout;
use crate::maze::{SerializedMaze, MAX_SIZE};

/// Turn a serialized maze into a `Layout`.
///
/// The maze is expected to have passed `validation::validate` already; nothing is checked here.
/// Unvalidated input still produces a `size * size` layout, with the size capped at `MAX_SIZE`:
/// missing or unknown symbols become walls, a missing start falls back to (1, 1) and a missing goal
/// to (size - 2, size - 2).
pub fn parse(maze: &SerializedMaze) -> Layout {

    let size = maze.size.min(MAX_SIZE);
    let mut cells = vec![CellKind::Wall; size * size];
    let mut start = None;
    let mut goal = None;

    for (row, text) in maze.grid.iter().enumerate().take(size) {
        for (col, symbol) in text.chars().enumerate().take(size) {
            let kind = CellKind::from_symbol(symbol).unwrap_or(CellKind::Wall);
            cells[row * size + col] = kind;

            // The first marker in row-major order wins.
            match kind {
                CellKind::Start if start.is_none() => start = Some(Point::new(row, col)),
                CellKind::Goal if goal.is_none() => goal = Some(Point::new(row, col)),
                _ => {}
            }
        }
    }

    let start = start.unwrap_or_else(|| Point::new(1, 1));
    let goal = goal.unwrap_or_else(|| Point::new(size.saturating_sub(2), size.saturating_sub(2)));

    Layout::from_parts(maze.name.clone(), size, cells, start, goal)
}
