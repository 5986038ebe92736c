use itertools::Itertools;
use serde_derive::Serialize;

use crate::cells::{CellKind, Point};
use crate::masks::PassabilityMask;
use crate::maze::{is_allowed_size, SerializedMaze, ALLOWED_SIZES};
use crate::pathing::Distances;

/// Mazes with more walls than this share of their cells are rejected. Exactly this share is fine.
pub const MAX_WALL_DENSITY_PERCENT: usize = 60;

/// Every problem found with a maze, in the order the checks ran.
#[derive(Eq, PartialEq, Clone, Debug, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> ValidationReport {
        ValidationReport {
            ok: errors.is_empty(),
            errors,
        }
    }
}

/// Check a serialized maze against all the structural rules, collecting every failure.
///
/// Never panics on malformed input. Once the size or the row shapes are wrong the grid cannot be indexed,
/// so only the size, shape and alphabet checks are reported in that case.
pub fn validate(maze: &SerializedMaze) -> ValidationReport {

    let size = maze.size;
    let mut errors = Vec::new();

    if !is_allowed_size(size) {
        errors.push(format!("Invalid size {}. Must be one of: {}", size, ALLOWED_SIZES.iter().join(", ")));
    }

    if maze.grid.len() != size {
        errors.push(format!("Grid has {} rows but size is {}", maze.grid.len(), size));
    }

    for (row, text) in maze.grid.iter().enumerate() {
        let length = text.chars().count();
        if length != size {
            errors.push(format!("Row {} has length {}, expected {}", row + 1, length, size));
        }
    }

    for (row, text) in maze.grid.iter().enumerate() {
        for (col, symbol) in text.chars().enumerate() {
            if CellKind::from_symbol(symbol).is_none() {
                errors.push(format!("Invalid character '{}' at row {}, col {}", symbol, row + 1, col + 1));
            }
        }
    }

    if !errors.is_empty() {
        return ValidationReport::from_errors(errors);
    }

    // The grid is now known to be size * size symbols from the alphabet.
    let cells = maze.grid
        .iter()
        .map(|text| text.chars().filter_map(CellKind::from_symbol).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let count_of = |kind: CellKind| cells.iter().flatten().filter(|&&cell| cell == kind).count();
    let starts = count_of(CellKind::Start);
    let goals = count_of(CellKind::Goal);

    if starts != 1 {
        errors.push(format!("Expected exactly 1 start (S), found {}", starts));
    }
    if goals != 1 {
        errors.push(format!("Expected exactly 1 goal (G), found {}", goals));
    }

    let last = size - 1;
    for col in 0..size {
        if cells[0][col] != CellKind::Wall {
            errors.push(format!("Top border must be wall, found '{}' at col {}", cells[0][col], col + 1));
            break;
        }
        if cells[last][col] != CellKind::Wall {
            errors.push(format!("Bottom border must be wall, found '{}' at col {}", cells[last][col], col + 1));
            break;
        }
    }

    for row in 0..size {
        if cells[row][0] != CellKind::Wall {
            errors.push(format!("Left border must be wall, found '{}' at row {}", cells[row][0], row + 1));
            break;
        }
        if cells[row][last] != CellKind::Wall {
            errors.push(format!("Right border must be wall, found '{}' at row {}", cells[row][last], row + 1));
            break;
        }
    }

    let walls = count_of(CellKind::Wall);
    let total = size * size;
    if walls * 100 > total * MAX_WALL_DENSITY_PERCENT {
        let density = 100.0 * walls as f64 / total as f64;
        errors.push(format!("Wall density {:.1}% exceeds maximum of {}%", density, MAX_WALL_DENSITY_PERCENT));
    }

    if starts == 1 && goals == 1 {
        let find = |kind: CellKind| {
            cells.iter()
                .flatten()
                .position(|&cell| cell == kind)
                .map(|index| Point::from_row_major_index(index, size))
        };
        if let (Some(start), Some(goal)) = (find(CellKind::Start), find(CellKind::Goal)) {
            let mask = PassabilityMask::from_rows(&maze.grid[..], size);
            let reachable = Distances::new(&mask, start)
                .and_then(|distances| distances.distance_from_start_to(goal))
                .is_some();
            if !reachable {
                errors.push(String::from("Goal is not reachable from start"));
            }
        }
    }

    ValidationReport::from_errors(errors)
}
