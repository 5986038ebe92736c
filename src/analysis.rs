use serde_derive::Serialize;

use crate::cells::CellKind;
use crate::layout::Layout;
use crate::masks::PassabilityMask;
use crate::pathing;

/// Topological summary of a layout.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct AnalysisReport {
    /// Steps from start to goal, None when the goal cannot be reached.
    pub shortest_path_length: Option<u32>,
    /// Open cells with exactly one open neighbour.
    pub dead_ends: usize,
    /// Open cells with three or more open neighbours.
    pub intersections: usize,
    pub wall_density_percent: f64,
}

pub fn analyze(layout: &Layout) -> AnalysisReport {

    let mut walls = 0;
    let mut open = 0;
    let mut dead_ends = 0;
    let mut intersections = 0;

    for (point, cell) in layout.iter_cells() {
        if cell == CellKind::Wall {
            walls += 1;
            continue;
        }
        open += 1;

        let degree = layout.neighbours(point)
            .iter()
            .filter(|&&neighbour| layout.cell(neighbour) != Some(CellKind::Wall))
            .count();
        if degree == 1 {
            dead_ends += 1;
        } else if degree >= 3 {
            intersections += 1;
        }
    }

    // An empty grid has no cells at all, which reads as 0% walls.
    let total = if walls + open == 0 { 1 } else { walls + open };
    let wall_density_percent = 100.0 * walls as f64 / total as f64;

    let mask = PassabilityMask::from_layout(layout);
    let shortest_path_length = pathing::shortest_path_length(&mask, layout.start(), layout.goal());

    AnalysisReport {
        shortest_path_length,
        dead_ends,
        intersections,
        wall_density_percent,
    }
}
