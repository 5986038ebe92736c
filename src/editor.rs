use log::debug;
use serde_derive::Serialize;

use crate::analysis::{analyze, AnalysisReport};
use crate::cells::{CellKind, Point};
use crate::layout::Layout;
use crate::units::{ColumnIndex, RowIndex};
use crate::validation::{validate, ValidationReport};

/// What a click on a cell does.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Tool {
    Wall,
    Start,
    Goal,
    Ice,
    Water,
    Fire,
    Hole,
}

/// Live feedback for an authoring UI after an edit.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct EditorStatus {
    pub validation: ValidationReport,
    pub analysis: AnalysisReport,
}

/// Owns one working layout and applies single cell edits to it.
#[derive(Debug, Clone)]
pub struct Editor {
    layout: Layout,
    tool: Tool,
    enabled: bool,
}

impl Editor {
    pub fn new(layout: &Layout) -> Editor {
        Editor {
            layout: layout.clone(),
            tool: Tool::Wall,
            enabled: true,
        }
    }

    /// Start editing a copy of another layout. The tool and enabled flag are kept.
    pub fn load(&mut self, layout: &Layout) {
        self.layout = layout.clone();
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Apply the selected tool to one cell. Returns true if the layout changed.
    ///
    /// Nothing happens while disabled, or for points on (or beyond) the outer border, which always stays wall.
    pub fn apply_at(&mut self, row: RowIndex, col: ColumnIndex) -> bool {

        let point = Point::from_row_column_indices(row, col);
        if !self.enabled || !self.layout.is_valid_point(point) || self.layout.is_border(point) {
            return false;
        }

        let before = self.layout.cell(point);
        match self.tool {
            Tool::Wall => {
                let toggled = match before {
                    Some(CellKind::Start) | Some(CellKind::Goal) | Some(CellKind::Wall) => CellKind::Floor,
                    _ => CellKind::Wall,
                };
                self.layout.set_cell(point, toggled);
            }
            Tool::Start => {
                self.move_marker(CellKind::Start, point);
                self.layout.set_start(point);
            }
            Tool::Goal => {
                self.move_marker(CellKind::Goal, point);
                self.layout.set_goal(point);
            }
            Tool::Ice => {
                self.layout.set_cell(point, CellKind::Ice);
            }
            Tool::Water => {
                self.layout.set_cell(point, CellKind::Water);
            }
            Tool::Fire => {
                self.layout.set_cell(point, CellKind::Fire);
            }
            Tool::Hole => {
                self.layout.set_cell(point, CellKind::Hole);
            }
        }

        let after = self.layout.cell(point);
        debug!("{:?} tool at {:?}: {:?} -> {:?}", self.tool, point, before, after);
        before != after
    }

    /// Validation and analysis of the layout as it stands now.
    pub fn status(&self) -> EditorStatus {
        EditorStatus {
            validation: validate(&self.layout.to_serialized()),
            analysis: analyze(&self.layout),
        }
    }

    // Single marker cells: clear every existing copy before placing the new one.
    fn move_marker(&mut self, marker: CellKind, to: Point) {
        let existing = self.layout
            .iter_cells()
            .filter(|&(_, cell)| cell == marker)
            .map(|(point, _)| point)
            .collect::<Vec<_>>();
        for point in existing {
            self.layout.set_cell(point, CellKind::Floor);
        }
        self.layout.set_cell(to, marker);
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::maze::SerializedMaze;
    use crate::parser::parse;

    const ROWS: [&str; 9] = ["#########",
                             "#S..#...#",
                             "#.#.#.#.#",
                             "#.#...#.#",
                             "#.#####.#",
                             "#...I...#",
                             "###.#.#W#",
                             "#F....#G#",
                             "#########"];

    fn editor() -> Editor {
        let maze = SerializedMaze::new("edited", 9, ROWS.iter().map(|row| row.to_string()).collect());
        Editor::new(&parse(&maze))
    }

    fn apply(e: &mut Editor, row: usize, col: usize) -> bool {
        e.apply_at(RowIndex(row), ColumnIndex(col))
    }

    #[test]
    fn starts_enabled_with_the_wall_tool() {
        let e = editor();
        assert_eq!(e.tool(), Tool::Wall);
        assert!(e.is_enabled());
        assert!(e.status().validation.ok);
    }

    #[test]
    fn border_cells_never_change() {
        let mut e = editor();
        let before = e.layout().clone();
        for &tool in &[Tool::Wall, Tool::Start, Tool::Goal, Tool::Ice, Tool::Water, Tool::Fire, Tool::Hole] {
            e.set_tool(tool);
            assert!(!apply(&mut e, 0, 4));
            assert!(!apply(&mut e, 8, 4));
            assert!(!apply(&mut e, 4, 0));
            assert!(!apply(&mut e, 4, 8));
            assert!(!apply(&mut e, 9, 4));
        }
        assert_eq!(*e.layout(), before);
    }

    #[test]
    fn disabled_editor_ignores_edits() {
        let mut e = editor();
        let before = e.layout().clone();
        e.set_enabled(false);
        assert!(!apply(&mut e, 1, 2));
        assert_eq!(*e.layout(), before);
        e.set_enabled(true);
        assert!(apply(&mut e, 1, 2));
        assert_eq!(e.layout().cell(Point::new(1, 2)), Some(CellKind::Wall));
    }

    #[test]
    fn wall_tool_toggles() {
        let mut e = editor();
        let p = Point::new(1, 2);
        assert!(apply(&mut e, 1, 2));
        assert_eq!(e.layout().cell(p), Some(CellKind::Wall));
        assert!(apply(&mut e, 1, 2));
        assert_eq!(e.layout().cell(p), Some(CellKind::Floor));
    }

    #[test]
    fn wall_tool_clears_markers_first() {
        let mut e = editor();
        assert!(apply(&mut e, 1, 1));
        assert_eq!(e.layout().cell(Point::new(1, 1)), Some(CellKind::Floor));
        let status = e.status();
        assert!(!status.validation.ok);
        assert_eq!(status.validation.errors, vec![String::from("Expected exactly 1 start (S), found 0")]);

        assert!(apply(&mut e, 1, 1));
        assert_eq!(e.layout().cell(Point::new(1, 1)), Some(CellKind::Wall));
    }

    #[test]
    fn wall_tool_over_hazard_builds_a_wall() {
        let mut e = editor();
        assert!(apply(&mut e, 5, 4));
        assert_eq!(e.layout().cell(Point::new(5, 4)), Some(CellKind::Wall));
    }

    #[test]
    fn start_tool_keeps_a_single_start() {
        let mut e = editor();
        e.set_tool(Tool::Start);
        assert!(apply(&mut e, 3, 3));
        assert!(apply(&mut e, 5, 2));
        let layout = e.layout();
        assert_eq!(layout.count(CellKind::Start), 1);
        assert_eq!(layout.cell(Point::new(5, 2)), Some(CellKind::Start));
        assert_eq!(layout.cell(Point::new(3, 3)), Some(CellKind::Floor));
        assert_eq!(layout.cell(Point::new(1, 1)), Some(CellKind::Floor));
        assert_eq!(layout.start(), Point::new(5, 2));
        assert!(e.status().validation.ok);
    }

    #[test]
    fn goal_tool_keeps_a_single_goal() {
        let mut e = editor();
        e.set_tool(Tool::Goal);
        assert!(apply(&mut e, 3, 5));
        let layout = e.layout();
        assert_eq!(layout.count(CellKind::Goal), 1);
        assert_eq!(layout.goal(), Point::new(3, 5));
        assert_eq!(layout.cell(Point::new(7, 7)), Some(CellKind::Floor));
    }

    #[test]
    fn hazards_overwrite_anything() {
        let mut e = editor();
        e.set_tool(Tool::Hole);
        assert!(apply(&mut e, 7, 7));
        assert_eq!(e.layout().cell(Point::new(7, 7)), Some(CellKind::Hole));
        assert!(!apply(&mut e, 7, 7));

        let status = e.status();
        assert_eq!(status.validation.errors, vec![String::from("Expected exactly 1 goal (G), found 0")]);

        e.set_tool(Tool::Water);
        assert!(apply(&mut e, 1, 1));
        assert_eq!(e.layout().cell(Point::new(1, 1)), Some(CellKind::Water));
        e.set_tool(Tool::Fire);
        assert!(apply(&mut e, 2, 1));
        assert_eq!(e.layout().cell(Point::new(2, 1)), Some(CellKind::Fire));
        e.set_tool(Tool::Ice);
        assert!(apply(&mut e, 2, 3));
        assert_eq!(e.layout().cell(Point::new(2, 3)), Some(CellKind::Ice));
    }

    #[test]
    fn status_follows_every_edit() {
        let mut e = editor();
        let first = e.status().analysis.shortest_path_length;
        assert!(first.is_some());

        // The goal's only open neighbour becomes a hole.
        e.set_tool(Tool::Hole);
        assert!(apply(&mut e, 6, 7));
        let status = e.status();
        assert_eq!(status.analysis.shortest_path_length, None);
        assert_eq!(status.validation.errors, vec![String::from("Goal is not reachable from start")]);
    }

    #[test]
    fn load_copies_and_keeps_settings() {
        let mut e = editor();
        e.set_tool(Tool::Fire);
        e.set_enabled(false);
        let source = editor().layout().clone();
        e.load(&source);
        e.set_enabled(true);
        assert!(apply(&mut e, 1, 2));
        assert_eq!(e.tool(), Tool::Fire);
        assert_eq!(source.cell(Point::new(1, 2)), Some(CellKind::Floor));
        assert_eq!(e.layout().cell(Point::new(1, 2)), Some(CellKind::Fire));
    }
}
