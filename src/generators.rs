use rand::seq::SliceRandom;
use rand::Rng;

use crate::cells::{CellKind, Point, COMPASS_DIRECTIONS};
use crate::layout::Layout;
use crate::maze::is_allowed_size;

/// Share of walls, in percent, a generated maze is opened up to.
pub const GENERATED_WALL_DENSITY_PERCENT: usize = 55;

/// Generate a maze that always validates: allowed size, walled border, one start at (1, 1),
/// one goal at (size - 2, size - 2) reachable from it, and no more than 55% walls.
///
/// Returns None for a size that is not allowed.
///
/// Rooms sit on the odd rows and columns with walls in between. A recursive backtracker (randomised
/// depth first search) knocks out walls between rooms, which gives a perfect maze where every room
/// reaches every other. A perfect maze on this lattice is just over 60% walls for the smaller sizes,
/// so random interior walls are then removed. Removing walls only ever adds routes.
/// Finally `hazards` cells of ice, water or fire are dropped onto plain floor.
pub fn solvable_maze<R: Rng, S: Into<String>>(rng: &mut R, size: usize, name: S, hazards: usize) -> Option<Layout> {

    if !is_allowed_size(size) {
        return None;
    }

    let start = Point::new(1, 1);
    let goal = Point::new(size - 2, size - 2);
    let mut layout = Layout::new(name, size, start, goal);

    recursive_backtracker(&mut layout, rng, start);
    open_random_walls(&mut layout, rng, GENERATED_WALL_DENSITY_PERCENT);

    layout.set_cell(start, CellKind::Start);
    layout.set_cell(goal, CellKind::Goal);
    scatter_hazards(&mut layout, rng, hazards);

    Some(layout)
}

fn recursive_backtracker<R: Rng>(layout: &mut Layout, rng: &mut R, from: Point) {

    layout.set_cell(from, CellKind::Floor);
    let mut stack = vec![from];

    while let Some(&room) = stack.last() {

        // Rooms two steps away that are still solid, with the wall cell in between.
        let unvisited = COMPASS_DIRECTIONS.iter()
            .filter_map(|&dir| {
                let between = room.offset(dir)?;
                let next = between.offset(dir)?;
                if layout.is_valid_point(next) && !layout.is_border(next) &&
                   layout.cell(next) == Some(CellKind::Wall) {
                    Some((between, next))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        if let Some(&(between, next)) = unvisited.choose(rng) {
            layout.set_cell(between, CellKind::Floor);
            layout.set_cell(next, CellKind::Floor);
            stack.push(next);
        } else {
            stack.pop();
        }
    }
}

fn open_random_walls<R: Rng>(layout: &mut Layout, rng: &mut R, max_density_percent: usize) {

    let mut interior_walls = layout.iter_cells()
        .filter(|&(point, cell)| cell == CellKind::Wall && !layout.is_border(point))
        .map(|(point, _)| point)
        .collect::<Vec<_>>();
    interior_walls.shuffle(rng);

    let cells_count = layout.cells_count();
    let mut walls = layout.count(CellKind::Wall);
    while walls * 100 > cells_count * max_density_percent {
        match interior_walls.pop() {
            Some(point) => {
                layout.set_cell(point, CellKind::Floor);
                walls -= 1;
            }
            None => break,
        }
    }
}

fn scatter_hazards<R: Rng>(layout: &mut Layout, rng: &mut R, count: usize) {

    const HAZARDS: [CellKind; 3] = [CellKind::Ice, CellKind::Water, CellKind::Fire];

    let mut floors = layout.iter_cells()
        .filter(|&(_, cell)| cell == CellKind::Floor)
        .map(|(point, _)| point)
        .collect::<Vec<_>>();
    floors.shuffle(rng);

    for point in floors.into_iter().take(count) {
        let hazard = HAZARDS[rng.gen_range(0..HAZARDS.len())];
        layout.set_cell(point, hazard);
    }
}
