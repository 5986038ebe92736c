use std::collections::VecDeque;

use bit_set::BitSet;
use smallvec::SmallVec;

use crate::cells::Point;
use crate::masks::PassabilityMask;
use crate::utils;
use crate::utils::FnvHashMap;

/// Hop counts from a start point to every point reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Point,
    distances: FnvHashMap<Point, u32>,
    max_distance: u32,
}

impl Distances {
    /// Breadth first flood fill over the passable cells of the mask.
    ///
    /// Returns None if the start is off the grid. The start itself is always given distance 0,
    /// even when its own cell is blocked.
    pub fn new(mask: &PassabilityMask, start: Point) -> Option<Distances> {

        if !mask.contains(start) {
            return None;
        }

        let mut distances = utils::fnv_hashmap(mask.size() * mask.size());
        distances.insert(start, 0);
        let mut max = 0;

        // Every step costs one, so the first time a point is discovered is also its shortest distance.
        // Recording the distance at discovery doubles as the visited set.
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        while let Some(point) = frontier.pop_front() {

            let distance_to_point = distances[&point];
            if distance_to_point > max {
                max = distance_to_point;
            }

            for neighbour in mask.passable_neighbours(point).iter() {
                if !distances.contains_key(neighbour) {
                    distances.insert(*neighbour, distance_to_point + 1);
                    frontier.push_back(*neighbour);
                }
            }
        }

        Some(Distances {
            start,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, point: Point) -> Option<u32> {
        self.distances.get(&point).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points(&self) -> SmallVec<[Point; 8]> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == self.max_distance)
            .map(|(point, _)| *point)
            .collect::<SmallVec<[Point; 8]>>();
        furthest.sort();
        furthest
    }
}

/// Number of steps on the shortest route from start to goal, or None if there is no route.
///
/// Stops as soon as the goal comes off the queue. Points are marked visited when queued so each one
/// is expanded at most once.
pub fn shortest_path_length(mask: &PassabilityMask, start: Point, goal: Point) -> Option<u32> {

    if !mask.contains(start) || !mask.contains(goal) {
        return None;
    }

    let size = mask.size();
    let mut visited = BitSet::with_capacity(size * size);
    let mut frontier = VecDeque::new();
    visited.insert(start.row * size + start.col);
    frontier.push_back((start, 0));

    while let Some((point, hops)) = frontier.pop_front() {
        if point == goal {
            return Some(hops);
        }
        for neighbour in mask.passable_neighbours(point).iter() {
            if visited.insert(neighbour.row * size + neighbour.col) {
                frontier.push_back((*neighbour, hops + 1));
            }
        }
    }

    None
}
