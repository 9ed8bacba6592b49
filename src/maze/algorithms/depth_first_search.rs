use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{GenError, Random};
use crate::dims::Dims;
use crate::maze::{CellWall, Maze};
use crate::observer::MazeObserver;
use crate::progress::ProgressHandle;

/// Randomized recursive-backtracking carver.
///
/// Runs on an explicit stack so the call depth never tracks the grid size;
/// the traversal is otherwise the plain recursive algorithm.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Carves a spanning tree into a grid of sealed, unvisited cells,
    /// starting at the entrance. [`generate`](super::generate) is the usual
    /// entry point; it also opens the boundary walls and clears the visited
    /// flags afterwards.
    pub fn carve(
        maze: &mut Maze,
        rng: &mut Random,
        observer: &mut dyn MazeObserver,
        progress: &ProgressHandle,
    ) -> Result<(), GenError> {
        let cell_count = maze.size().product() as usize;
        progress.lock().from = cell_count;

        let mut stack = Vec::with_capacity(cell_count);
        let start = maze.entrance();
        maze.cells[start].visit();
        stack.push(start);

        let mut carved = 1usize;
        while let Some(current) = stack.pop() {
            // The candidate list is rebuilt from live visited flags every
            // time a cell resurfaces; resuming a list saved on the first
            // visit would skew the shape of the maze.
            let unvisited: SmallVec<[Dims; 4]> = CellWall::get_in_order()
                .into_iter()
                .map(|wall| current + wall.to_coord())
                .filter(|&pos| maze.get_cell(pos).is_some_and(|cell| !cell.is_visited()))
                .collect();

            if let Some(&chosen) = unvisited.choose(rng) {
                stack.push(current);
                if let Some(wall) = maze.break_walls_between(current, chosen) {
                    observer.wall_broken(current, wall);
                }
                stack.push(chosen);

                carved += 1;
                progress.lock().done = carved;
            }

            if progress.is_stopped() {
                return Err(GenError::Stopped);
            }
        }

        Ok(())
    }
}
