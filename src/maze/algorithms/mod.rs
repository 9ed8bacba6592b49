mod depth_first_search;
mod solver;

pub use depth_first_search::DepthFirstSearch;
pub use solver::{SolveReport, Solver};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use super::{CellWall, Maze};
use crate::dims::Dims;
use crate::observer::MazeObserver;
use crate::progress::ProgressHandle;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
    #[error("generation stopped before completion")]
    Stopped,
}

/// Builds a perfect maze of the given size.
///
/// A fixed `seed` reproduces an identical maze; `None` seeds from the thread
/// RNG. The observer hears about every cell and carved wall; `progress` can
/// be polled or stopped from another clone of the handle. On success every
/// cell is reachable from the entrance and all visited flags are cleared.
pub fn generate(
    origin: Dims,
    size: Dims,
    seed: Option<u64>,
    observer: &mut dyn MazeObserver,
    progress: ProgressHandle,
) -> Result<Maze, GenError> {
    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));

    log::debug!("generating {}x{} maze, seed: {:?}", size.0, size.1, seed);

    let mut maze = Maze::new(origin, size)?;
    for pos in Dims::iter_fill(Dims::ZERO, size) {
        observer.cell_ready(pos);
    }

    // External ingress and egress. These are boundary openings, not edges
    // between two cells, so neither cell is marked visited.
    let entrance = maze.entrance();
    let exit = maze.exit();
    maze.break_outer_wall(entrance, CellWall::Top);
    observer.wall_broken(entrance, CellWall::Top);
    maze.break_outer_wall(exit, CellWall::Bottom);
    observer.wall_broken(exit, CellWall::Bottom);

    DepthFirstSearch::carve(&mut maze, &mut rng, observer, &progress)?;

    maze.reset_visited();
    progress.lock().finish();

    log::debug!("maze generated");

    Ok(maze)
}
