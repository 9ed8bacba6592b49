use smallvec::SmallVec;

use crate::dims::Dims;
use crate::maze::{CellWall, Maze};
use crate::observer::MazeObserver;

/// Directional preference for candidate moves: east, south, west, north.
/// Biases the search toward the bottom-right exit; on a perfect maze it only
/// changes how many dead ends get explored, never which path is found.
const PREFERENCE: [CellWall; 4] = [
    CellWall::Right,
    CellWall::Bottom,
    CellWall::Left,
    CellWall::Top,
];

/// Outcome of a solve run.
///
/// `explored` counts every visited cell, abandoned branches included.
/// `path_length` counts the cells on the final path, entrance included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    pub found: bool,
    pub explored: usize,
    pub path_length: usize,
}

impl SolveReport {
    /// Share of explored cells that ended up on the path.
    pub fn efficiency(&self) -> f32 {
        self.path_length as f32 / self.explored as f32
    }
}

struct Frame {
    pos: Dims,
    candidates: SmallVec<[Dims; 4]>,
    cursor: usize,
}

/// Depth-first path search over carved edges only.
#[derive(Debug)]
pub struct Solver;

impl Solver {
    /// Finds and marks the path from entrance to exit.
    ///
    /// Visited state is reset up front, so repeated solves of the same maze
    /// are independent and produce identical results. The search relies on
    /// wall state alone; on a grid that is not fully connected it reports
    /// `found: false` for the unreachable region, which is an ordinary
    /// outcome rather than an error.
    pub fn solve(maze: &mut Maze, observer: &mut dyn MazeObserver) -> SolveReport {
        maze.reset_visited();

        let entrance = maze.entrance();
        let exit = maze.exit();

        maze.cells[entrance].visit();
        // the entrance has no incoming move but is on the path by convention
        maze.cells[entrance].mark_path();

        let mut found = entrance == exit;
        let mut stack = Vec::new();
        if !found {
            stack.push(Frame {
                pos: entrance,
                candidates: Self::candidates(maze, entrance),
                cursor: 0,
            });
        }

        'search: while !stack.is_empty() {
            let top = stack.len() - 1;
            let pos = stack[top].pos;

            let next = loop {
                let frame = &mut stack[top];
                let Some(&cand) = frame.candidates.get(frame.cursor) else {
                    break None;
                };
                frame.cursor += 1;

                // a deeper branch may have claimed the candidate meanwhile
                if !maze.cells[cand].is_visited() && maze.cells_are_pathable(pos, cand) {
                    break Some(cand);
                }
            };

            match next {
                Some(cand) => {
                    maze.cells[cand].visit();
                    maze.cells[cand].mark_path();
                    observer.path_segment(pos, cand, false);

                    if cand == exit {
                        found = true;
                        break 'search;
                    }

                    let candidates = Self::candidates(maze, cand);
                    stack.push(Frame {
                        pos: cand,
                        candidates,
                        cursor: 0,
                    });
                }
                None => {
                    // dead end: retract the move that entered this cell
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        maze.cells[pos].unmark_path();
                        observer.path_segment(parent.pos, pos, true);
                    }
                }
            }
        }

        let report = SolveReport {
            found,
            explored: maze.visited_count(),
            path_length: maze.path_cell_count(),
        };
        log::debug!(
            "solve finished: found: {}, explored: {}, path: {}",
            report.found,
            report.explored,
            report.path_length,
        );
        report
    }

    /// Unvisited neighbors of `pos` in preference order. Pathability is
    /// checked at move time, not here, mirroring the visited re-check.
    fn candidates(maze: &Maze, pos: Dims) -> SmallVec<[Dims; 4]> {
        PREFERENCE
            .iter()
            .map(|wall| pos + wall.to_coord())
            .filter(|&next| maze.get_cell(next).is_some_and(|cell| !cell.is_visited()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::{HashMap, HashSet};

    use super::{SolveReport, Solver};
    use crate::dims::Dims;
    use crate::maze::algorithms::generate;
    use crate::maze::{CellWall, Maze};
    use crate::observer::{MazeObserver, NullObserver};
    use crate::progress::ProgressHandle;

    fn gen(size: Dims, seed: u64) -> Maze {
        generate(
            Dims::ZERO,
            size,
            Some(seed),
            &mut NullObserver,
            ProgressHandle::new(),
        )
        .unwrap()
    }

    fn marked_cells(maze: &Maze) -> Vec<Dims> {
        Dims::iter_fill(Dims::ZERO, maze.size())
            .filter(|&pos| maze.get_cell(pos).unwrap().is_on_path())
            .collect()
    }

    /// The unique entrance-to-exit path, recomputed by an independent BFS
    /// over the carved-edge graph.
    fn bfs_path(maze: &Maze) -> Vec<Dims> {
        let mut parent: HashMap<Dims, Dims> = HashMap::new();
        let mut seen: HashSet<Dims> = HashSet::new();
        let mut queue = std::collections::VecDeque::new();

        seen.insert(maze.entrance());
        queue.push_back(maze.entrance());
        while let Some(pos) = queue.pop_front() {
            for wall in CellWall::get_in_order() {
                let next = pos + wall.to_coord();
                if maze.cells_are_pathable(pos, next) && seen.insert(next) {
                    parent.insert(next, pos);
                    queue.push_back(next);
                }
            }
        }

        let mut path = vec![maze.exit()];
        while let Some(&prev) = parent.get(path.last().unwrap()) {
            path.push(prev);
        }
        path.reverse();
        path
    }

    #[test]
    fn solves_every_generated_maze() {
        for (size, seed) in [(Dims(2, 2), 0), (Dims(10, 8), 7), (Dims(1, 6), 11)] {
            let mut maze = gen(size, seed);
            let report = Solver::solve(&mut maze, &mut NullObserver);

            assert!(report.found, "size {:?}", size);
            assert!(report.path_length >= 2);
            assert!(report.path_length <= size.product() as usize);
            assert!(report.explored >= report.path_length);
            assert!(report.efficiency() > 0.0 && report.efficiency() <= 1.0);
        }
    }

    #[test]
    fn marked_path_matches_reference_bfs() {
        let mut maze = gen(Dims(9, 9), 3);
        let report = Solver::solve(&mut maze, &mut NullObserver);
        assert!(report.found);

        let expected = bfs_path(&maze);
        assert_eq!(marked_cells(&maze).len(), expected.len());
        assert_eq!(report.path_length, expected.len());
        let marked: HashSet<Dims> = marked_cells(&maze).into_iter().collect();
        assert_eq!(marked, expected.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn seeded_two_by_two_scenario() {
        let mut maze = gen(Dims(2, 2), 42);
        let report = Solver::solve(&mut maze, &mut NullObserver);

        assert!(report.found);
        // tree distance between opposite corners of a 2x2 spanning tree is
        // 2 or 3 cells' worth of edges; check against the actual carve
        let expected = bfs_path(&maze);
        assert!(expected.len() == 3 || expected.len() == 4);
        assert_eq!(report.path_length, expected.len());
    }

    #[test]
    fn solving_twice_is_byte_identical() {
        let mut maze = gen(Dims(8, 8), 1001);
        let first = Solver::solve(&mut maze, &mut NullObserver);
        let first_marks = marked_cells(&maze);
        let second = Solver::solve(&mut maze, &mut NullObserver);

        assert_eq!(first, second);
        assert_eq!(first_marks, marked_cells(&maze));
    }

    #[test]
    fn sealed_grid_reports_no_path() {
        // solve before generate: every wall intact, nothing reachable
        let mut maze = Maze::new(Dims::ZERO, Dims(4, 4)).unwrap();
        let report = Solver::solve(&mut maze, &mut NullObserver);

        assert_eq!(
            report,
            SolveReport {
                found: false,
                explored: 1,
                path_length: 1,
            }
        );
    }

    #[test]
    fn single_cell_maze_is_already_solved() {
        let mut maze = gen(Dims(1, 1), 9);
        let report = Solver::solve(&mut maze, &mut NullObserver);
        assert_eq!(
            report,
            SolveReport {
                found: true,
                explored: 1,
                path_length: 1,
            }
        );
    }

    #[derive(Default)]
    struct MoveRecorder {
        forward: Vec<(Dims, Dims)>,
        undone: Vec<(Dims, Dims)>,
    }

    impl MazeObserver for MoveRecorder {
        fn path_segment(&mut self, from: Dims, to: Dims, undo: bool) {
            if undo {
                self.undone.push((from, to));
            } else {
                self.forward.push((from, to));
            }
        }
    }

    #[test]
    fn forward_moves_minus_undos_are_the_path_edges() {
        let mut maze = gen(Dims(7, 7), 77);
        let mut recorder = MoveRecorder::default();
        let report = Solver::solve(&mut maze, &mut recorder);
        assert!(report.found);

        // every undo retracts a move that actually happened
        for edge in &recorder.undone {
            assert!(recorder.forward.contains(edge));
        }
        assert_eq!(
            recorder.forward.len() - recorder.undone.len(),
            report.path_length - 1,
        );
    }
}
