use crate::dims::Dims;
use crate::maze::CellWall;

/// Event sink toward an optional presentation layer.
///
/// The core only emits these notifications; it never waits on the sink and
/// never depends on it for correctness. Coordinates are grid positions, the
/// maze's [`origin`](crate::maze::Maze::origin) offset is the renderer's
/// business.
pub trait MazeObserver {
    /// A cell exists and may be rendered.
    fn cell_ready(&mut self, _cell: Dims) {}

    /// The given wall of `cell` was carved away.
    fn wall_broken(&mut self, _cell: Dims, _wall: CellWall) {}

    /// The solver moved between two adjacent cells. `undo` is true when the
    /// move is being retracted during backtracking.
    fn path_segment(&mut self, _from: Dims, _to: Dims, _undo: bool) {}
}

/// Observer that drops every event, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MazeObserver for NullObserver {}
