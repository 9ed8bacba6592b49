use crate::array::Array2D;
use crate::dims::Dims;

use super::algorithms::GenError;
use super::cell::{Cell, CellWall};

/// Rectangular grid of [`Cell`]s with adjacency-aware wall operations.
///
/// The maze exclusively owns its cells; outside code reaches them through
/// the accessors only. Entrance and exit are fixed at the top-left and
/// bottom-right corners.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    origin: Dims,
}

impl Maze {
    /// Creates a grid of sealed cells. Rejects non-positive dimensions.
    ///
    /// `origin` is a render offset carried for the presentation layer; the
    /// algorithms never look at it.
    pub fn new(origin: Dims, size: Dims) -> Result<Self, GenError> {
        let cells = Array2D::new_dims(Cell::new(), size).ok_or(GenError::InvalidSize(size))?;

        Ok(Maze { cells, origin })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn origin(&self) -> Dims {
        self.origin
    }

    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let size = self.size();
        0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
    }

    /// True iff both cells are in bounds and exactly one step apart.
    /// A cell is never adjacent to itself, nor to a diagonal neighbor.
    pub fn are_adjacent(&self, cell: Dims, other: Dims) -> bool {
        self.is_in_bounds(cell) && self.is_in_bounds(other) && (cell - other).abs_sum() == 1
    }

    /// Which wall of `cell` faces `other`, if the two are one step apart.
    pub fn which_wall_between(cell: Dims, other: Dims) -> Option<CellWall> {
        match other - cell {
            Dims(1, 0) => Some(CellWall::Right),
            Dims(-1, 0) => Some(CellWall::Left),
            Dims(0, 1) => Some(CellWall::Bottom),
            Dims(0, -1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// Carves the shared edge between two adjacent cells, clearing the wall
    /// flag on both sides and marking both cells visited. No-op on
    /// non-adjacent or identical cells. Returns the wall broken on `cell`'s
    /// side so callers can report the carve.
    pub fn break_walls_between(&mut self, cell: Dims, other: Dims) -> Option<CellWall> {
        if !self.are_adjacent(cell, other) {
            return None;
        }
        let wall = Self::which_wall_between(cell, other)?;

        self.cells[cell].break_wall(wall, true);
        self.cells[other].break_wall(wall.reverse_wall(), true);

        Some(wall)
    }

    /// Opens a boundary wall of a single cell without touching a neighbor
    /// and without marking the cell visited. Used for the maze's external
    /// ingress and egress, which are not edges between two cells.
    pub fn break_outer_wall(&mut self, cell: Dims, wall: CellWall) {
        if let Some(cell) = self.cells.get_mut(cell) {
            cell.break_wall(wall, false);
        }
    }

    /// True iff the two cells are adjacent and the edge between them has
    /// been carved. Both sides of the edge are consulted; they are kept in
    /// sync by [`break_walls_between`](Self::break_walls_between), so a
    /// disagreement means corrupted wall state and is logged.
    pub fn cells_are_pathable(&self, cell: Dims, other: Dims) -> bool {
        if !self.are_adjacent(cell, other) {
            return false;
        }
        let Some(wall) = Self::which_wall_between(cell, other) else {
            return false;
        };

        let open_here = self.cells[cell].is_wall_broken(wall);
        let open_there = self.cells[other].is_wall_broken(wall.reverse_wall());
        if open_here != open_there {
            log::warn!(
                "wall flags disagree between {:?} and {:?}: {} vs {}",
                cell,
                other,
                open_here,
                open_there,
            );
        }

        open_here && open_there
    }

    /// Clears the visited flag on every cell. Called after generation and at
    /// the start of every solve, so solves are independent of prior state.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.unvisit();
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visited()).count()
    }

    pub fn path_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_on_path()).count()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }
}
