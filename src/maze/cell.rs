use crate::dims::Dims;

/// One grid unit. A fresh cell has all four walls standing and no flags set.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    visited: bool,
    on_path: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
            visited: false,
            on_path: false,
        }
    }

    pub fn is_wall_present(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Top => self.top,
            CellWall::Right => self.right,
            CellWall::Bottom => self.bottom,
            CellWall::Left => self.left,
        }
    }

    pub fn is_wall_broken(&self, wall: CellWall) -> bool {
        !self.is_wall_present(wall)
    }

    /// Clears the flag for `wall`. Walls are never rebuilt. When `visit` is
    /// set the cell is also marked visited, which is how carving claims the
    /// far cell of a broken edge; boundary openings pass `false`.
    pub fn break_wall(&mut self, wall: CellWall, visit: bool) {
        match wall {
            CellWall::Top => self.top = false,
            CellWall::Right => self.right = false,
            CellWall::Bottom => self.bottom = false,
            CellWall::Left => self.left = false,
        }
        if visit {
            self.visited = true;
        }
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn unvisit(&mut self) {
        self.visited = false;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn mark_path(&mut self) {
        self.on_path = true;
    }

    pub fn unmark_path(&mut self) {
        self.on_path = false;
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    /// Number of still-standing walls, 0 to 4. Three means a dead end.
    pub fn wall_count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .filter(|&w| w)
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    /// Offset of the neighbor behind this wall. Rows grow downward.
    pub fn to_coord(self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Self::Top, Self::Right, Self::Bottom, Self::Left]
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, CellWall};

    #[test]
    fn new_cell_is_sealed_and_unvisited() {
        let cell = Cell::new();
        assert_eq!(cell.wall_count(), 4);
        assert!(!cell.is_visited());
        assert!(!cell.is_on_path());
    }

    #[test]
    fn break_wall_controls_visit() {
        let mut cell = Cell::new();
        cell.break_wall(CellWall::Top, false);
        assert!(cell.is_wall_broken(CellWall::Top));
        assert!(!cell.is_visited());

        cell.break_wall(CellWall::Right, true);
        assert!(cell.is_visited());
        assert_eq!(cell.wall_count(), 2);
    }

    #[test]
    fn visit_is_idempotent() {
        let mut cell = Cell::new();
        cell.visit();
        cell.visit();
        assert!(cell.is_visited());
        cell.unvisit();
        cell.unvisit();
        assert!(!cell.is_visited());
    }

    #[test]
    fn reverse_wall_is_an_involution() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(
                wall.to_coord() + wall.reverse_wall().to_coord(),
                crate::dims::Dims::ZERO
            );
        }
    }
}
