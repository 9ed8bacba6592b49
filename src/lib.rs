//! Maze generation and solving core.
//!
//! A rectangular grid of walled cells is carved into a perfect maze by
//! randomized backtracking and solved by a depth-first search over the
//! carved edges. Rendering, input handling and pacing live elsewhere; the
//! crate only emits [`observer::MazeObserver`] events at its boundary.

pub mod array;
pub mod dims;
pub mod maze;
pub mod observer;
pub mod progress;
