//! Step-by-step recursive-backtracking maze generation.
//!
//! The maze is a spanning tree over a grid: exactly one path between any
//! two cells, no cycles. Instead of generating it all at once, the engine
//! exposes the walk as a resumable process where every call to
//! [`Generator::step`] commits exactly one carved passage and reports the
//! two cells it touched, until the terminal `None`.
//!
//! ```
//! use maze_steps::{Backtracker, Generator};
//!
//! let mut maze = Backtracker::new(16, 9);
//! while let Some([from, to]) = maze.step() {
//!     // one new passage per iteration, source side first
//!     let _ = (from, to);
//! }
//! print!("{}", maze.grid().ascii());
//! ```

pub mod generators;
pub mod grids;

pub use generators::backtracker::Backtracker;
pub use generators::{CellChange, Generator, RngShuffle, Shuffle};
pub use grids::cell_grid::CellGrid;
pub use grids::{Cell, Dimensions, Direction};
