use log::debug;
use rand::prelude::*;

use crate::generators::{CellChange, Generator, RngShuffle, Shuffle};
use crate::grids::cell_grid::CellGrid;
use crate::grids::{Direction, DIRECTIONS};

/// A pending move: try to carve from `(x, y)` toward `direction`.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    x: usize,
    y: usize,
    direction: Direction,
}

/// Recursive-backtracking maze generation, run one passage at a time.
///
/// The usual recursive formulation is flattened onto an explicit stack so
/// the walk can be resumed between calls and never grows call depth with
/// maze size. Entries that land out of bounds or on an already visited
/// cell are discarded inside the same call; the caller only ever sees a
/// committed passage or the terminal `None`.
pub struct Backtracker<S: Shuffle = RngShuffle<ThreadRng>> {
    grid: CellGrid,
    stack: Vec<Frontier>,
    shuffle: S,
    done: bool,
}

impl Backtracker<RngShuffle<ThreadRng>> {
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_shuffle(width, height, RngShuffle::new())
    }
}

impl<S: Shuffle> Backtracker<S> {
    /// Panics if either dimension is zero.
    pub fn with_shuffle(width: usize, height: usize, shuffle: S) -> Self {
        let grid = CellGrid::with_dims(width, height);
        let stack = DIRECTIONS
            .iter()
            .map(|&direction| Frontier {
                x: 0,
                y: 0,
                direction,
            })
            .collect();

        debug!("new {}x{} backtracker", width, height);

        Self {
            grid,
            stack,
            shuffle,
            done: false,
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }
}

impl<S: Shuffle> Generator for Backtracker<S> {
    fn step(&mut self) -> Option<[CellChange; 2]> {
        loop {
            let op = match self.stack.pop() {
                Some(op) => op,
                None => {
                    if !self.done {
                        debug!("maze complete");
                        self.done = true;
                    }
                    return None;
                }
            };

            // out of bounds, not an observable step
            let (nx, ny) = match self.grid.neighbor_of(op.x, op.y, op.direction) {
                Some(neighbor) => neighbor,
                None => continue,
            };

            // another path got there first, skip it
            if self.grid.cell(nx, ny).is_visited() {
                continue;
            }

            self.grid.carve(op.x, op.y, op.direction);

            let opposite = -op.direction;
            let mut onward: Vec<Direction> = DIRECTIONS
                .iter()
                .copied()
                .filter(|&direction| direction != opposite)
                .collect();
            self.shuffle.shuffle(&mut onward);

            for direction in onward {
                self.stack.push(Frontier {
                    x: nx,
                    y: ny,
                    direction,
                });
            }

            return Some([
                CellChange {
                    x: op.x,
                    y: op.y,
                    direction: op.direction,
                },
                CellChange {
                    x: nx,
                    y: ny,
                    direction: opposite,
                },
            ]);
        }
    }

    fn generate_maze(&mut self) {
        while self.step().is_some() {}
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
