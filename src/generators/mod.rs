pub mod backtracker;

use rand::prelude::*;

use crate::grids::Direction;

/// One side of a newly carved passage: the flag at `(x, y)` toward
/// `direction` was just set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

pub trait Generator {
    /// Advances generation by exactly one carved passage. Returns the two
    /// changes that passage made, source side first, or `None` once the
    /// maze is complete. The terminal `None` repeats on every later call.
    fn step(&mut self) -> Option<[CellChange; 2]>;

    /// Runs `step` to exhaustion.
    fn generate_maze(&mut self);

    fn is_done(&self) -> bool;
}

/// Permutation strategy for the frontier push order. The shuffle is the
/// sole source of maze variety, so tests swap in a fixed one.
pub trait Shuffle {
    fn shuffle(&mut self, directions: &mut [Direction]);
}

pub struct RngShuffle<R: Rng> {
    rng: R,
}

impl RngShuffle<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> RngShuffle<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngShuffle<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Shuffle for RngShuffle<R> {
    fn shuffle(&mut self, directions: &mut [Direction]) {
        directions.shuffle(&mut self.rng);
    }
}
