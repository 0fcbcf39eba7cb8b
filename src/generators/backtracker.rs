use log::{debug, trace};
use rand::prelude::*;

use crate::error::MazeError;
use crate::generators::Generator;
use crate::grids::{Coord, Neighbor, WallGrid};
use crate::observer::{CellObserver, NoopObserver};

/// Randomized depth-first "recursive backtracker".
///
/// The recursion lives on an explicit stack: the top frame is the current
/// cell, each step either carves into a random unvisited neighbor of it or
/// pops it. Random draws happen only when there is at least one candidate,
/// so a given random sequence always yields the same maze.
pub struct RecursiveBacktracker<R, O = NoopObserver> {
    grid: WallGrid,
    rng: R,
    observer: O,
    stack: Vec<Coord>,
    pending_origin: Option<Coord>,
    max_depth: usize,
    done: bool,
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn new(grid: WallGrid, origin: Coord, rng: R) -> Result<Self, MazeError> {
        Self::with_observer(grid, origin, rng, NoopObserver)
    }
}

impl<R: Rng, O: CellObserver> RecursiveBacktracker<R, O> {
    /// Fails with `OutOfBounds` before touching anything if `origin` is not
    /// in the grid.
    pub fn with_observer(grid: WallGrid, origin: Coord, rng: R, observer: O) -> Result<Self, MazeError> {
        grid.check(origin)?;

        Ok(Self {
            stack: Vec::with_capacity(grid.cell_count()),
            grid,
            rng,
            observer,
            pending_origin: Some(origin),
            max_depth: 0,
            done: false,
        })
    }

    /// Frames currently on the stack, top last.
    pub fn stack(&self) -> &[Coord] {
        &self.stack
    }

    pub fn current(&self) -> Option<Coord> {
        self.stack.last().copied()
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    fn visit(&mut self, coord: Coord) {
        self.grid.visit(coord);
        self.observer
            .on_visited(coord, self.grid.cell_at(coord.0, coord.1));

        self.stack.push(coord);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn clear_shared_wall(&mut self, (previous, dir): Neighbor) {
        if let Some(current) = self.grid.clear_wall_towards(previous, dir) {
            self.observer.on_wall_cleared(previous, dir);
            self.observer.on_wall_cleared(current, -dir);
        }
    }

    /// Uniform pick among the unvisited neighbors of `coord`.
    fn select_unvisited_neighbor(&mut self, coord: Coord) -> Option<Neighbor> {
        let candidates = self.grid.unvisited_neighbors(coord);
        candidates.choose(&mut self.rng).copied()
    }
}

impl<R: Rng, O: CellObserver> Generator for RecursiveBacktracker<R, O> {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        if let Some(origin) = self.pending_origin.take() {
            debug!(
                "carving {}x{} maze from {:?}",
                self.grid.width(),
                self.grid.depth(),
                origin
            );
            self.visit(origin);
            return;
        }

        let current = match self.current() {
            Some(current) => current,
            None => {
                self.done = true;
                return;
            }
        };

        match self.select_unvisited_neighbor(current) {
            Some((next, dir)) => {
                trace!("carve {:?} -> {:?}", current, next);
                self.visit(next);
                self.clear_shared_wall((current, dir));
            }
            None => {
                trace!("backtrack from {:?}", current);
                self.stack.pop();
                if self.stack.is_empty() {
                    self.done = true;
                    debug!(
                        "maze complete: {} cells, deepest branch {}",
                        self.grid.cell_count(),
                        self.max_depth
                    );
                }
            }
        }
    }

    fn generate_maze(&mut self) -> &WallGrid {
        loop {
            self.step_generation();
            if self.done {
                break;
            }
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }
}
