//! Hooks for whatever is drawing the maze.
//!
//! Generation only ever calls out through [`CellObserver`]; observers get
//! shared data and cannot steer the traversal.

use log::trace;

use crate::grids::{Cell, Coord, Direction};

pub trait CellObserver {
    /// `coord` has just been marked visited.
    fn on_visited(&mut self, _coord: Coord, _cell: &Cell) {}

    /// The `side` wall of `coord` has been removed.
    fn on_wall_cleared(&mut self, _coord: Coord, _side: Direction) {}
}

impl<O: CellObserver + ?Sized> CellObserver for &mut O {
    fn on_visited(&mut self, coord: Coord, cell: &Cell) {
        (**self).on_visited(coord, cell)
    }

    fn on_wall_cleared(&mut self, coord: Coord, side: Direction) {
        (**self).on_wall_cleared(coord, side)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {}

/// Forwards every notification to `log` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CellObserver for LogObserver {
    fn on_visited(&mut self, coord: Coord, _cell: &Cell) {
        trace!("visited {:?}", coord);
    }

    fn on_wall_cleared(&mut self, coord: Coord, side: Direction) {
        trace!("cleared {} wall of {:?}", side, coord);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    Visited(Coord),
    WallCleared(Coord, Direction),
}

/// Records notifications in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<MazeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|event| match event {
            MazeEvent::Visited(coord) => Some(*coord),
            _ => None,
        })
    }

    pub fn cleared_walls(&self) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        self.events.iter().filter_map(|event| match event {
            MazeEvent::WallCleared(coord, side) => Some((*coord, *side)),
            _ => None,
        })
    }
}

impl CellObserver for EventLog {
    fn on_visited(&mut self, coord: Coord, _cell: &Cell) {
        self.events.push(MazeEvent::Visited(coord));
    }

    fn on_wall_cleared(&mut self, coord: Coord, side: Direction) {
        self.events.push(MazeEvent::WallCleared(coord, side));
    }
}
