pub mod backtracker;

pub use backtracker::RecursiveBacktracker;

use crate::grids::WallGrid;

/// A maze generator that can be driven one step at a time (for animated
/// presentation) or run to completion.
pub trait Generator {
    fn step_generation(&mut self);
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
}
