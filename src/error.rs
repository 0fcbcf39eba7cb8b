use crate::grids::{Coord, Direction};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Zero-sized axis, or more cells than fit in memory addressing.
    #[error("invalid maze dimensions {width}x{depth}: both must be at least 1")]
    InvalidDimensions { width: usize, depth: usize },

    #[error("coordinate {coord:?} is outside the {width}x{depth} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        depth: usize,
    },

    #[error("cells {a:?} and {b:?} do not share a wall")]
    NotAdjacent { a: Coord, b: Coord },

    /// An opening was requested on a wall shared with another cell.
    #[error("the {side} wall of {coord:?} is not on the maze boundary")]
    InteriorWall { coord: Coord, side: Direction },
}
