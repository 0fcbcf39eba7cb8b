use crate::error::MazeError;
use crate::grids::{Coord, Dimensions, Direction, DEFAULT_DIMS};

/// A boundary wall to knock out once the maze is carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    pub coord: Coord,
    pub side: Direction,
}

impl Opening {
    pub fn new(coord: Coord, side: Direction) -> Self {
        Self { coord, side }
    }

    /// Back wall of the middle cell on the `z = 0` edge.
    pub fn default_entrance(width: usize) -> Self {
        Self::new((width / 2, 0), Direction::Back)
    }

    /// Front wall of the middle cell on the far `z` edge.
    pub fn default_exit(width: usize, depth: usize) -> Self {
        Self::new((width / 2, depth.saturating_sub(1)), Direction::Front)
    }
}

/// Everything needed to carve one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub depth: usize,
    pub origin: Coord,
    pub entrance: Option<Opening>,
    pub exit: Option<Opening>,
}

impl MazeConfig {
    /// Starts at `(0, 0)` with the default entrance and exit for this size.
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            origin: (0, 0),
            entrance: Some(Opening::default_entrance(width)),
            exit: Some(Opening::default_exit(width, depth)),
        }
    }

    pub fn with_origin(mut self, origin: Coord) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_entrance(mut self, entrance: Opening) -> Self {
        self.entrance = Some(entrance);
        self
    }

    pub fn with_exit(mut self, exit: Opening) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn without_entrance(mut self) -> Self {
        self.entrance = None;
        self
    }

    pub fn without_exit(mut self) -> Self {
        self.exit = None;
        self
    }

    /// Configured openings, entrance first.
    pub fn openings(&self) -> impl Iterator<Item = Opening> {
        self.entrance.into_iter().chain(self.exit)
    }

    /// Catches every configuration error up front, before a grid is built.
    pub fn validate(&self) -> Result<(), MazeError> {
        let dims = Dimensions::new(self.width, self.depth)?;
        dims.check(self.origin)?;

        for opening in self.openings() {
            dims.check(opening.coord)?;
            if !dims.is_boundary(opening.coord, opening.side) {
                return Err(MazeError::InteriorWall {
                    coord: opening.coord,
                    side: opening.side,
                });
            }
        }

        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIMS.0, DEFAULT_DIMS.1)
    }
}
