pub mod cell;
pub mod wall_grid;

pub use cell::Cell;
pub use wall_grid::WallGrid;

use crate::error::MazeError;

/// Width and depth used when nothing else is asked for.
pub const DEFAULT_DIMS: (usize, usize) = (15, 15);

/// `(x, z)` position of a cell, 0-indexed.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub depth: usize,
}

impl Dimensions {
    /// Both axes non-zero and the cell count addressable.
    pub fn new(width: usize, depth: usize) -> Result<Self, MazeError> {
        match width.checked_mul(depth) {
            Some(count) if count > 0 => Ok(Self { width, depth }),
            _ => Err(MazeError::InvalidDimensions { width, depth }),
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.depth
    }

    #[inline]
    pub fn contains(&self, x: usize, z: usize) -> bool {
        x < self.width && z < self.depth
    }

    pub fn check(&self, coord: Coord) -> Result<(), MazeError> {
        if self.contains(coord.0, coord.1) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                width: self.width,
                depth: self.depth,
            })
        }
    }

    /// Whether the `side` wall of an in-range `coord` faces out of the grid.
    pub fn is_boundary(&self, coord: Coord, side: Direction) -> bool {
        self.contains(coord.0, coord.1)
            && side
                .offset(coord)
                .map_or(true, |(x, z)| !self.contains(x, z))
    }
}

/// Side of a cell. `Left`/`Right` move along x, `Front`/`Back` along z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Front = 2,
    Back = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Front,
        Direction::Back,
    ];

    /// Bit used for this side in a cell's wall mask.
    #[inline]
    pub fn bit(self) -> usize {
        self as usize
    }

    /// Step `(x, z)` one cell towards this side. `None` when that would go
    /// below zero; the upper bound is the grid's business.
    #[inline]
    pub fn offset(self, (x, z): Coord) -> Option<Coord> {
        match self {
            Direction::Left => x.checked_sub(1).map(|x| (x, z)),
            Direction::Right => x.checked_add(1).map(|x| (x, z)),
            Direction::Front => z.checked_add(1).map(|z| (x, z)),
            Direction::Back => z.checked_sub(1).map(|z| (x, z)),
        }
    }

    /// Direction that leads from `from` to `to`, if the two are grid-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| dir.offset(from) == Some(to))
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Front => Direction::Back,
            Direction::Back => Direction::Front,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Front,
            3 => Direction::Back,
            _ => unreachable!(),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Front => "front",
            Direction::Back => "back",
        };
        f.write_str(name)
    }
}

pub type Neighbor = (Coord, Direction);

/// In-bounds neighbors of one cell. Iterates right, left, front, back,
/// skipping sides that fall off the grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub right: Option<Coord>,
    pub left: Option<Coord>,
    pub front: Option<Coord>,
    pub back: Option<Coord>,

    counter: u8,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            right: None,
            left: None,
            front: None,
            back: None,
            counter: 0,
        }
    }

    pub fn get(&self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Right => self.right,
            Direction::Left => self.left,
            Direction::Front => self.front,
            Direction::Back => self.back,
        }
    }

    pub(crate) fn set(&mut self, dir: Direction, coord: Option<Coord>) {
        match dir {
            Direction::Right => self.right = coord,
            Direction::Left => self.left = coord,
            Direction::Front => self.front = coord,
            Direction::Back => self.back = coord,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = match self.counter {
                0 => Direction::Right,
                1 => Direction::Left,
                2 => Direction::Front,
                3 => Direction::Back,
                _ => return None,
            };
            self.counter += 1;
            if let Some(coord) = self.get(dir) {
                return Some((coord, dir));
            }
        }
    }
}
