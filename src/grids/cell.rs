use crate::grids::Direction;

/// Packed wall flags, one bit per `Direction`. A set bit is a standing wall.
type WalledCell = u8;

const ALL_WALLS: WalledCell = 0b1111;

/// One maze cell: a visited flag and four independent walls.
///
/// The cell does not know its own coordinate; that is its index in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: WalledCell,
    visited: bool,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            walls: ALL_WALLS,
            visited: false,
        }
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Returns the previous visited state.
    #[inline]
    pub fn visit(&mut self) -> bool {
        let was = self.visited;
        self.visited = true;
        was
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        get_bit(self.walls, dir.bit())
    }

    /// Knocks down one wall. Returns whether it was still standing.
    ///
    /// Crate-private: shared walls must go through `WallGrid` so both sides
    /// are cleared together.
    #[inline]
    pub(crate) fn clear_wall(&mut self, dir: Direction) -> bool {
        let was = self.has_wall(dir);
        self.walls = unset_bit(self.walls, dir.bit());
        was
    }

    /// Sides without a wall.
    pub fn open_walls(&self) -> impl Iterator<Item = Direction> + '_ {
        let all: &'static [Direction; 4] = &Direction::ALL;
        all.iter().copied().filter(move |dir| !self.has_wall(*dir))
    }

    #[inline]
    pub fn wall_count(&self) -> u32 {
        self.walls.count_ones()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn get_bit(n: WalledCell, k: usize) -> bool {
    (n >> k) & 1 != 0
}

#[inline(always)]
fn unset_bit(n: WalledCell, k: usize) -> WalledCell {
    n & !(1 << k)
}
