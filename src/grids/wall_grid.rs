use std::collections::VecDeque;

use crate::error::MazeError;
use crate::grids::{Cell, Coord, Dimensions, Direction, Neighbor, Neighborhood};

/// Dense `width x depth` grid of cells, stored row-major by `z`.
///
/// Every wall between two neighbors is stored twice, once on each cell's
/// facing side. Shared walls are only ever cleared through
/// [`WallGrid::clear_wall_between`], which removes both halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(width: usize, depth: usize) -> Result<Self, MazeError> {
        let dims = Dimensions::new(width, depth)?;

        Ok(Self {
            cells: vec![Cell::new(); dims.cell_count()],
            dims,
        })
    }

    /// Size fixed at construction.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.dims.depth
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index_of(&self, x: usize, z: usize) -> usize {
        debug_assert!(self.dims.contains(x, z));
        (self.dims.width * z) + x
    }

    #[inline]
    pub fn contains(&self, (x, z): Coord) -> bool {
        self.dims.contains(x, z)
    }

    #[inline]
    pub fn check(&self, coord: Coord) -> Result<(), MazeError> {
        self.dims.check(coord)
    }

    /// Panics when `(x, z)` is outside the grid.
    #[inline]
    pub fn cell_at(&self, x: usize, z: usize) -> &Cell {
        assert!(
            self.dims.contains(x, z),
            "cell ({}, {}) outside {}x{} grid",
            x,
            z,
            self.dims.width,
            self.dims.depth
        );
        &self.cells[self.index_of(x, z)]
    }

    /// Panics when `(x, z)` is outside the grid.
    #[inline]
    pub fn cell_at_mut(&mut self, x: usize, z: usize) -> &mut Cell {
        assert!(
            self.dims.contains(x, z),
            "cell ({}, {}) outside {}x{} grid",
            x,
            z,
            self.dims.width,
            self.dims.depth
        );
        let index = self.index_of(x, z);
        &mut self.cells[index]
    }

    #[inline]
    pub fn get(&self, (x, z): Coord) -> Option<&Cell> {
        if self.dims.contains(x, z) {
            Some(&self.cells[self.index_of(x, z)])
        } else {
            None
        }
    }

    /// Marks the cell visited, returning its previous state.
    pub fn visit(&mut self, (x, z): Coord) -> bool {
        self.cell_at_mut(x, z).visit()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let width = self.dims.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index % width, index / width), cell))
    }

    #[inline]
    pub fn neighbor_of(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        dir.offset(coord).filter(|next| self.contains(*next))
    }

    pub fn get_neighborhood_of(&self, coord: Coord) -> Neighborhood {
        let mut hood = Neighborhood::new();
        for dir in Direction::ALL.iter().copied() {
            hood.set(dir, self.neighbor_of(coord, dir));
        }
        hood
    }

    /// Unvisited neighbors of `coord` in neighborhood order, with the side
    /// of `coord` each one lies on.
    pub fn unvisited_neighbors(&self, coord: Coord) -> Vec<Neighbor> {
        self.get_neighborhood_of(coord)
            .filter(|((x, z), _)| !self.cell_at(*x, *z).is_visited())
            .collect()
    }

    /// Whether the `side` wall of `coord` faces out of the grid.
    pub fn is_boundary(&self, coord: Coord, side: Direction) -> bool {
        self.dims.is_boundary(coord, side)
    }

    /// Knocks down the wall shared by two adjacent cells, on both sides.
    /// Returns the side of `one` that was opened.
    pub fn clear_wall_between(&mut self, one: Coord, two: Coord) -> Result<Direction, MazeError> {
        self.check(one)?;
        self.check(two)?;
        let dir = Direction::between(one, two).ok_or(MazeError::NotAdjacent { a: one, b: two })?;

        self.clear_wall_towards(one, dir);
        Ok(dir)
    }

    /// Clears the `dir` wall of `coord` together with the facing wall of its
    /// neighbor, returning the neighbor. Nothing is touched when there is no
    /// neighbor on that side.
    pub fn clear_wall_towards(&mut self, coord: Coord, dir: Direction) -> Option<Coord> {
        if !self.contains(coord) {
            return None;
        }
        let (nx, nz) = self.neighbor_of(coord, dir)?;

        self.cell_at_mut(coord.0, coord.1).clear_wall(dir);
        self.cell_at_mut(nx, nz).clear_wall(-dir);

        Some((nx, nz))
    }

    /// Opens a wall on the outer edge of the maze.
    pub fn clear_boundary_wall(&mut self, coord: Coord, side: Direction) -> Result<(), MazeError> {
        self.check(coord)?;
        if !self.is_boundary(coord, side) {
            return Err(MazeError::InteriorWall { coord, side });
        }
        self.cell_at_mut(coord.0, coord.1).clear_wall(side);
        Ok(())
    }

    /// Whether `coord` and its `dir` neighbor are joined by a passage.
    pub fn is_passage(&self, coord: Coord, dir: Direction) -> bool {
        match (self.get(coord), self.neighbor_of(coord, dir)) {
            (Some(cell), Some((nx, nz))) => {
                !cell.has_wall(dir) && !self.cell_at(nx, nz).has_wall(-dir)
            }
            _ => false,
        }
    }

    /// Number of internal walls that have been cleared.
    pub fn passage_count(&self) -> usize {
        self.iter()
            .map(|(coord, _)| {
                [Direction::Right, Direction::Front]
                    .iter()
                    .filter(|dir| self.is_passage(coord, **dir))
                    .count()
            })
            .sum()
    }

    /// Cells reachable from `start` through cleared walls, breadth first.
    pub fn reachable_from(&self, start: Coord) -> Vec<Coord> {
        if !self.contains(start) {
            return Vec::new();
        }

        let mut seen = vec![false; self.cell_count()];
        let mut order = Vec::with_capacity(self.cell_count());
        let mut frontier = VecDeque::new();

        seen[self.index_of(start.0, start.1)] = true;
        frontier.push_back(start);

        while let Some(coord) = frontier.pop_front() {
            order.push(coord);
            for (next, dir) in self.get_neighborhood_of(coord) {
                let index = self.index_of(next.0, next.1);
                if !seen[index] && self.is_passage(coord, dir) {
                    seen[index] = true;
                    frontier.push_back(next);
                }
            }
        }

        order
    }

    /// Every cell reachable from `(0, 0)`. Reachability is symmetric, so
    /// the start cell makes no difference to the answer.
    pub fn is_connected(&self) -> bool {
        self.reachable_from((0, 0)).len() == self.cell_count()
    }

    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(Cell::is_visited)
    }

    /// No shared wall is open on one side and standing on the other.
    pub fn walls_consistent(&self) -> bool {
        self.iter().all(|(coord, cell)| {
            Direction::ALL.iter().copied().all(|dir| {
                match self.neighbor_of(coord, dir) {
                    Some((nx, nz)) => cell.has_wall(dir) == self.cell_at(nx, nz).has_wall(-dir),
                    None => true,
                }
            })
        })
    }

    /// Spanning tree check: everything visited and connected, walls
    /// symmetric, and exactly `cells - 1` passages.
    pub fn is_perfect(&self) -> bool {
        self.all_visited()
            && self.walls_consistent()
            && self.passage_count() == self.cell_count() - 1
            && self.is_connected()
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            WallGrid::with_dims(0, 3),
            Err(MazeError::InvalidDimensions { width: 0, depth: 3 })
        );
        assert_eq!(
            WallGrid::with_dims(3, 0),
            Err(MazeError::InvalidDimensions { width: 3, depth: 0 })
        );
        assert!(matches!(
            WallGrid::with_dims(usize::MAX, 2),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn populates_every_cell() {
        let grid = WallGrid::with_dims(4, 3).unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.iter().count(), 12);
        assert!(grid.iter().all(|(_, cell)| *cell == Cell::new()));
        assert_eq!(grid.passage_count(), 0);

        assert_eq!(grid.dims(), Dimensions { width: 4, depth: 3 });
        assert_eq!(grid.dims().cell_count(), grid.cell_count());
    }

    #[test]
    fn iter_yields_coordinates_row_major() {
        let grid = WallGrid::with_dims(2, 2).unwrap();
        let coords: Vec<_> = grid.iter().map(|(coord, _)| coord).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn checked_lookup() {
        let grid = WallGrid::with_dims(2, 3).unwrap();
        assert!(grid.get((1, 2)).is_some());
        assert!(grid.get((2, 0)).is_none());
        assert!(grid.get((0, 3)).is_none());
        assert_eq!(
            grid.check((2, 0)),
            Err(MazeError::OutOfBounds {
                coord: (2, 0),
                width: 2,
                depth: 3
            })
        );
    }

    #[test]
    #[should_panic]
    fn cell_at_out_of_range_panics() {
        let grid = WallGrid::with_dims(2, 2).unwrap();
        grid.cell_at(2, 0);
    }

    #[test]
    fn corner_and_edge_neighbors_stay_in_bounds() {
        let grid = WallGrid::with_dims(3, 3).unwrap();

        let corner: Vec<_> = grid.get_neighborhood_of((0, 0)).collect();
        assert_eq!(
            corner,
            vec![((1, 0), Direction::Right), ((0, 1), Direction::Front)]
        );

        let far_corner: Vec<_> = grid.get_neighborhood_of((2, 2)).collect();
        assert_eq!(
            far_corner,
            vec![((1, 2), Direction::Left), ((2, 1), Direction::Back)]
        );

        assert_eq!(grid.get_neighborhood_of((1, 0)).count(), 3);
        assert_eq!(grid.get_neighborhood_of((1, 1)).count(), 4);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid = WallGrid::with_dims(1, 1).unwrap();
        assert_eq!(grid.get_neighborhood_of((0, 0)).count(), 0);
        for dir in Direction::ALL.iter().copied() {
            assert!(grid.is_boundary((0, 0), dir));
        }
    }

    #[test]
    fn unvisited_neighbors_skip_visited() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.visit((2, 1));
        grid.visit((1, 2));
        assert_eq!(
            grid.unvisited_neighbors((1, 1)),
            vec![((0, 1), Direction::Left), ((1, 0), Direction::Back)]
        );
    }

    #[test]
    fn clearing_a_shared_wall_clears_both_sides() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();

        assert_eq!(grid.clear_wall_between((0, 0), (1, 0)), Ok(Direction::Right));
        assert!(!grid.cell_at(0, 0).has_wall(Direction::Right));
        assert!(!grid.cell_at(1, 0).has_wall(Direction::Left));

        assert_eq!(grid.clear_wall_between((1, 1), (1, 0)), Ok(Direction::Back));
        assert!(!grid.cell_at(1, 1).has_wall(Direction::Back));
        assert!(!grid.cell_at(1, 0).has_wall(Direction::Front));

        assert!(grid.walls_consistent());
        assert_eq!(grid.passage_count(), 2);
    }

    #[test]
    fn clearing_towards_the_edge_is_a_no_op() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        let before = grid.clone();

        assert_eq!(grid.clear_wall_towards((0, 0), Direction::Left), None);
        assert_eq!(grid.clear_wall_towards((1, 1), Direction::Front), None);
        assert_eq!(grid.clear_wall_towards((2, 0), Direction::Left), None);
        assert_eq!(grid, before);

        assert_eq!(grid.clear_wall_towards((0, 1), Direction::Back), Some((0, 0)));
        assert!(grid.is_passage((0, 0), Direction::Front));
    }

    #[test]
    fn clearing_rejects_non_adjacent_cells_untouched() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        let before = grid.clone();

        assert_eq!(
            grid.clear_wall_between((0, 0), (1, 1)),
            Err(MazeError::NotAdjacent { a: (0, 0), b: (1, 1) })
        );
        assert!(matches!(
            grid.clear_wall_between((2, 2), (3, 2)),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn boundary_walls_only() {
        let mut grid = WallGrid::with_dims(3, 2).unwrap();

        assert_eq!(grid.clear_boundary_wall((1, 0), Direction::Back), Ok(()));
        assert!(!grid.cell_at(1, 0).has_wall(Direction::Back));

        assert_eq!(
            grid.clear_boundary_wall((1, 0), Direction::Front),
            Err(MazeError::InteriorWall {
                coord: (1, 0),
                side: Direction::Front
            })
        );
        assert!(grid.cell_at(1, 0).has_wall(Direction::Front));

        // boundary openings are not passages
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.walls_consistent());
    }

    #[test]
    fn reachability_follows_passages() {
        let mut grid = WallGrid::with_dims(3, 1).unwrap();
        assert_eq!(grid.reachable_from((0, 0)), vec![(0, 0)]);
        assert!(!grid.is_connected());

        grid.clear_wall_between((0, 0), (1, 0)).unwrap();
        grid.clear_wall_between((1, 0), (2, 0)).unwrap();
        assert_eq!(grid.reachable_from((2, 0)), vec![(2, 0), (1, 0), (0, 0)]);
        assert!(grid.is_connected());
        assert!(grid.reachable_from((5, 5)).is_empty());

        // connected but nothing visited yet
        assert!(!grid.is_perfect());
        for x in 0..3 {
            grid.visit((x, 0));
        }
        assert!(grid.is_perfect());
    }

    #[test]
    fn connectivity_does_not_depend_on_start() {
        let mut grid = WallGrid::with_dims(3, 2).unwrap();
        grid.clear_wall_between((0, 0), (1, 0)).unwrap();
        grid.clear_wall_between((1, 0), (1, 1)).unwrap();
        grid.clear_wall_between((1, 1), (2, 1)).unwrap();
        grid.clear_wall_between((2, 1), (2, 0)).unwrap();
        grid.clear_wall_between((1, 1), (0, 1)).unwrap();

        assert!(grid.is_connected());
        for (coord, _) in grid.iter() {
            assert_eq!(grid.reachable_from(coord).len(), 6);
        }
    }

    #[test]
    fn cycle_is_not_perfect() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        for coord in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
            grid.visit(*coord);
        }
        grid.clear_wall_between((0, 0), (1, 0)).unwrap();
        grid.clear_wall_between((1, 0), (1, 1)).unwrap();
        grid.clear_wall_between((1, 1), (0, 1)).unwrap();
        assert!(grid.is_perfect());

        grid.clear_wall_between((0, 1), (0, 0)).unwrap();
        assert_eq!(grid.passage_count(), 4);
        assert!(grid.is_connected());
        assert!(!grid.is_perfect());
    }

    #[test]
    fn one_sided_wall_is_detected() {
        let mut grid = WallGrid::with_dims(2, 1).unwrap();
        grid.cell_at_mut(0, 0).clear_wall(Direction::Right);
        assert!(!grid.walls_consistent());
        assert!(!grid.is_passage((0, 0), Direction::Right));
    }
}
