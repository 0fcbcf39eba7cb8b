//! Perfect maze generation with a randomized depth-first "recursive
//! backtracker".
//!
//! ```
//! use maze_backtracker::{generate_seeded, MazeConfig};
//!
//! let maze = generate_seeded(&MazeConfig::new(8, 6), 42).unwrap();
//! assert!(maze.is_perfect());
//! assert_eq!(maze.passage_count(), 8 * 6 - 1);
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod observer;
pub mod renderer;

pub use config::{MazeConfig, Opening};
pub use error::MazeError;
pub use generators::{Generator, RecursiveBacktracker};
pub use grids::{Cell, Coord, Direction, WallGrid};
pub use observer::{CellObserver, EventLog, LogObserver, MazeEvent, NoopObserver};

use log::debug;
use rand::prelude::*;

/// Carves a maze for `config`, then knocks out its entrance and exit.
///
/// The whole configuration is validated before the grid is built, so an
/// error means nothing was generated.
pub fn generate<R, O>(config: &MazeConfig, rng: R, mut observer: O) -> Result<WallGrid, MazeError>
where
    R: Rng,
    O: CellObserver,
{
    config.validate()?;

    let grid = WallGrid::with_dims(config.width, config.depth)?;
    let mut backtracker =
        RecursiveBacktracker::with_observer(grid, config.origin, rng, &mut observer)?;
    backtracker.generate_maze();
    let mut grid = backtracker.into_grid();

    for opening in config.openings() {
        open_boundary(&mut grid, opening, &mut observer)?;
    }

    Ok(grid)
}

/// [`generate`] with a seeded `StdRng`, tracing every cell change to `log`.
pub fn generate_seeded(config: &MazeConfig, seed: u64) -> Result<WallGrid, MazeError> {
    debug!("seed {}", seed);
    generate(config, StdRng::seed_from_u64(seed), LogObserver)
}

/// Clears one boundary wall and tells the observer about it.
pub fn open_boundary<O: CellObserver>(
    grid: &mut WallGrid,
    opening: Opening,
    observer: &mut O,
) -> Result<(), MazeError> {
    grid.clear_boundary_wall(opening.coord, opening.side)?;
    debug!("opened {} wall of {:?}", opening.side, opening.coord);
    observer.on_wall_cleared(opening.coord, opening.side);
    Ok(())
}
