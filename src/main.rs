use anyhow::Context;
use clap::Parser;
use log::info;
use rand::prelude::*;

use maze_backtracker::renderer::{describe, render_text};
use maze_backtracker::{generate_seeded, MazeConfig};

/// Carve a perfect maze and print it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cells along x
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Cells along z
    #[arg(long, default_value_t = 15)]
    depth: usize,

    /// Random seed, picked at random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// x of the cell the traversal starts from
    #[arg(long, default_value_t = 0)]
    origin_x: usize,

    /// z of the cell the traversal starts from
    #[arg(long, default_value_t = 0)]
    origin_z: usize,

    /// Leave the entrance wall standing
    #[arg(long)]
    no_entrance: bool,

    /// Leave the exit wall standing
    #[arg(long)]
    no_exit: bool,
}

impl Args {
    fn config(&self) -> MazeConfig {
        let mut config =
            MazeConfig::new(self.width, self.depth).with_origin((self.origin_x, self.origin_z));
        if self.no_entrance {
            config = config.without_entrance();
        }
        if self.no_exit {
            config = config.without_exit();
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    let config = args.config();
    info!("generating {}x{} maze with seed {}", config.width, config.depth, seed);

    let maze = generate_seeded(&config, seed)
        .with_context(|| format!("failed to generate a {}x{} maze", config.width, config.depth))?;

    info!("{}", describe(&maze));
    print!("{}", render_text(&maze));
    Ok(())
}
