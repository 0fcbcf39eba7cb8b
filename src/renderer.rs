use crate::grids::{Direction, WallGrid};

const CORNER: char = '+';
const WALL_H: &str = "---";
const WALL_V: char = '|';
const GAP_H: &str = "   ";
const UNVISITED: &str = "###";

/// Draws the grid as text, far `z` edge on top.
///
/// A cell is three characters wide. Each row prints the front walls of its
/// cells, then the cell line with left walls; the last line carries the back
/// walls of `z = 0`. Cells that were never visited are filled in.
pub fn render_text(grid: &WallGrid) -> String {
    let width = grid.width();
    let mut out = String::with_capacity((width * 4 + 2) * (grid.depth() * 2 + 1));

    for z in (0..grid.depth()).rev() {
        render_horizontal(grid, z, Direction::Front, &mut out);

        for x in 0..width {
            let cell = grid.cell_at(x, z);
            out.push(if cell.has_wall(Direction::Left) { WALL_V } else { ' ' });
            out.push_str(if cell.is_visited() { GAP_H } else { UNVISITED });
        }
        let last = grid.cell_at(width - 1, z);
        out.push(if last.has_wall(Direction::Right) { WALL_V } else { ' ' });
        out.push('\n');
    }
    render_horizontal(grid, 0, Direction::Back, &mut out);

    out
}

fn render_horizontal(grid: &WallGrid, z: usize, side: Direction, out: &mut String) {
    for x in 0..grid.width() {
        out.push(CORNER);
        out.push_str(if grid.cell_at(x, z).has_wall(side) { WALL_H } else { GAP_H });
    }
    out.push(CORNER);
    out.push('\n');
}

/// One line summary of the grid, for logs.
pub fn describe(grid: &WallGrid) -> String {
    format!(
        "{}x{} maze, {} passages, {}",
        grid.width(),
        grid.depth(),
        grid.passage_count(),
        if grid.is_perfect() { "perfect" } else { "not perfect" }
    )
}
