//! ASCII rendering of a generated level.

use pocket_arcade_core::{GoalPoint, Platform, Point, Screen};

/// Horizontal pixels folded into one character cell.
const CELL_WIDTH: i32 = 2;
/// Vertical pixels folded into one character cell.
const CELL_HEIGHT: i32 = 4;

/// Renders the level onto a downscaled character grid.
///
/// Platforms print as `=`, the spawn platform as `S`, the goal as `G`,
/// enemies as `e`, and pickups as `*`. Later marks overwrite earlier ones
/// so the goal and entities stay visible on top of platforms.
pub(crate) fn level_map(
    screen: Screen,
    platforms: &[Platform],
    goal: GoalPoint,
    enemies: &[Point],
    pickups: &[Point],
) -> String {
    let columns = (screen.width() / CELL_WIDTH) as usize;
    let rows = (screen.height() / CELL_HEIGHT) as usize;
    let mut grid = vec![vec![' '; columns]; rows];

    let mut mark = |x: i32, y: i32, glyph: char| {
        let column = (x / CELL_WIDTH).clamp(0, columns as i32 - 1) as usize;
        let row = (y / CELL_HEIGHT).clamp(0, rows as i32 - 1) as usize;
        grid[row][column] = glyph;
    };

    for (index, platform) in platforms.iter().enumerate() {
        let glyph = if index == 0 { 'S' } else { '=' };
        let mut x = platform.x();
        while x < platform.right() {
            mark(x, platform.y(), glyph);
            x += CELL_WIDTH;
        }
    }
    for pickup in pickups {
        mark(pickup.x(), pickup.y(), '*');
    }
    for enemy in enemies {
        mark(enemy.x(), enemy.y(), 'e');
    }
    mark(goal.x(), goal.y(), 'G');

    let mut map = String::with_capacity(rows * (columns + 1));
    for row in &grid {
        map.extend(row.iter());
        map.push('\n');
    }
    map
}
