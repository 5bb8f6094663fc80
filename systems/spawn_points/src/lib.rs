#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawn-point helpers for the non-platform games.
//!
//! The chase and arena games place food, monsters, and power-ups with these
//! helpers instead of carrying their own generators. Every function reseeds
//! a caller-owned [`LevelRng`] from the provided `(seed, index)` pair and a
//! per-helper salt, so repeated calls with the same inputs are pure
//! functions of those inputs and distinct helpers never collide on the same
//! seed. Like the platform chain builder, the helpers are total: retry
//! exhaustion degrades to a documented fallback, never to an error.

use pocket_arcade_core::{LevelRng, Point, Screen};

const SEED_SALT_IN_BOUNDS: u32 = 13_579;
const SEED_SALT_AWAY_FROM: u32 = 24_681;
const SEED_SALT_CORNER: u32 = 97_531;

/// Attempts granted to [`position_away_from`] before the quadrant fallback.
const AWAY_RETRY_BUDGET: u32 = 20;

fn helper_rng(seed: u32, index: u32, salt: u32) -> LevelRng {
    LevelRng::seeded(seed.wrapping_mul(salt).wrapping_add(index))
}

fn draw_in_bounds(rng: &mut LevelRng, margin: i32, screen: Screen) -> Point {
    let x = rng.next(margin, screen.width() - margin);
    let y = rng.next(screen.top_margin().max(margin), screen.height() - margin);
    Point::new(x, y)
}

/// Returns a uniformly drawn point at least `margin` pixels from every
/// screen edge, below the status bar.
#[must_use]
pub fn position_in_bounds(seed: u32, index: u32, margin: i32, screen: Screen) -> Point {
    let mut rng = helper_rng(seed, index, SEED_SALT_IN_BOUNDS);
    draw_in_bounds(&mut rng, margin, screen)
}

/// Returns a point whose Manhattan distance from `avoid` is at least
/// `min_distance`.
///
/// Bounded retry: after twenty draws without success the helper falls back
/// to a point in the screen quadrant diagonally opposite `avoid`. The
/// fallback is the contract, not an error, and is what keeps a monster from
/// ever materializing on top of the player.
#[must_use]
pub fn position_away_from(
    seed: u32,
    index: u32,
    avoid: Point,
    min_distance: i32,
    margin: i32,
    screen: Screen,
) -> Point {
    let mut rng = helper_rng(seed, index, SEED_SALT_AWAY_FROM);
    for _ in 0..AWAY_RETRY_BUDGET {
        let candidate = draw_in_bounds(&mut rng, margin, screen);
        if candidate.manhattan_distance(avoid) >= min_distance {
            return candidate;
        }
    }
    opposite_quadrant(&mut rng, avoid, margin, screen)
}

/// Draws a point in the screen quadrant diagonally opposite `avoid`.
fn opposite_quadrant(rng: &mut LevelRng, avoid: Point, margin: i32, screen: Screen) -> Point {
    let x = if avoid.x() < screen.width() / 2 {
        rng.next(screen.width() / 2, screen.width() - margin)
    } else {
        rng.next(margin, screen.width() / 2)
    };
    let y = if avoid.y() < screen.height() / 2 {
        rng.next(screen.height() / 2, screen.height() - margin)
    } else {
        rng.next(screen.top_margin().max(margin), screen.height() / 2)
    };
    Point::new(x, y)
}

/// Returns a point inside one of the four corner regions, picked
/// pseudo-randomly.
///
/// Corner regions are the outer quarters of the screen inset by `margin`,
/// with the top rows below the status bar.
#[must_use]
pub fn position_in_corner(seed: u32, index: u32, margin: i32, screen: Screen) -> Point {
    let mut rng = helper_rng(seed, index, SEED_SALT_CORNER);
    let corner = rng.next(0, 3);

    let x = if corner % 2 == 0 {
        rng.next(margin, screen.width() / 4)
    } else {
        rng.next(screen.width() * 3 / 4, screen.width() - margin)
    };
    let y = if corner < 2 {
        rng.next(screen.top_margin().max(margin), screen.height() / 4)
    } else {
        rng.next(screen.height() * 3 / 4, screen.height() - margin)
    };
    Point::new(x, y)
}
