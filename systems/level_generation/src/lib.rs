#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic, reachability-constrained platform chain generation.
//!
//! Given a level index this system synthesizes a sequence of platforms that
//! is bit-reproducible from the index alone, guaranteed completable under
//! the game's fixed jump physics, and bounded in both screen space and a
//! small retry budget. The caller owns the output buffer; nothing here
//! allocates. There is no failure path: when the randomized search for a
//! slot exhausts its retry budget, a forced fallback placement is accepted
//! unconditionally, and that placement is itself always reachable.

use pocket_arcade_core::{
    DifficultyTier, GoalPoint, LevelIndex, LevelRng, Platform, Point, Screen,
    SEED_SALT_ENEMIES, SEED_SALT_PICKUPS, SEED_SALT_PLATFORMS,
};

/// Spawn platform anchoring every generated chain, difficulty independent.
pub const SPAWN_PLATFORM: Platform = Platform::new(0, 56, 40);

/// Base horizontal reach of a flat jump, in pixels.
const MAX_JUMP_REACH: i32 = 35;
/// Extra reach granted when dropping to a lower or level platform.
const DROP_BONUS: i32 = 5;
/// Largest rise still counted as a small climb.
const SMALL_CLIMB: i32 = 8;
/// Largest rise still counted as a medium climb.
const MEDIUM_CLIMB: i32 = 14;
/// Reach lost on a medium climb.
const MEDIUM_CLIMB_PENALTY: i32 = 8;
/// Reach lost on a large climb.
const LARGE_CLIMB_PENALTY: i32 = 15;

/// Shortest horizontal step the walk will draw.
const MIN_STEP: i32 = 15;
/// Smallest rise the walk will draw.
const MIN_RISE: i32 = 6;
/// Largest rise the walk will draw.
const MAX_RISE: i32 = 20;
/// Direction draws below this value (out of 100) step left. Tunable feel
/// parameter, weighted toward continuing rightward across the screen.
const LEFT_STEP_WEIGHT: i32 = 40;

/// Failed validations tolerated per slot before the forced fallback.
const RETRY_BUDGET: u32 = 10;
/// Horizontal spread of a forced fallback around the previous center.
const FALLBACK_SPREAD: i32 = 20;
/// Rise range of a forced fallback, well inside the easiest jump bound.
const FALLBACK_MIN_RISE: i32 = 5;
/// Upper rise bound of a forced fallback.
const FALLBACK_MAX_RISE: i32 = 10;

/// Vertical offset of the goal above the final platform's surface.
const GOAL_RISE: i32 = 14;

/// Horizontal inset keeping placed entities away from platform edges.
const ENTITY_EDGE_INSET: i32 = 5;
/// Height of an enemy's anchor above its platform surface.
const ENEMY_RISE: i32 = 8;
/// Lowest float height of a pickup above its platform.
const PICKUP_MIN_RISE: i32 = 15;
/// Highest float height of a pickup above its platform.
const PICKUP_MAX_RISE: i32 = 25;

/// Maps a level index to its difficulty tier.
///
/// Step function over fixed thresholds, monotone non-decreasing, and
/// saturating: every index beyond the hand-authored set resolves to the
/// hardest tier.
#[must_use]
pub const fn tier_for(level: LevelIndex) -> DifficultyTier {
    match level.get() {
        0..=3 => DifficultyTier::Easy,
        4..=7 => DifficultyTier::Medium,
        _ => DifficultyTier::Hard,
    }
}

/// Decides whether a jump across `gap` pixels with a vertical `rise` is
/// physically makeable at the given tier.
///
/// `gap` is the horizontal distance between the facing edges of the two
/// platforms; callers subtract half-widths before calling, so it is never
/// negative. `rise` is positive when jumping upward. Climbing higher costs
/// horizontal reach, modeling the fixed gravity and jump-impulse curve;
/// easier tiers are granted only a fraction of the theoretical maximum so
/// their levels sit well inside the physical limit.
#[must_use]
pub const fn jump_reachable(gap: i32, rise: i32, tier: DifficultyTier) -> bool {
    let reach = if rise <= 0 {
        MAX_JUMP_REACH + DROP_BONUS
    } else if rise <= SMALL_CLIMB {
        MAX_JUMP_REACH
    } else if rise <= MEDIUM_CLIMB {
        MAX_JUMP_REACH - MEDIUM_CLIMB_PENALTY
    } else {
        MAX_JUMP_REACH - LARGE_CLIMB_PENALTY
    };
    gap <= reach * tier.jump_tolerance_percent() / 100
}

/// Derives the level's exit position from the final generated platform:
/// horizontally centered on it and a fixed distance above its surface.
#[must_use]
pub const fn place_goal(last: Platform) -> GoalPoint {
    GoalPoint::new(last.center_x(), last.y() - GOAL_RISE)
}

/// Walk cursor tracking where the chain can be continued from.
///
/// `x` is the previous platform's horizontal center; candidates derive
/// their left edge from it, so wide platforms shorten the effective step.
#[derive(Clone, Copy, Debug)]
struct WalkCursor {
    x: i32,
    y: i32,
    width: i32,
}

impl WalkCursor {
    const fn behind(platform: Platform) -> Self {
        Self {
            x: platform.center_x(),
            y: platform.y(),
            width: platform.width(),
        }
    }
}

/// Retry-with-fallback control flow for a single chain slot.
#[derive(Clone, Copy, Debug)]
enum SlotState {
    Sampling { attempts: u32 },
    Validating { candidate: Platform, attempts: u32 },
    Accepted { platform: Platform },
    FallbackAccepted { platform: Platform },
}

/// Fills the caller-owned buffer with a platform chain for `level` and
/// returns the y coordinate of the final platform.
///
/// The stream is reseeded from the level index and the platform salt, so
/// two calls with the same inputs produce bit-identical chains and never
/// collide with enemy or pickup placement for the same level. `out[0]` is
/// always [`SPAWN_PLATFORM`]. Every consecutive pair of platforms passes
/// [`jump_reachable`] at the active tier, except where a slot's retry
/// budget was exhausted and the forced fallback applied; the fallback's
/// offsets are chosen so it is reachable even at the easiest tier. The
/// function is total: it cannot fail, only degrade to fallback placements.
pub fn generate(
    level: LevelIndex,
    tier: DifficultyTier,
    screen: Screen,
    out: &mut [Platform],
) -> i32 {
    debug_assert!(!out.is_empty(), "platform buffer must hold the spawn slot");
    let Some((spawn_slot, rest)) = out.split_first_mut() else {
        return SPAWN_PLATFORM.y();
    };

    let mut rng = LevelRng::seeded(level.get().wrapping_mul(SEED_SALT_PLATFORMS));
    *spawn_slot = SPAWN_PLATFORM;
    let mut cursor = WalkCursor::behind(SPAWN_PLATFORM);

    for slot in rest.iter_mut() {
        let platform = place_slot(&mut rng, tier, screen, cursor);
        cursor = WalkCursor::behind(platform);
        *slot = platform;
    }

    cursor.y
}

fn place_slot(
    rng: &mut LevelRng,
    tier: DifficultyTier,
    screen: Screen,
    cursor: WalkCursor,
) -> Platform {
    let mut state = SlotState::Sampling { attempts: 0 };
    loop {
        state = match state {
            SlotState::Sampling { attempts } => {
                let candidate = sample_candidate(rng, tier, screen, cursor);
                if attempts >= RETRY_BUDGET {
                    SlotState::FallbackAccepted {
                        platform: forced_fallback(rng, screen, cursor, candidate.width()),
                    }
                } else {
                    SlotState::Validating {
                        candidate,
                        attempts,
                    }
                }
            }
            SlotState::Validating {
                candidate,
                attempts,
            } => {
                let (gap, rise) = edge_gap_and_rise(cursor, candidate);
                if jump_reachable(gap, rise, tier) {
                    SlotState::Accepted {
                        platform: candidate,
                    }
                } else {
                    SlotState::Sampling {
                        attempts: attempts + 1,
                    }
                }
            }
            SlotState::Accepted { platform } | SlotState::FallbackAccepted { platform } => {
                return platform;
            }
        };
    }
}

/// Draws one candidate platform: a horizontal step with weighted left/right
/// bias, an upward rise, and a tier-bounded width, clamped onto the screen.
fn sample_candidate(
    rng: &mut LevelRng,
    tier: DifficultyTier,
    screen: Screen,
    cursor: WalkCursor,
) -> Platform {
    let step = rng.next(MIN_STEP, MAX_JUMP_REACH);
    let rise = rng.next(MIN_RISE, MAX_RISE);
    let direction = rng.next(0, 100);
    let width = rng.next(tier.platform_width_min(), tier.platform_width_max());

    let x = if direction < LEFT_STEP_WEIGHT {
        cursor.x - step
    } else {
        cursor.x + step
    };
    let x = screen.clamp_platform_x(x, width);
    let y = (cursor.y - rise).clamp(screen.platform_min_y(), screen.platform_max_y());

    Platform::new(x, y, width)
}

/// Recomputes the actual edge-to-edge gap and rise after clamping.
///
/// Clamping can shrink the originally drawn step, so the jump is always
/// judged on the candidate's final position. The gap is corrected by both
/// half-widths because the jumper leaves from one edge and lands on the
/// other; center-to-center distance would systematically overestimate the
/// jump for wide platforms.
fn edge_gap_and_rise(cursor: WalkCursor, candidate: Platform) -> (i32, i32) {
    let center_distance = (cursor.x - candidate.center_x()).abs();
    let gap = (center_distance - cursor.width / 2 - candidate.half_width()).max(0);
    let rise = cursor.y - candidate.y();
    (gap, rise)
}

/// Places the guaranteed-safe platform once a slot's retry budget is
/// exhausted: a small horizontal offset from the previous center and a
/// small rise, both well inside the easiest tier's jump bound. Accepted
/// unconditionally, never re-validated. This is the single deliberate
/// escape hatch from the reachability invariant and the reason the
/// generator is total.
fn forced_fallback(
    rng: &mut LevelRng,
    screen: Screen,
    cursor: WalkCursor,
    width: i32,
) -> Platform {
    let x = screen.clamp_platform_x(
        cursor.x + rng.next(-FALLBACK_SPREAD, FALLBACK_SPREAD),
        width,
    );
    let y = cursor.y - rng.next(FALLBACK_MIN_RISE, FALLBACK_MAX_RISE);
    let y = y.max(screen.platform_min_y());
    Platform::new(x, y, width)
}

/// Places one enemy per output slot onto the generated platforms.
///
/// Reseeded from the enemy salt so the placement never collides with the
/// platform stream even for the same level index. Enemies avoid the spawn
/// platform and keep an inset from platform edges.
pub fn place_enemies(level: LevelIndex, platforms: &[Platform], out: &mut [Point]) {
    debug_assert!(
        platforms.len() >= 2,
        "enemy placement needs a platform beyond the spawn"
    );
    let mut rng = LevelRng::seeded(level.get().wrapping_mul(SEED_SALT_ENEMIES));
    for slot in out.iter_mut() {
        let index = rng.next(1, platforms.len() as i32 - 1) as usize;
        let platform = platforms[index];
        let x = platform.x() + rng.next(ENTITY_EDGE_INSET, platform.width() - ENTITY_EDGE_INSET);
        *slot = Point::new(x, platform.y() - ENEMY_RISE);
    }
}

/// Places one pickup per output slot, floating above the platforms.
///
/// Any platform qualifies, including the spawn. Reseeded from the pickup
/// salt.
pub fn place_pickups(level: LevelIndex, platforms: &[Platform], out: &mut [Point]) {
    debug_assert!(!platforms.is_empty(), "pickup placement needs platforms");
    let mut rng = LevelRng::seeded(level.get().wrapping_mul(SEED_SALT_PICKUPS));
    for slot in out.iter_mut() {
        let index = rng.next(0, platforms.len() as i32 - 1) as usize;
        let platform = platforms[index];
        let x = platform.x() + rng.next(ENTITY_EDGE_INSET, platform.width() - ENTITY_EDGE_INSET);
        let float = rng.next(PICKUP_MIN_RISE, PICKUP_MAX_RISE);
        *slot = Point::new(x, platform.y() - float);
    }
}
