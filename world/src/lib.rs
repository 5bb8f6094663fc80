#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative level state for the Pocket Arcade platformer.
//!
//! The world owns the fixed-capacity buffers a level is generated into and
//! executes adapter-submitted [`Command`] values deterministically. Loading
//! a level drives the full generation pipeline: difficulty selection, the
//! platform chain builder, goal placement, and enemy and pickup placement.
//! Generation happens once per level transition, runs to completion, and
//! allocates nothing; the buffers are overwritten wholesale on the next
//! load.

use pocket_arcade_core::{
    Command, DifficultyTier, Event, GoalPoint, LevelConfigError, LevelIndex, Platform, Point,
    Screen, DEFAULT_PLATFORM_COUNT, MAX_PLATFORMS,
};
use pocket_arcade_system_level_generation as level_generation;

/// Enemies placed onto each generated level.
const ENEMY_SLOTS: usize = 3;
/// Pickups floated above each generated level.
const PICKUP_SLOTS: usize = 4;

/// Authoritative state for the currently loaded level.
#[derive(Debug)]
pub struct World {
    screen: Screen,
    level: LevelIndex,
    difficulty: DifficultyTier,
    platform_count: usize,
    platforms: [Platform; MAX_PLATFORMS],
    goal: GoalPoint,
    enemies: [Point; ENEMY_SLOTS],
    pickups: [Point; PICKUP_SLOTS],
    loaded: bool,
}

impl World {
    /// Creates a world with empty buffers and the default chain length.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_screen(Screen::DEFAULT)
    }

    /// Creates a world targeting the provided display geometry.
    #[must_use]
    pub const fn with_screen(screen: Screen) -> Self {
        Self {
            screen,
            level: LevelIndex::new(0),
            difficulty: DifficultyTier::Easy,
            platform_count: DEFAULT_PLATFORM_COUNT,
            platforms: [Platform::new(0, 0, 0); MAX_PLATFORMS],
            goal: GoalPoint::new(0, 0),
            enemies: [Point::new(0, 0); ENEMY_SLOTS],
            pickups: [Point::new(0, 0); PICKUP_SLOTS],
            loaded: false,
        }
    }

    fn load_level(&mut self, level: LevelIndex) -> Event {
        let difficulty = level_generation::tier_for(level);
        let platforms = &mut self.platforms[..self.platform_count];
        let _ = level_generation::generate(level, difficulty, self.screen, platforms);
        let last = platforms[self.platform_count - 1];

        self.goal = level_generation::place_goal(last);
        level_generation::place_enemies(level, platforms, &mut self.enemies);
        level_generation::place_pickups(level, platforms, &mut self.pickups);

        self.level = level;
        self.difficulty = difficulty;
        self.loaded = true;

        Event::LevelLoaded {
            level,
            difficulty,
            goal: self.goal,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadLevel { level } => {
            let event = world.load_level(level);
            out_events.push(event);
        }
        Command::ConfigurePlatformCount { count } => {
            let event = if count < 2 {
                Event::PlatformCountRejected {
                    count,
                    reason: LevelConfigError::TooFewPlatforms,
                }
            } else if count > MAX_PLATFORMS {
                Event::PlatformCountRejected {
                    count,
                    reason: LevelConfigError::CapacityExceeded,
                }
            } else {
                world.platform_count = count;
                Event::PlatformCountConfigured { count }
            };
            out_events.push(event);
        }
    }
}

/// Read-only queries over the world, mirroring the command surface.
pub mod query {
    use super::World;
    use pocket_arcade_core::{DifficultyTier, GoalPoint, LevelIndex, Platform, Point, Screen};

    /// Index of the most recently loaded level.
    #[must_use]
    pub fn level(world: &World) -> LevelIndex {
        world.level
    }

    /// Difficulty tier the current level was generated with.
    #[must_use]
    pub fn difficulty(world: &World) -> DifficultyTier {
        world.difficulty
    }

    /// Display geometry the world generates against.
    #[must_use]
    pub fn screen(world: &World) -> Screen {
        world.screen
    }

    /// Platforms of the current level, empty before the first load.
    #[must_use]
    pub fn platforms(world: &World) -> &[Platform] {
        if world.loaded {
            &world.platforms[..world.platform_count]
        } else {
            &[]
        }
    }

    /// Exit position of the current level.
    #[must_use]
    pub fn goal(world: &World) -> GoalPoint {
        world.goal
    }

    /// Enemy positions of the current level, empty before the first load.
    #[must_use]
    pub fn enemies(world: &World) -> &[Point] {
        if world.loaded {
            &world.enemies
        } else {
            &[]
        }
    }

    /// Pickup positions of the current level, empty before the first load.
    #[must_use]
    pub fn pickups(world: &World) -> &[Point] {
        if world.loaded {
            &world.pickups
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_starts_unloaded() {
        let world = World::new();
        assert!(query::platforms(&world).is_empty());
        assert!(query::enemies(&world).is_empty());
        assert!(query::pickups(&world).is_empty());
    }

    #[test]
    fn load_level_emits_confirmation() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::LoadLevel {
                level: LevelIndex::new(4),
            },
            &mut events,
        );
        match events.as_slice() {
            [Event::LevelLoaded {
                level, difficulty, ..
            }] => {
                assert_eq!(*level, LevelIndex::new(4));
                assert_eq!(*difficulty, DifficultyTier::Medium);
            }
            other => panic!("unexpected events: {other:?}"),
        }
        assert_eq!(query::platforms(&world).len(), DEFAULT_PLATFORM_COUNT);
    }

    #[test]
    fn platform_count_bounds_are_enforced() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigurePlatformCount { count: 1 },
            &mut events,
        );
        apply(
            &mut world,
            Command::ConfigurePlatformCount {
                count: MAX_PLATFORMS + 1,
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::ConfigurePlatformCount { count: 6 },
            &mut events,
        );
        assert_eq!(
            events,
            vec![
                Event::PlatformCountRejected {
                    count: 1,
                    reason: LevelConfigError::TooFewPlatforms,
                },
                Event::PlatformCountRejected {
                    count: MAX_PLATFORMS + 1,
                    reason: LevelConfigError::CapacityExceeded,
                },
                Event::PlatformCountConfigured { count: 6 },
            ]
        );

        let mut load_events = Vec::new();
        apply(
            &mut world,
            Command::LoadLevel {
                level: LevelIndex::new(2),
            },
            &mut load_events,
        );
        assert_eq!(query::platforms(&world).len(), 6);
    }

    #[test]
    fn reloading_a_level_reproduces_it() {
        let mut first = World::new();
        let mut second = World::new();
        let mut events = Vec::new();
        apply(
            &mut first,
            Command::LoadLevel {
                level: LevelIndex::new(9),
            },
            &mut events,
        );
        apply(
            &mut second,
            Command::LoadLevel {
                level: LevelIndex::new(9),
            },
            &mut events,
        );
        assert_eq!(query::platforms(&first), query::platforms(&second));
        assert_eq!(query::goal(&first), query::goal(&second));
        assert_eq!(query::enemies(&first), query::enemies(&second));
        assert_eq!(query::pickups(&first), query::pickups(&second));
    }
}
