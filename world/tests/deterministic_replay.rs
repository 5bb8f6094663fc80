use pocket_arcade_core::{
    Command, DifficultyTier, Event, GoalPoint, LevelIndex, Platform, Point,
};
use pocket_arcade_world::{self as world, query, World};

#[test]
fn deterministic_replay_produces_identical_levels() {
    let first = replay(scripted_commands());
    let second = replay(scripted_commands());
    assert_eq!(first, second, "replay diverged between runs");
}

#[test]
fn replay_matches_the_golden_level_one() {
    let outcome = replay(scripted_commands());
    assert_eq!(
        outcome.platforms,
        vec![
            Platform::new(0, 56, 40),
            Platform::new(48, 43, 36),
            Platform::new(50, 36, 33),
            Platform::new(33, 23, 28),
            Platform::new(65, 17, 36),
        ]
    );
    assert_eq!(outcome.goal, GoalPoint::new(83, 3));
    assert_eq!(outcome.difficulty, DifficultyTier::Easy);
    assert_eq!(
        outcome.events,
        vec![
            Event::PlatformCountConfigured { count: 5 },
            Event::LevelLoaded {
                level: LevelIndex::new(9),
                difficulty: DifficultyTier::Hard,
                goal: GoalPoint::new(62, 4),
            },
            Event::LevelLoaded {
                level: LevelIndex::new(1),
                difficulty: DifficultyTier::Easy,
                goal: GoalPoint::new(83, 3),
            },
        ]
    );
}

fn replay(commands: Vec<Command>) -> ReplayOutcome {
    let mut world = World::new();
    let mut log = Vec::new();

    for command in commands {
        let mut events = Vec::new();
        world::apply(&mut world, command, &mut events);
        log.extend(events);
    }

    ReplayOutcome {
        platforms: query::platforms(&world).to_vec(),
        goal: query::goal(&world),
        difficulty: query::difficulty(&world),
        enemies: query::enemies(&world).to_vec(),
        pickups: query::pickups(&world).to_vec(),
        events: log,
    }
}

fn scripted_commands() -> Vec<Command> {
    vec![
        Command::ConfigurePlatformCount { count: 5 },
        Command::LoadLevel {
            level: LevelIndex::new(9),
        },
        Command::LoadLevel {
            level: LevelIndex::new(1),
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ReplayOutcome {
    platforms: Vec<Platform>,
    goal: GoalPoint,
    difficulty: DifficultyTier,
    enemies: Vec<Point>,
    pickups: Vec<Point>,
    events: Vec<Event>,
}
