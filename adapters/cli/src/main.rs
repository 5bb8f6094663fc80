#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates a level and renders it as ASCII.
//!
//! Useful for eyeballing the generator's output and for capturing golden
//! fixtures: the rendering is deterministic, so two invocations with the
//! same arguments print identical maps.

use anyhow::{bail, Result};
use clap::Parser;
use pocket_arcade_core::{Command, Event, LevelIndex, MAX_PLATFORMS};
use pocket_arcade_world::{self as world, query, World};

mod render;

/// Arguments accepted by the level inspector.
#[derive(Debug, Parser)]
#[command(name = "pocket-arcade", about = "Inspect procedurally generated levels")]
struct Args {
    /// Level index to generate.
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Number of platforms in the chain.
    #[arg(long, default_value_t = 5)]
    count: usize,
}

/// Entry point for the Pocket Arcade level inspector.
fn main() -> Result<()> {
    let args = Args::parse();
    if !(2..=MAX_PLATFORMS).contains(&args.count) {
        bail!("--count must be between 2 and {MAX_PLATFORMS}");
    }

    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ConfigurePlatformCount { count: args.count },
        &mut events,
    );
    world::apply(
        &mut world,
        Command::LoadLevel {
            level: LevelIndex::new(args.level),
        },
        &mut events,
    );

    for event in &events {
        if let Event::LevelLoaded {
            level,
            difficulty,
            goal,
        } = event
        {
            println!(
                "level {} ({difficulty:?}): goal at ({}, {})",
                level.get(),
                goal.x(),
                goal.y()
            );
        }
    }

    let map = render::level_map(
        query::screen(&world),
        query::platforms(&world),
        query::goal(&world),
        query::enemies(&world),
        query::pickups(&world),
    );
    print!("{map}");

    for platform in query::platforms(&world) {
        println!(
            "platform x={:>3} y={:>2} width={:>2}",
            platform.x(),
            platform.y(),
            platform.width()
        );
    }

    Ok(())
}
