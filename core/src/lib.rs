#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Pocket Arcade engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems, together with the geometry types
//! and the deterministic random stream that every content generator draws
//! from. Adapters submit [`Command`] values describing desired mutations,
//! the world executes those commands via its `apply` entry point, and then
//! broadcasts [`Event`] values for collaborators to react to
//! deterministically.

use serde::{Deserialize, Serialize};

const RNG_MULTIPLIER: u32 = 1_103_515_245;
const RNG_INCREMENT: u32 = 12_345;

/// Seed salt applied to the level index when generating platform chains.
pub const SEED_SALT_PLATFORMS: u32 = 12_345;
/// Seed salt applied to the level index when placing enemies.
pub const SEED_SALT_ENEMIES: u32 = 54_321;
/// Seed salt applied to the level index when placing pickups.
pub const SEED_SALT_PICKUPS: u32 = 98_765;

/// Capacity of the caller-owned platform buffer held by the world.
pub const MAX_PLATFORMS: usize = 8;
/// Number of platforms a level uses unless reconfigured.
pub const DEFAULT_PLATFORM_COUNT: usize = 5;

/// Index of a level in the endless progression, starting at one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LevelIndex(u32);

impl LevelIndex {
    /// Creates a new level index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Discrete difficulty parameter set selected from the level index.
///
/// The tier controls platform width ranges and how close to the physical
/// jump limit the chain builder is allowed to place platforms.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DifficultyTier {
    /// Generous widths and jumps well inside the physical limit.
    Easy,
    /// Narrower platforms and jumps closer to the limit.
    Medium,
    /// Narrowest platforms and jumps approaching the physical limit.
    Hard,
}

impl DifficultyTier {
    /// Fraction of the theoretical maximum jump reach granted to this tier,
    /// expressed as a percentage.
    #[must_use]
    pub const fn jump_tolerance_percent(&self) -> i32 {
        match self {
            Self::Easy => 80,
            Self::Medium => 90,
            Self::Hard => 100,
        }
    }

    /// Narrowest platform width the chain builder may draw for this tier.
    #[must_use]
    pub const fn platform_width_min(&self) -> i32 {
        match self {
            Self::Easy => 27,
            Self::Medium => 19,
            Self::Hard => 15,
        }
    }

    /// Widest platform width the chain builder may draw for this tier.
    #[must_use]
    pub const fn platform_width_max(&self) -> i32 {
        match self {
            Self::Easy => 37,
            Self::Medium => 29,
            Self::Hard => 21,
        }
    }
}

/// Display geometry threaded through every generator entry point.
///
/// Coordinates are pixels with the origin at the top-left corner; `y`
/// grows downward. The top margin reserves room for the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    width: i32,
    height: i32,
    side_margin: i32,
    top_margin: i32,
    bottom_margin: i32,
}

impl Screen {
    /// Geometry of the console's 128x64 display with its status bar.
    pub const DEFAULT: Self = Self {
        width: 128,
        height: 64,
        side_margin: 5,
        top_margin: 10,
        bottom_margin: 14,
    };

    /// Creates a new screen description with explicit margins.
    #[must_use]
    pub const fn new(
        width: i32,
        height: i32,
        side_margin: i32,
        top_margin: i32,
        bottom_margin: i32,
    ) -> Self {
        Self {
            width,
            height,
            side_margin,
            top_margin,
            bottom_margin,
        }
    }

    /// Display width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Display height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Horizontal margin kept free along the left and right edges.
    #[must_use]
    pub const fn side_margin(&self) -> i32 {
        self.side_margin
    }

    /// Rows at the top of the display reserved for the status bar.
    #[must_use]
    pub const fn top_margin(&self) -> i32 {
        self.top_margin
    }

    /// Highest y coordinate a generated platform may occupy.
    #[must_use]
    pub const fn platform_min_y(&self) -> i32 {
        self.top_margin
    }

    /// Lowest y coordinate a generated platform may occupy.
    #[must_use]
    pub const fn platform_max_y(&self) -> i32 {
        self.height - self.bottom_margin
    }

    /// Clamps a platform's left edge so the whole width stays on screen.
    #[must_use]
    pub const fn clamp_platform_x(&self, x: i32, width: i32) -> i32 {
        let max_x = self.width - width - self.side_margin;
        if x < self.side_margin {
            self.side_margin
        } else if x > max_x {
            max_x
        } else {
            x
        }
    }
}

/// Horizontal slab of ground a character can stand on.
///
/// `x` is the left edge, `y` the surface row, both in pixels. Platforms are
/// immutable once placed within a generation pass and are overwritten
/// wholesale on the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    x: i32,
    y: i32,
    width: i32,
}

impl Platform {
    /// Creates a new platform description.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32) -> Self {
        Self { x, y, width }
    }

    /// Left edge of the platform.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Surface row of the platform.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Width of the platform in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Horizontal center of the platform.
    #[must_use]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Half of the platform's width, used for edge-gap corrections.
    #[must_use]
    pub const fn half_width(&self) -> i32 {
        self.width / 2
    }

    /// Right edge of the platform.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Pixel position on the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point from pixel coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the point.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate of the point.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Computes the Manhattan distance between two points.
    #[must_use]
    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Exit position derived from the final platform of a generated chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalPoint {
    x: i32,
    y: i32,
}

impl GoalPoint {
    /// Creates a new goal position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the goal.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate of the goal.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

/// Deterministic bounded-range integer stream seeded per generation call.
///
/// A 32-bit linear-congruential recurrence: O(1), allocation free, and
/// cheap enough for an 8-bit handheld target. Statistical
/// quality is irrelevant at the dozen-draw sequences the generators use;
/// what matters is that reseeding from the same value reproduces the same
/// sequence, which is the sole basis for level determinism. The stream is
/// a caller-owned value, never process-wide state, so concurrent
/// generation calls stay pure functions of their inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRng {
    state: u32,
}

impl LevelRng {
    /// Creates a stream whose state is derived from the provided seed.
    #[must_use]
    pub const fn seeded(seed: u32) -> Self {
        Self {
            state: seed
                .wrapping_mul(RNG_MULTIPLIER)
                .wrapping_add(RNG_INCREMENT),
        }
    }

    /// Advances the stream and folds the result into `[min, max]` inclusive.
    ///
    /// `min > max` is a caller-contract violation; the range must be
    /// validated before drawing.
    #[must_use]
    pub fn next(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "inverted draw range: [{min}, {max}]");
        self.state = self
            .state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        // Bits 16..30 of the updated state; the low bits of an LCG cycle
        // with short periods and are never exposed.
        let slice = ((self.state >> 16) & 0x7fff) as i32;
        min + slice % (max - min + 1)
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the world generate and install the given level.
    LoadLevel {
        /// Index of the level to synthesize.
        level: LevelIndex,
    },
    /// Adjusts how many platforms subsequent levels are built from.
    ConfigurePlatformCount {
        /// Requested chain length, bounded by the world's buffer capacity.
        count: usize,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a level was generated and installed.
    LevelLoaded {
        /// Index of the level that was installed.
        level: LevelIndex,
        /// Difficulty tier the level was generated with.
        difficulty: DifficultyTier,
        /// Exit position placed above the final platform.
        goal: GoalPoint,
    },
    /// Confirms that the platform chain length was reconfigured.
    PlatformCountConfigured {
        /// Chain length that will apply to subsequent loads.
        count: usize,
    },
    /// Reports that a chain-length reconfiguration was rejected.
    PlatformCountRejected {
        /// Chain length provided in the rejected request.
        count: usize,
        /// Specific reason the reconfiguration failed.
        reason: LevelConfigError,
    },
}

/// Reasons a platform-count reconfiguration can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelConfigError {
    /// A chain needs at least the spawn platform and one destination.
    TooFewPlatforms,
    /// The request exceeds the world's fixed buffer capacity.
    CapacityExceeded,
}
