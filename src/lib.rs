//! Dodge Hurdles — a terminal dodging game.
//!
//! Core modules:
//! - `entities`: pure data (player, stars, power-ups, session state)
//! - `difficulty`: level and spawn-rate tuning derived from elapsed time
//! - `compute`: the deterministic per-frame simulation
//! - `highscore` / `settings`: JSON persistence under `$HOME`

pub mod compute;
pub mod difficulty;
pub mod entities;
pub mod error;
pub mod highscore;
pub mod settings;

pub use error::StoreError;
pub use highscore::HighScores;
pub use settings::Settings;

/// Game tuning constants, in logical playfield units.
pub mod consts {
    /// Playfield dimensions.
    pub const WIDTH: i32 = 700;
    pub const HEIGHT: i32 = 500;

    pub const PLAYER_WIDTH: i32 = 40;
    pub const PLAYER_HEIGHT: i32 = 80;
    pub const PLAYER_START_X: i32 = 200;
    /// Horizontal step per frame while a direction is held.
    pub const PLAYER_VEL: i32 = 5;

    pub const STAR_WIDTH: i32 = 25;
    pub const STAR_HEIGHT: i32 = 50;
    /// Star velocity at level 1; each level adds one.
    pub const STAR_BASE_VEL: i32 = 3;

    pub const POWER_UP_WIDTH: i32 = 30;
    pub const POWER_UP_HEIGHT: i32 = 30;
    /// Power-ups fall at a fixed rate regardless of level.
    pub const POWER_UP_VEL: i32 = 3;
    /// One power-up in this many frames, on average.
    pub const POWER_UP_CHANCE: u32 = 300;

    pub const SHIELD_DURATION_MS: u64 = 5_000;

    pub const INITIAL_SPAWN_INTERVAL_MS: u32 = 2_000;
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 500;
    pub const SPAWN_INTERVAL_STEP_MS: u32 = 100;

    /// Levels advance every this many whole seconds.
    pub const LEVEL_PERIOD_SECS: u64 = 10;

    pub const TARGET_FPS: u32 = 60;
}
