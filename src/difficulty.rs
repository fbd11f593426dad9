//! Level and spawn-rate tuning as a pure function of the session clock.

use crate::consts::*;
use crate::entities::Difficulty;

impl Difficulty {
    /// Parameters a fresh session starts with, before the clock is sampled.
    pub fn initial() -> Self {
        Self {
            level: 1,
            star_velocity: STAR_BASE_VEL,
            spawn_interval_ms: INITIAL_SPAWN_INTERVAL_MS,
        }
    }

    pub fn for_level(level: u32) -> Self {
        let level = level.max(1);
        let spawn_interval_ms = INITIAL_SPAWN_INTERVAL_MS
            .saturating_sub(level.saturating_mul(SPAWN_INTERVAL_STEP_MS))
            .max(MIN_SPAWN_INTERVAL_MS);
        Self {
            level,
            star_velocity: STAR_BASE_VEL + (level as i32 - 1),
            spawn_interval_ms,
        }
    }
}

pub fn level_for_elapsed(elapsed_ms: u64) -> u32 {
    (elapsed_ms / 1000 / LEVEL_PERIOD_SECS) as u32 + 1
}

/// Sample the clock and re-derive difficulty.
///
/// Only frames whose whole-second reading is a multiple of the level period
/// update the parameters; every other frame keeps `current`. A frame longer
/// than one second can therefore step over a boundary, which is then picked
/// up at the next multiple.
pub fn recompute(current: Difficulty, elapsed_ms: u64) -> Difficulty {
    let secs = elapsed_ms / 1000;
    if elapsed_ms == 0 || secs % LEVEL_PERIOD_SECS != 0 {
        return current;
    }
    let next = Difficulty::for_level(level_for_elapsed(elapsed_ms));
    // Elapsed time only grows, but a caller-supplied `current` may be ahead.
    if next.level < current.level {
        current
    } else {
        next
    }
}
