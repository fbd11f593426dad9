//! All game entity types — pure data, no logic beyond geometry helpers.

use serde::{Deserialize, Serialize};

use crate::consts::*;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box, top-left at `(x, y)`, in playfield units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap: boxes that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// Menu order, left to right.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Next swatch to the right; stays put on the last one.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous swatch to the left; stays put on the first one.
    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Yellow => "Yellow",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub color: PlayerColor,
}

impl Player {
    pub fn new(color: PlayerColor) -> Self {
        Self {
            rect: Rect::new(
                PLAYER_START_X,
                HEIGHT - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            color,
        }
    }
}

// ── Falling things ────────────────────────────────────────────────────────────

/// A falling hazard.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub rect: Rect,
}

impl Star {
    /// A star whose bottom edge sits on the top of the playfield.
    pub fn above(x: i32) -> Self {
        Self {
            rect: Rect::new(x, -STAR_HEIGHT, STAR_WIDTH, STAR_HEIGHT),
        }
    }
}

/// A falling pickup that grants a shield.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
}

impl PowerUp {
    pub fn above(x: i32) -> Self {
        Self {
            rect: Rect::new(x, -POWER_UP_HEIGHT, POWER_UP_WIDTH, POWER_UP_HEIGHT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shield {
    /// Session clock reading when the power-up was collected.
    pub activated_at_ms: u64,
}

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Difficulty {
    pub level: u32,
    pub star_velocity: i32,
    pub spawn_interval_ms: u32,
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// Hit by a star without a shield. Terminal.
    Lost,
    /// External exit signal. Terminal.
    Quit,
}

/// Input polled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Wall time since the previous frame.
    pub dt_ms: u32,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub player: Player,
    pub stars: Vec<Star>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    /// Best score seen so far, raised live during play.
    pub high_score: u32,
    /// Best score recorded before this session started.
    pub best_at_start: u32,
    pub difficulty: Difficulty,
    /// Milliseconds accumulated since the last star batch.
    pub spawn_clock_ms: u32,
    pub elapsed_ms: u64,
    pub shield: Option<Shield>,
    pub status: SessionStatus,
    pub frame: u64,
}

impl SessionState {
    pub fn shield_active(&self) -> bool {
        self.shield.is_some()
    }

    pub fn level(&self) -> u32 {
        self.difficulty.level
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    /// Strictly beats the stored best; a tie ranks behind it.
    pub fn is_new_best(&self) -> bool {
        self.score > self.best_at_start
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }
}
