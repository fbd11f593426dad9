//! Player preferences
//!
//! Persisted separately from the leaderboard, as JSON under `$HOME`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::entities::PlayerColor;
use crate::error::StoreError;

const FILE_NAME: &str = ".dodge_hurdles_settings.json";

pub const MIN_FPS: u32 = 15;
pub const MAX_FPS: u32 = 240;

/// `$HOME`, or the working directory when unset.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Last colour picked in the menu
    pub player_color: PlayerColor,
    /// Frame-rate governor target
    pub fps: u32,
    /// A key counts as held this many frames after its last press/repeat,
    /// for terminals that never report key releases.
    pub hold_window_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_color: PlayerColor::Red,
            fps: TARGET_FPS,
            hold_window_frames: 8,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        home_dir().join(FILE_NAME)
    }

    /// Clamp hand-edited values into their usable ranges.
    pub fn sanitized(self) -> Self {
        Self {
            fps: self.fps.clamp(MIN_FPS, MAX_FPS),
            hold_window_frames: self.hold_window_frames.max(1),
            ..self
        }
    }

    /// Target duration of one frame in milliseconds.
    pub fn frame_ms(&self) -> u64 {
        1000 / u64::from(self.fps.clamp(MIN_FPS, MAX_FPS))
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str::<Settings>(&json)?.sanitized()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `load`, but any failure is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                info!("Settings loaded: {:?}", settings);
                settings
            }
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
