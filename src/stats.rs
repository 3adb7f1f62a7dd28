//! Run statistics and the persisted high score.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::settings::Settings;

pub const HIGH_SCORE_FILE: &str = "high_score.txt";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to write high score to {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ── High-score file ───────────────────────────────────────────────────────────

/// A plaintext file holding a single decimal integer.
#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score. A missing or unparsable file counts as 0.
    pub fn load(&self) -> u32 {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no high score file, starting at 0");
                return 0;
            }
        };
        match contents.trim().parse() {
            Ok(score) => score,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "corrupt high score file, starting at 0");
                0
            }
        }
    }

    /// Overwrite the file with `score`.
    pub fn save(&self, score: u32) -> Result<(), StatsError> {
        std::fs::write(&self.path, score.to_string()).map_err(|source| StatsError::Save {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for HighScoreFile {
    fn default() -> Self {
        HighScoreFile::new(HIGH_SCORE_FILE)
    }
}

// ── Game statistics ───────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub game_active: bool,
    /// Never touched by `reset_stats`.
    pub high_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            level: 1,
            game_active: false,
            high_score,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reset what changes during a single game.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}
