//! Settings and score persistence.
//!
//! Two flat JSON records under the data directory (`~/.noughts` by default),
//! loaded once at startup and rewritten wholesale on change. Loads fall back
//! to defaults on any failure; saves are fire-and-forget so a full disk or a
//! read-only home directory never disrupts gameplay.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use derive_getters::Getters;
use noughts_core::{GameStatus, Player};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default preferred terminal width, in cells.
pub const DEFAULT_COLS: u16 = 96;
/// Default preferred terminal height, in cells.
pub const DEFAULT_ROWS: u16 = 32;
/// Smallest usable terminal width.
pub const MIN_COLS: u16 = 44;
/// Smallest usable terminal height.
pub const MIN_ROWS: u16 = 20;

const DATA_DIR_NAME: &str = ".noughts";
const SETTINGS_FILE: &str = "settings.json";
const SCORE_FILE: &str = "score.json";
const LOG_FILE: &str = "noughts.log";

/// User-configurable application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred terminal width in cells, applied at startup when possible.
    pub width: u16,
    /// Preferred terminal height in cells.
    pub height: u16,
    /// Active theme name; unknown names fall back to the default theme.
    pub theme: String,
    /// Highlight (and blink) the winning line when a game ends.
    pub show_highlight: bool,
    /// Automatically persist the score after each finished game.
    pub autosave_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            theme: "Classic".to_string(),
            show_highlight: true,
            autosave_score: true,
        }
    }
}

/// Win/draw counters kept across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    /// Games won by X.
    pub x_wins: u64,
    /// Games won by O.
    pub o_wins: u64,
    /// Drawn games.
    pub draws: u64,
}

impl Score {
    /// Total number of finished games.
    pub fn total(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Bumps the counter matching a finished game's status.
    ///
    /// An in-progress status is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Score::default();
    }
}

/// File-backed store for the settings and score records.
#[derive(Debug, Clone, Getters)]
pub struct Store {
    /// Directory holding the JSON records and the log file.
    dir: PathBuf,
}

impl Store {
    /// Opens the store rooted at the given directory, or `~/.noughts`.
    pub fn open(data_dir: Option<PathBuf>) -> Self {
        let dir = data_dir.unwrap_or_else(default_data_dir);
        debug!(dir = %dir.display(), "Opening store");
        Self { dir }
    }

    /// Path of the settings record.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Path of the score record.
    pub fn score_path(&self) -> PathBuf {
        self.dir.join(SCORE_FILE)
    }

    /// Path of the log file, which also serves as the error log.
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    /// Loads the settings, falling back to defaults on any failure.
    pub fn load_settings(&self) -> Settings {
        load_record(&self.settings_path())
    }

    /// Saves the settings, swallowing failures.
    pub fn save_settings(&self, settings: &Settings) {
        self.save_record(&self.settings_path(), settings);
    }

    /// Loads the score, falling back to zeros on any failure.
    pub fn load_score(&self) -> Score {
        load_record(&self.score_path())
    }

    /// Saves the score, swallowing failures.
    pub fn save_score(&self, score: &Score) {
        self.save_record(&self.score_path(), score);
    }

    /// Writes the score to an arbitrary path (the score screen's "save as").
    ///
    /// Unlike the in-place saves, failures here are returned so the UI can
    /// surface them.
    pub fn export_score(path: &Path, score: &Score) -> Result<()> {
        let json = serde_json::to_string_pretty(score).context("failed to serialize score")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Reads a score record from an arbitrary path.
    pub fn import_score(path: &Path) -> Result<Score> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    fn save_record<T: Serialize>(&self, path: &Path, value: &T) {
        if let Err(e) = self.try_save_record(path, value) {
            warn!(path = %path.display(), error = %e, "Failed to save record");
        }
    }

    fn try_save_record<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(value).context("failed to serialize record")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DATA_DIR_NAME),
        None => PathBuf::from(DATA_DIR_NAME),
    }
}

fn load_record<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        debug!(path = %path.display(), "No record on disk, using defaults");
        return T::default();
    }
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse record, using defaults");
                T::default()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read record, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(Some(dir.path().join("data")));
        (dir, store)
    }

    #[test]
    fn test_settings_round_trip() {
        let (_dir, store) = temp_store();
        let settings = Settings {
            width: 120,
            height: 40,
            theme: "Dark".to_string(),
            show_highlight: false,
            autosave_score: true,
        };
        store.save_settings(&settings);
        assert_eq!(store.load_settings(), settings);
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load_settings(), Settings::default());
        assert_eq!(store.load_score(), Score::default());
    }

    #[test]
    fn test_corrupt_settings_yield_defaults() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.dir()).expect("create dir");
        fs::write(store.settings_path(), "{not json").expect("write");
        assert_eq!(store.load_settings(), Settings::default());
    }

    #[test]
    fn test_partial_record_fills_missing_fields() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.dir()).expect("create dir");
        fs::write(store.settings_path(), r#"{"theme": "Green"}"#).expect("write");
        let settings = store.load_settings();
        assert_eq!(settings.theme, "Green");
        assert_eq!(settings.width, DEFAULT_COLS);
        assert!(settings.show_highlight);

        fs::write(store.score_path(), r#"{"draws": 3}"#).expect("write");
        let score = store.load_score();
        assert_eq!(score.draws, 3);
        assert_eq!(score.x_wins, 0);
    }

    #[test]
    fn test_score_record_counts_outcomes() {
        let mut score = Score::default();
        score.record(GameStatus::Won(Player::X));
        score.record(GameStatus::Won(Player::X));
        score.record(GameStatus::Won(Player::O));
        score.record(GameStatus::Draw);
        score.record(GameStatus::InProgress);
        assert_eq!(score.x_wins, 2);
        assert_eq!(score.o_wins, 1);
        assert_eq!(score.draws, 1);
        assert_eq!(score.total(), 4);
    }

    #[test]
    fn test_export_and_import_score() {
        let (dir, _store) = temp_store();
        let path = dir.path().join("exported.json");
        let score = Score {
            x_wins: 5,
            o_wins: 2,
            draws: 1,
        };
        Store::export_score(&path, &score).expect("export");
        assert_eq!(Store::import_score(&path).expect("import"), score);
    }

    #[test]
    fn test_import_missing_file_is_an_error() {
        let (dir, _store) = temp_store();
        assert!(Store::import_score(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_save_to_unwritable_dir_is_swallowed() {
        let store = Store::open(Some(PathBuf::from("/proc/definitely/not/writable")));
        // Must not panic or error out.
        store.save_settings(&Settings::default());
        store.save_score(&Score::default());
    }
}
